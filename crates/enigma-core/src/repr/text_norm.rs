// crates/enigma-core/src/repr/text_norm.rs
//
// Operator-side text handling. The machine only has 26 keys, so everything
// else is dropped before a message reaches it.

/// Keep ASCII letters, uppercased; drop everything else.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Split into space-separated groups of `n` characters, as messages were
/// transmitted. `n == 0` returns the input unchanged.
pub fn group(input: &str, n: usize) -> String {
    if n == 0 {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len() + input.len() / n);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && i % n == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
