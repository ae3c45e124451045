use std::thread;

use enigma_core::{encrypt, repr::text_norm::sanitize, Settings};

#[test]
fn independent_machines_agree_across_threads() {
    let s = Settings::new([2, 4, 5], "BLA")
        .with_ring("BUL")
        .with_plugboard("AV BS CG DL FU HZ IN KM OW RX");
    let text = sanitize(&"The quick brown fox jumps over the lazy dog. ".repeat(40));
    let expected = encrypt(&text, &s).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = s.clone();
            let text = text.clone();
            thread::spawn(move || encrypt(&text, &s).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn sanitised_text_matches_hand_cleaned_text() {
    let s = Settings::new([1, 2, 3], "AAA");
    let a = encrypt(&sanitize("Hello, world!"), &s).unwrap();
    let b = encrypt("HELLOWORLD", &s).unwrap();
    assert_eq!(a, b);
}
