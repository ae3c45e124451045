use enigma_core::{encrypt, Settings};

#[test]
fn wheels_123_key_abc() {
    let s = Settings::new([1, 2, 3], "ABC");
    assert_eq!(encrypt("AAA", &s).unwrap(), "CXT");
}

#[test]
fn wheels_123_key_aaa_26_letters() {
    let s = Settings::new([1, 2, 3], "AAA");
    let got = encrypt(&"A".repeat(26), &s).unwrap();
    assert_eq!(got, "BDZGOWCXLTKSBTMCDLPBMUQOFX");
}

#[test]
fn hello_world() {
    let s = Settings::new([1, 2, 3], "AAA");
    assert_eq!(encrypt("HELLOWORLD", &s).unwrap(), "ILBDAAMTAZ");
}

#[test]
fn ring_setting_bbb() {
    let s = Settings::new([1, 2, 3], "AAA").with_ring("BBB");
    assert_eq!(encrypt("AAAAA", &s).unwrap(), "EWTYX");
}

#[test]
fn plugboard_changes_only_plugged_letters() {
    let s = Settings::new([1, 2, 3], "AAA").with_plugboard("HX LQ");
    assert_eq!(encrypt("HELLOWORLD", &s).unwrap(), "GQVIAAMTHZ");
}

#[test]
fn full_daily_key() {
    let s = Settings::new([2, 4, 5], "BLA")
        .with_ring("BUL")
        .with_plugboard("AV BS CG DL FU HZ IN KM OW RX");
    assert_eq!(encrypt("ENIGMAMACHINE", &s).unwrap(), "AXXNKOOZKDZIA");
}

#[test]
fn reflector_a_reversed_wheels() {
    let s = Settings::new([3, 2, 1], "QEV").with_reflector('A');
    let got = encrypt(&"A".repeat(26), &s).unwrap();
    assert_eq!(got, "OHZPLBUISSELXVXEMBWLUOFTPD");
}

#[test]
fn reflector_c() {
    let s = Settings::new([1, 2, 3], "AAA").with_reflector("c");
    assert_eq!(encrypt("A", &s).unwrap(), "P");
}

#[test]
fn reflector_by_wiring_matches_named() {
    let named = Settings::new([1, 2, 3], "ABC");
    let wired = Settings::new([1, 2, 3], "ABC").with_reflector("YRUHQSLDPXNGOKMIEBFZCWVJAT");
    assert_eq!(
        encrypt("WETTERBERICHT", &named).unwrap(),
        encrypt("WETTERBERICHT", &wired).unwrap()
    );
}

#[test]
fn empty_message() {
    let s = Settings::new([1, 2, 3], "AAA");
    assert_eq!(encrypt("", &s).unwrap(), "");
}

#[test]
fn builder_defaults_are_reflector_b_ring_aaa() {
    let implicit = Settings::new([1, 2, 3], "AAA");
    let explicit = Settings::new([1, 2, 3], "AAA")
        .with_reflector('B')
        .with_ring("AAA");
    assert_eq!(encrypt("AAAAA", &implicit).unwrap(), "BDZGO");
    assert_eq!(encrypt("AAAAA", &explicit).unwrap(), "BDZGO");
}
