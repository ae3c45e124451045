use enigma_core::fixed::letter::Letter;
use enigma_core::validate::parse_settings;
use enigma_core::wiring::catalog;
use enigma_core::{decrypt, encrypt, Machine, Settings};

fn sample_settings() -> Vec<Settings> {
    vec![
        Settings::new([1, 2, 3], "AAA"),
        Settings::new([1, 2, 3], "ADU"),
        Settings::new([5, 4, 3], "ZZZ").with_reflector('A').with_ring("ZAQ"),
        Settings::new([2, 4, 5], "BLA")
            .with_ring("BUL")
            .with_plugboard("AV BS CG DL FU HZ IN KM OW RX"),
        Settings::new([3, 1, 5], "QEV")
            .with_reflector('C')
            .with_plugboard(vec![('p', 'o'), ('M', 'l')]),
    ]
}

const TEXT: &str = "DERFUEHRERISTTOTDERKAMPFGEHTWEITERDOENITZXQVJAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[test]
fn encrypting_twice_restores_plaintext() {
    for s in sample_settings() {
        let c = encrypt(TEXT, &s).unwrap();
        assert_ne!(c, TEXT);
        assert_eq!(encrypt(&c, &s).unwrap(), TEXT, "settings: {s:?}");
    }
}

#[test]
fn decrypt_is_lowercase_inverse() {
    for s in sample_settings() {
        let c = encrypt(TEXT, &s).unwrap();
        assert_eq!(decrypt(&c, &s).unwrap(), TEXT.to_ascii_lowercase());
    }
}

#[test]
fn no_letter_enciphers_to_itself() {
    for s in sample_settings() {
        let c = encrypt(TEXT, &s).unwrap();
        for (p, e) in TEXT.chars().zip(c.chars()) {
            assert_ne!(p, e);
        }
    }
}

#[test]
fn named_reflectors_are_fixed_point_free_involutions() {
    for id in catalog::REFLECTOR_IDS {
        let r = catalog::reflector(id).unwrap();
        assert!(r.is_bijection());
        assert!(r.is_involution(), "reflector {id}");
        assert_eq!(r.fixed_points(), 0, "reflector {id}");
    }
}

#[test]
fn catalog_wheels_are_permutations() {
    for id in 1..=5u8 {
        let spec = catalog::rotor(id).unwrap();
        assert!(spec.wiring.is_bijection(), "rotor {id}");
        assert!((1..=26).contains(&spec.notch));
        let inv = spec.inverse();
        for l in Letter::all() {
            assert_eq!(inv.apply(spec.wiring.apply(l)), l);
        }
    }
    assert!(catalog::rotor(0).is_none());
    assert!(catalog::rotor(6).is_none());
}

#[test]
fn plugboard_pair_is_symmetric() {
    let cfg = parse_settings(&Settings::new([1, 2, 3], "AAA").with_plugboard("QW")).unwrap();
    let pb = &cfg.plugboard;
    let q = Letter::from_char('Q').unwrap();
    let w = Letter::from_char('W').unwrap();
    assert_eq!(pb.apply(q), w);
    assert_eq!(pb.apply(w), q);
    for l in Letter::all().filter(|&l| l != q && l != w) {
        assert_eq!(pb.apply(l), l);
    }
}

#[test]
fn notch_counters_stay_in_range() {
    for s in sample_settings() {
        let mut m = Machine::new(&s).unwrap();
        for _ in 0..26 * 26 * 27 {
            m.press(Letter::A);
            for n in m.state.notches {
                assert!((1..=26).contains(&n), "notch counter {n} out of range");
            }
        }
    }
}

#[test]
fn movement_counters_never_decrease() {
    let mut m = Machine::new(&Settings::new([1, 2, 3], "ADU")).unwrap();
    let mut prev = m.state.movements;
    for _ in 0..2000 {
        m.press(Letter::Z);
        let now = m.state.movements;
        for slot in 0..3 {
            assert!(now[slot] >= prev[slot]);
        }
        prev = now;
    }
}
