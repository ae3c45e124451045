use enigma_core::settings::{self, sheet};
use enigma_core::{encrypt, EnigmaError, PlugboardSpec, ReflectorSelector, Settings};

const SHEET: &str = "\
# Tag 31
rotors    = 2 4 5
ring      = BUL
key       = BLA   # message key
reflector = B

plugboard = AV BS CG DL FU HZ IN KM OW RX
";

#[test]
fn parses_a_full_sheet() {
    let s = sheet::parse_sheet(SHEET).unwrap();
    assert_eq!(s.rotor_order, vec![2, 4, 5]);
    assert_eq!(s.ring, "BUL");
    assert_eq!(s.key, "BLA");
    assert_eq!(s.reflector, ReflectorSelector::Named('B'));
    assert_eq!(
        s.plugboard,
        PlugboardSpec::Sequence("AV BS CG DL FU HZ IN KM OW RX".into())
    );
    assert_eq!(encrypt("ENIGMAMACHINE", &s).unwrap(), "AXXNKOOZKDZIA");
}

#[test]
fn minimal_sheet_uses_defaults() {
    let s = sheet::parse_sheet("rotors = 1,2,3\nkey = ABC\n").unwrap();
    assert_eq!(s, Settings::new([1, 2, 3], "ABC"));
}

#[test]
fn rendered_sheet_reads_back() {
    let s = Settings::new([3, 1, 2], "XYZ")
        .with_reflector('C')
        .with_ring("MNO")
        .with_plugboard(vec![('A', 'B'), ('C', 'D')])
        .skip_plugboard_validation(true);
    let text = sheet::render_sheet(&s);
    let back = sheet::parse_sheet(&text).unwrap();
    assert_eq!(back.rotor_order, s.rotor_order);
    assert_eq!(back.ring, "MNO");
    assert_eq!(back.key, "XYZ");
    assert_eq!(back.reflector, ReflectorSelector::Named('C'));
    assert_eq!(back.plugboard, PlugboardSpec::Sequence("AB CD".into()));
    assert!(back.skip_plugboard_validation);
}

#[test]
fn sheet_errors() {
    for bad in [
        "key = AAA\n",
        "rotors = 1 2 3\n",
        "rotors = 1 2 3\nkey = AAA\nkey = BBB\n",
        "rotors = 1 2 3\nkey = AAA\ncolour = red\n",
        "rotors = 1 2 3\nkey AAA\n",
        "rotors = 1 two 3\nkey = AAA\n",
    ] {
        assert!(
            matches!(sheet::parse_sheet(bad), Err(EnigmaError::SettingsFormat(_))),
            "accepted: {bad:?}"
        );
    }
}

#[test]
fn from_bytes_detects_blob_and_sheet() {
    let s = sheet::parse_sheet(SHEET).unwrap();
    let cfg = enigma_core::validate::parse_settings(&s).unwrap();
    let blob = settings::format::encode(&cfg).unwrap();

    let from_blob = settings::from_bytes(&blob).unwrap();
    let from_text = settings::from_bytes(SHEET.as_bytes()).unwrap();
    assert_eq!(
        encrypt("WETTER", &from_blob).unwrap(),
        encrypt("WETTER", &from_text).unwrap()
    );

    assert!(settings::from_bytes(&[0xFF, 0xFE, 0x00]).is_err());
}

#[test]
fn load_reads_a_file() {
    let mut p = std::env::temp_dir();
    p.push(format!("enigma_sheet_{}.txt", std::process::id()));
    std::fs::write(&p, SHEET).unwrap();
    let s = settings::load(&p).unwrap();
    assert_eq!(s.key, "BLA");
    let _ = std::fs::remove_file(&p);

    assert!(matches!(settings::load(&p), Err(EnigmaError::Io(_))));
}
