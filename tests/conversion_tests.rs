//! Integration tests for full seed conversions through the registry

use seedcast::{Error, Params, Registry, Ur, WordDict};

fn filler_seed(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 13 + 5) as u8).collect()
}

fn convert_out(registry: &Registry, name: &str, seed: Vec<u8>, ur: bool) -> Params {
    let mut params = Params::with_seed(seed);
    params.is_ur_out = ur;
    registry
        .get_by_name(name)
        .unwrap()
        .process_output(&mut params)
        .unwrap();
    params
}

#[test]
fn test_hex_to_bip39_and_back() {
    let registry = Registry::new();

    for len in [16, 20, 24, 28, 32] {
        let seed = filler_seed(len);
        let out = convert_out(&registry, "bip39", seed.clone(), false);

        let mut back = Params::new();
        back.inputs = out.output.split(' ').map(str::to_string).collect();
        registry
            .get_by_name("bip39")
            .unwrap()
            .process_input(&mut back)
            .unwrap();
        assert_eq!(back.seed, seed, "len {len}");
    }
}

#[test]
fn test_bip39_transport_envelope_round_trip() {
    let registry = Registry::new();

    for len in [16, 20, 24, 28, 32] {
        let seed = filler_seed(len);
        let out = convert_out(&registry, "bip39", seed.clone(), true);
        let ur = out.ur_out.clone().unwrap();
        assert_eq!(ur.ur_type, "crypto-bip39");

        // envelope body is a word dictionary in phrase order
        let dict = WordDict::from_cbor(&ur.cbor).unwrap();
        assert_eq!(dict.words.len(), len * 3 / 4);

        // and it survives the textual ur:... framing
        let reparsed = Ur::parse(&ur.to_uri()).unwrap();
        let mut back = Params::new();
        back.is_ur_in = true;
        back.ur_in = Some(reparsed);
        registry
            .get_by_name("bip39")
            .unwrap()
            .process_input(&mut back)
            .unwrap();
        assert_eq!(back.seed, seed, "len {len}");
    }
}

#[test]
fn test_bech32_round_trip_through_registry() {
    let registry = Registry::new();
    let seed = filler_seed(20);
    let out = convert_out(&registry, "bech32", seed.clone(), false);

    let mut back = Params::new();
    back.inputs = vec![out.output.clone()];
    registry
        .get_by_name("bech32")
        .unwrap()
        .process_input(&mut back)
        .unwrap();
    assert_eq!(back.seed, seed);
}

#[test]
fn test_cross_format_pipeline() {
    // hex in -> bip39 out -> bip39 in -> bech32 out -> bech32 in -> hex out
    let registry = Registry::new();
    let hex_in = "0102030405060708090a0b0c0d0e0f10";

    let mut p = Params::new();
    p.inputs = vec![hex_in.to_string()];
    registry
        .get_by_name("hex")
        .unwrap()
        .process_input(&mut p)
        .unwrap();
    let seed = p.seed.clone();

    let phrase = convert_out(&registry, "bip39", seed.clone(), false).output.clone();
    let mut p = Params::new();
    p.inputs = phrase.split(' ').map(str::to_string).collect();
    registry
        .get_by_name("bip39")
        .unwrap()
        .process_input(&mut p)
        .unwrap();
    assert_eq!(p.seed, seed);

    let bech = convert_out(&registry, "bech32", p.seed.clone(), false).output.clone();
    let mut p = Params::new();
    p.inputs = vec![bech];
    registry
        .get_by_name("bech32")
        .unwrap()
        .process_input(&mut p)
        .unwrap();

    let out = convert_out(&registry, "hex", p.seed.clone(), false);
    assert_eq!(out.output, hex_in);
}

#[test]
fn test_ints_output_through_registry() {
    let registry = Registry::new();
    let out = convert_out(&registry, "ints", filler_seed(5), false);
    let tokens: Vec<u32> = out.output.split(' ').map(|t| t.parse().unwrap()).collect();
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|&n| (1..=9).contains(&n)));
}

#[test]
fn test_failed_output_leaves_no_partial_result() {
    let registry = Registry::new();
    let mut params = Params::with_seed(filler_seed(7));
    let err = registry
        .get_by_name("bip39")
        .unwrap()
        .process_output(&mut params)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSeedLength(7, "bip39")));
    assert!(params.output.is_empty());
    assert!(params.ur_out.is_none());
    // the seed itself is untouched
    assert_eq!(params.seed, filler_seed(7));
}

#[test]
fn test_failed_input_leaves_no_partial_seed() {
    let registry = Registry::new();
    let mut params = Params::new();
    params.inputs = vec!["abc".to_string()];
    assert!(registry
        .get_by_name("hex")
        .unwrap()
        .process_input(&mut params)
        .is_err());
    assert!(params.seed.is_empty());
}
