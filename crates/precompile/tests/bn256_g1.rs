//! Fixture scenarios for the G1 word interface and the pairing checks.
use bn254_precompile::{bn256_g1, CurveError, PrecompileError, U256};
use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixtures<T> {
    valid: Vec<Valid<T>>,
    invalid: Vec<Invalid>,
}

#[derive(Debug, Deserialize)]
struct Valid<T> {
    name: String,
    input: Vec<String>,
    output: T,
}

#[derive(Debug, Deserialize)]
struct Invalid {
    name: String,
    input: Vec<String>,
    error: ExpectedError,
}

#[derive(Clone, Copy, Debug, Deserialize)]
enum ExpectedError {
    NotOnCurve,
    InvalidPoint,
    PairLength,
}

impl From<ExpectedError> for PrecompileError {
    fn from(err: ExpectedError) -> Self {
        match err {
            ExpectedError::NotOnCurve => CurveError::NotOnCurve.into(),
            ExpectedError::InvalidPoint => CurveError::InvalidPoint.into(),
            ExpectedError::PairLength => PrecompileError::Bn128PairLength,
        }
    }
}

fn load<T: serde::de::DeserializeOwned>(json: &str) -> Fixtures<T> {
    serde_json::from_str(json).unwrap()
}

fn words(input: &[String]) -> Vec<U256> {
    input.iter().map(|w| w.parse().unwrap()).collect()
}

fn array<const N: usize>(input: &[String]) -> [U256; N] {
    words(input).try_into().unwrap()
}

#[test]
fn addition() {
    let fixtures: Fixtures<Vec<String>> = load(include_str!("fixtures/addition.json"));
    for case in &fixtures.valid {
        let output = bn256_g1::add(&array(&case.input));
        assert_eq!(output, Ok(array(&case.output)), "{}", case.name);
    }
    for case in &fixtures.invalid {
        let output = bn256_g1::add(&array(&case.input));
        assert_eq!(output, Err(case.error.into()), "{}", case.name);
    }
}

#[test]
fn multiplication() {
    let fixtures: Fixtures<Vec<String>> = load(include_str!("fixtures/multiplication.json"));
    for case in &fixtures.valid {
        let output = bn256_g1::multiply(&array(&case.input));
        assert_eq!(output, Ok(array(&case.output)), "{}", case.name);
    }
    for case in &fixtures.invalid {
        let output = bn256_g1::multiply(&array(&case.input));
        assert_eq!(output, Err(case.error.into()), "{}", case.name);
    }
}

#[test]
fn addition_matches_multiplication() {
    let fixtures: Fixtures<Vec<String>> = load(include_str!("fixtures/multiplication.json"));
    let two = fixtures.valid.iter().find(|c| c.name == "by_two").unwrap();
    let g = words(&two.input[..2]);
    assert_eq!(
        bn256_g1::add(&[g[0], g[1], g[0], g[1]]),
        Ok(array(&two.output))
    );
}

#[test]
fn pairing() {
    let fixtures: Fixtures<bool> = load(include_str!("fixtures/pairing.json"));
    for case in &fixtures.valid {
        let input = array(&case.input);
        assert_eq!(bn256_g1::check_pairing(&input), Ok(case.output), "{}", case.name);
        assert_eq!(
            bn256_g1::check_pairing_batch(&input),
            Ok(case.output),
            "{}",
            case.name
        );
    }
    for case in &fixtures.invalid {
        let output = bn256_g1::check_pairing(&array(&case.input));
        assert_eq!(output, Err(case.error.into()), "{}", case.name);
    }
}

#[test]
fn pairing_batch() {
    let fixtures: Fixtures<bool> = load(include_str!("fixtures/pairing_batch.json"));
    for case in &fixtures.valid {
        let output = bn256_g1::check_pairing_batch(&words(&case.input));
        assert_eq!(output, Ok(case.output), "{}", case.name);
    }
    for case in &fixtures.invalid {
        let output = bn256_g1::check_pairing_batch(&words(&case.input));
        assert_eq!(output, Err(case.error.into()), "{}", case.name);
    }
}

#[test]
fn is_on_curve() {
    let fixtures: Fixtures<bool> = load(include_str!("fixtures/is_on_curve.json"));
    assert!(fixtures.invalid.is_empty());
    for case in &fixtures.valid {
        let output = bn256_g1::is_on_curve(&array(&case.input));
        assert_eq!(output, case.output, "{}", case.name);
    }
}

#[test]
fn compression_of_fixture_points() {
    let fixtures: Fixtures<bool> = load(include_str!("fixtures/is_on_curve.json"));
    for case in fixtures.valid.iter().filter(|c| c.output) {
        let point: [U256; 2] = array(&case.input);
        // canonical form of the input words
        let reduced = bn256_g1::add(&[point[0], point[1], U256::ZERO, U256::ZERO]).unwrap();
        let compressed = bn256_g1::to_compressed(&point).unwrap();
        assert_eq!(bn256_g1::from_compressed(&compressed), Ok(reduced), "{}", case.name);
    }
}

#[test]
fn hash_output_is_on_curve() {
    for message in [&b""[..], &b"hello"[..], &b"bn254"[..]] {
        let point = bn256_g1::hash_to_try_and_increment(message).unwrap();
        assert!(bn256_g1::is_on_curve(&point));
        assert_ne!(point, [U256::ZERO; 2]);
    }
}
