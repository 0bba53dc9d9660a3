use btcb_types::serde_helpers;
use btcb_types::{
    Amount, BlockHash, DisplayConfig, NumberLocale, NumericError, ParseError, Uint128, Uint256,
    Uint512, Unit, GBCB_RATIO, MBCB_RATIO,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Pending {
    source: BlockHash,
    #[serde(with = "serde_helpers::dec")]
    amount: Amount,
    #[serde(with = "serde_helpers::hex_u64")]
    work: u64,
}

#[test]
fn test_record_json_round_trip() {
    let pending = Pending {
        source: Uint256::decode_hex("0A").unwrap(),
        amount: MBCB_RATIO,
        work: 0x7202df8a7c380578,
    };
    let json = serde_json::to_string(&pending).unwrap();
    assert!(json.contains("\"1000000000000000000000000000000\""));
    assert!(json.contains("\"7202df8a7c380578\""));
    assert!(json.contains(&format!("\"{}\"", pending.source.encode_hex())));

    let back: Pending = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pending);
}

#[test]
fn test_record_rejects_bad_amount() {
    let json = r#"{"source":"00","amount":"01","work":"0000000000000000"}"#;
    let err = serde_json::from_str::<Pending>(json).unwrap_err();
    assert!(err.to_string().contains("Leading zero"), "{err}");
}

#[test]
fn test_text_conversions_agree_with_numeric_view() {
    let value = Uint512::decode_dec("1234567890123456789012345678901234567890").unwrap();
    let hex = value.encode_hex();
    assert_eq!(hex.len(), 128);
    assert_eq!(Uint512::decode_hex(&hex).unwrap(), value);
    assert_eq!(value.number().to_str_radix(16).to_uppercase(), hex.trim_start_matches('0'));
    assert_eq!(value.encode_dec(), "1234567890123456789012345678901234567890");
}

#[test]
fn test_config_from_partial_document() {
    let config = DisplayConfig::from_json(
        r#"{"unit":"Gbcb","precision":2,"locale":{"decimal_point":","}}"#,
    )
    .unwrap();
    assert_eq!(config.unit, Unit::Gbcb);
    assert!(config.group_digits);
    assert_eq!(config.locale.thousands_sep, ',');

    let amount = Amount::from_u128(GBCB_RATIO.to_u128() * 1_000 + GBCB_RATIO.to_u128() / 4);
    assert_eq!(config.format(&amount).unwrap(), "1,000,25");
    assert_eq!(config.format_with_unit(&amount).unwrap(), "1,000,25 Gbcb");
}

#[test]
fn test_errors_expose_codes() {
    let parse = Uint128::decode_hex("xyz").unwrap_err();
    assert_eq!(parse, ParseError::InvalidCharacter { position: 0 });
    assert_eq!(parse.error_code(), "INVALID_CHARACTER");

    let numeric = Amount::from(1u8)
        .format_balance(Amount::zero(), 2, false, &NumberLocale::default())
        .unwrap_err();
    assert!(matches!(numeric, NumericError::DivisionByZero));
    assert_eq!(numeric.error_code(), "DIVISION_BY_ZERO");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_formatting() {
    let config = std::sync::Arc::new(DisplayConfig::default());
    let mut handles = Vec::new();
    for i in 0u128..32 {
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            let amount = Amount::from_u128(MBCB_RATIO.to_u128() * i);
            (i, config.format(&amount).unwrap())
        }));
    }
    for handle in handles {
        let (i, text) = handle.await.unwrap();
        assert_eq!(text, i.to_string());
    }
}
