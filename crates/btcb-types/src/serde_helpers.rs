//! `#[serde(with = ...)]` adapters for the alternative text forms
//!
//! Fixed-width integers serialize as hex by default; balances are stored as
//! decimal strings and work values as 16-digit hex.

/// Decimal string form of a fixed-width integer
pub mod dec {
    use crate::FixedUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        value: &FixedUint<N>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.encode_dec())
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<FixedUint<N>, D::Error> {
        let text = String::deserialize(deserializer)?;
        FixedUint::decode_dec(&text).map_err(serde::de::Error::custom)
    }
}

/// 16-digit hex form of a `u64`
pub mod hex_u64 {
    use crate::codec::{u64_from_hex, u64_to_hex};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&u64_to_hex(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        u64_from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Amount, BlockHash};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        hash: BlockHash,
        #[serde(with = "super::dec")]
        balance: Amount,
        #[serde(with = "super::hex_u64")]
        work: u64,
    }

    #[test]
    fn test_entry_round_trip() {
        let entry = Entry {
            hash: BlockHash::from(0xabcdu32),
            balance: Amount::from_u128(1_000_000),
            work: 0x2bf29ef00786a6bc,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["balance"], "1000000");
        assert_eq!(json["work"], "2bf29ef00786a6bc");
        assert_eq!(
            json["hash"],
            "000000000000000000000000000000000000000000000000000000000000ABCD"
        );

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_strict_decimal_on_load() {
        let json = r#"{ "hash": "0", "balance": "0100", "work": "0" }"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
