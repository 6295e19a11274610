// Fri Oct 16 2026 - Alex

//! Ids travel as 4-digit lowercase hex strings (`"8086"`), the form pci.ids uses.
//! Use with `#[serde(with = "crate::ids::hex")]`.

use super::parser::parse_hex_id;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn format_id(id: u16) -> String {
    format!("{:04x}", id)
}

pub fn serialize<S: Serializer>(id: &u16, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_id(*id))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_hex_id(&s).map_err(de::Error::custom)
}

/// Same, for optional ids; `None` stays `null`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Option<u16>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.serialize_some(&format_id(*id)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse_hex_id(&s).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pair {
        #[serde(with = "crate::ids::hex")]
        vendor: u16,
        #[serde(with = "crate::ids::hex::option")]
        device: Option<u16>,
    }

    #[test]
    fn test_ids_written_as_hex_strings() {
        let json = serde_json::to_value(Pair { vendor: 0x0e11, device: Some(0x0046) }).unwrap();
        assert_eq!(json, serde_json::json!({ "vendor": "0e11", "device": "0046" }));

        let json = serde_json::to_value(Pair { vendor: 0x1006, device: None }).unwrap();
        assert_eq!(json, serde_json::json!({ "vendor": "1006", "device": null }));
    }

    #[test]
    fn test_ids_read_back_from_hex() {
        let pair: Pair = serde_json::from_str(r#"{ "vendor": "10DE", "device": "1b80" }"#).unwrap();
        assert_eq!(pair, Pair { vendor: 0x10de, device: Some(0x1b80) });

        assert!(serde_json::from_str::<Pair>(r#"{ "vendor": 4096, "device": null }"#).is_err());
        assert!(serde_json::from_str::<Pair>(r#"{ "vendor": "nope", "device": null }"#).is_err());
    }
}
