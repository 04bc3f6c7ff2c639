//! Custom serde helpers for upstream wire formats.

/// Deserializes an optional number that the upstream may send either as a JSON
/// number or as a numeric string.
///
/// Etherscan returns every value as a string (`"ProposeGasPrice": "25"`), while
/// some proxies forward plain numbers. Unparsable strings become `None`.
/// Serializes back as a plain number (or `null`).
pub mod lenient_f64 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<NumOrStr>::deserialize(deserializer)?;
        Ok(match raw {
            Some(NumOrStr::Num(n)) => Some(n),
            Some(NumOrStr::Str(s)) => s.trim().parse::<f64>().ok(),
            None => None,
        })
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(default, with = "super::lenient_f64")]
        v: Option<f64>,
    }

    #[test]
    fn test_lenient_f64_accepts_number_and_string() {
        let a: Sample = serde_json::from_str(r#"{"v": 12.5}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"v": "31"}"#).unwrap();
        assert_eq!(a.v, Some(12.5));
        assert_eq!(b.v, Some(31.0));
    }

    #[test]
    fn test_lenient_f64_garbage_and_missing() {
        let a: Sample = serde_json::from_str(r#"{"v": "n/a"}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{}"#).unwrap();
        let c: Sample = serde_json::from_str(r#"{"v": null}"#).unwrap();
        assert_eq!(a.v, None);
        assert_eq!(b.v, None);
        assert_eq!(c.v, None);
    }

    #[test]
    fn test_lenient_f64_serializes_as_number() {
        let a: Sample = serde_json::from_str(r#"{"v": "31"}"#).unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"v":31.0}"#);
        let back: Sample = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
        assert_eq!(back, a);
    }
}
