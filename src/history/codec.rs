//! Payload encoding: JSON then encryption.

use serde_json::{Map, Value};

use crate::cipher::Cipher;
use crate::error::Result;

/// Tracked property map, keyed by property name.
pub type Properties = Map<String, Value>;

/// Converts tracked property maps to and from stored payload tokens.
pub struct PayloadCodec<'c, C: ?Sized> {
    cipher: &'c C,
}

impl<'c, C: Cipher + ?Sized> PayloadCodec<'c, C> {
    pub fn new(cipher: &'c C) -> Self {
        Self { cipher }
    }

    /// Serialize and encrypt a property map.
    pub fn encode(&self, properties: &Properties) -> Result<String> {
        let json = serde_json::to_string(properties)?;
        self.cipher.encrypt(&json)
    }

    /// Decrypt and deserialize a stored payload.
    ///
    /// Anything other than a non-empty string token (a missing entry, a
    /// null history slot) decodes to an empty map.
    pub fn decode(&self, stored: Option<&Value>) -> Result<Properties> {
        match stored {
            Some(Value::String(token)) if !token.is_empty() => {
                let json = self.cipher.decrypt(token)?;
                Ok(serde_json::from_str(&json)?)
            }
            _ => Ok(Properties::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{CipherKey, SessionCipher};
    use crate::error::StateError;
    use proptest::prelude::*;
    use serde_json::json;

    fn cipher() -> SessionCipher {
        SessionCipher::new(&CipherKey::derive("codec-tests"))
    }

    fn props(value: Value) -> Properties {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn encode_then_decode() {
        let cipher = cipher();
        let codec = PayloadCodec::new(&cipher);
        let map = props(json!({"count": 3, "tags": ["a", "b"], "meta": {"open": true}}));

        let token = codec.encode(&map).unwrap();
        assert_eq!(codec.decode(Some(&Value::String(token))).unwrap(), map);
    }

    #[test]
    fn missing_payload_decodes_empty() {
        let cipher = cipher();
        let codec = PayloadCodec::new(&cipher);
        assert!(codec.decode(None).unwrap().is_empty());
        assert!(codec.decode(Some(&Value::Null)).unwrap().is_empty());
        assert!(codec.decode(Some(&json!(""))).unwrap().is_empty());
    }

    #[test]
    fn non_string_payload_decodes_empty() {
        let cipher = cipher();
        let codec = PayloadCodec::new(&cipher);
        assert!(codec.decode(Some(&json!({"count": 1}))).unwrap().is_empty());
        assert!(codec.decode(Some(&json!(42))).unwrap().is_empty());
    }

    #[test]
    fn tampered_payload_is_decryption_error() {
        let cipher = cipher();
        let codec = PayloadCodec::new(&cipher);
        let err = codec.decode(Some(&json!("definitely-not-a-token"))).unwrap_err();
        assert!(matches!(err, StateError::Decryption { .. }));
    }

    #[test]
    fn non_object_plaintext_is_payload_error() {
        let cipher = cipher();
        let codec = PayloadCodec::new(&cipher);
        let token = cipher.encrypt("[1, 2]").unwrap();
        let err = codec.decode(Some(&Value::String(token))).unwrap_err();
        assert!(matches!(err, StateError::Payload(_)));
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(
            entries in prop::collection::btree_map("[a-z_]{1,8}", scalar(), 0..6)
        ) {
            let cipher = cipher();
            let codec = PayloadCodec::new(&cipher);
            let map: Properties = entries.into_iter().collect();

            let token = codec.encode(&map).unwrap();
            prop_assert_eq!(codec.decode(Some(&Value::String(token))).unwrap(), map);
        }
    }
}
