use serde::Deserialize;
use serde_with::serde_as;

// keyid is optional in DSSE and unused without verification, so serde skips it
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
struct Signature {
    #[serde_as(as = "serde_with::base64::Base64")]
    sig: Vec<u8>,
}

/// A DSSE envelope as it appears on the wire.
///
/// Only the structure is checked; signatures are never verified here.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde_as(as = "serde_with::base64::Base64")]
    payload: Vec<u8>,
    payload_type: String,
    #[serde(default)]
    signatures: Vec<Signature>,
}

impl Envelope {
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn payload_type(&self) -> &str {
        &self.payload_type
    }

    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    pub fn validate(&self) -> bool {
        // check for required envelope fields
        if self.payload.is_empty() || self.payload_type.is_empty() || self.signatures.is_empty() {
            return false;
        }

        // check required signature fields
        self.signatures.iter().all(|signature| !signature.sig.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde_json::json;

    fn envelope(payload: &[u8], payload_type: &str, sigs: serde_json::Value) -> Envelope {
        serde_json::from_value(json!({
            "payload": STANDARD.encode(payload),
            "payloadType": payload_type,
            "signatures": sigs
        }))
        .unwrap()
    }

    #[test]
    fn test_envelope_without_signatures_is_invalid() {
        let envelope = envelope(b"{}", "application/vnd.in-toto+json", json!([]));
        assert!(!envelope.validate());
    }

    #[test]
    fn test_envelope_missing_signatures_key_defaults_empty() {
        let envelope: Envelope = serde_json::from_value(json!({
            "payload": STANDARD.encode(b"{}"),
            "payloadType": "application/vnd.in-toto+json"
        }))
        .unwrap();

        assert_eq!(envelope.signature_count(), 0);
        assert!(!envelope.validate());
    }

    #[test]
    fn test_envelope_with_signature_is_valid() {
        let envelope = envelope(
            b"{}",
            "application/vnd.in-toto+json",
            json!([{"sig": STANDARD.encode([1, 2, 3]), "keyid": "key-1"}]),
        );

        assert!(envelope.validate());
        assert_eq!(envelope.signature_count(), 1);
    }

    #[test]
    fn test_envelope_rejects_empty_signature() {
        let envelope = envelope(
            b"{}",
            "application/vnd.in-toto+json",
            json!([{"sig": STANDARD.encode([1]), "keyid": "key-1"}, {"sig": ""}]),
        );

        assert_eq!(envelope.signature_count(), 2);
        assert!(!envelope.validate());
    }

    #[test]
    fn test_envelope_empty_payload_is_invalid() {
        let envelope = envelope(b"", "text/plain", json!([{"sig": STANDARD.encode(b"sig")}]));
        assert!(!envelope.validate());
    }

    #[test]
    fn test_envelope_field_names() {
        let envelope = envelope(b"payload", "text/plain", json!([{"sig": "c2ln"}]));

        assert_eq!(envelope.payload(), b"payload");
        assert_eq!(envelope.payload_type(), "text/plain");
    }

    #[test]
    fn test_envelope_rejects_invalid_base64() {
        let result: std::result::Result<Envelope, _> = serde_json::from_value(json!({
            "payload": "not base64!",
            "payloadType": "text/plain",
            "signatures": []
        }));

        assert!(result.is_err());
    }
}
