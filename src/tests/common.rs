use crate::in_toto::{ProvenanceStatement, Subject};
use crate::slsa::{ProvenanceBuilder, ProvenanceInvocation, ProvenanceMaterial, ProvenancePredicate};
use serde_json::json;
use std::collections::HashMap;

pub const BUILDER_ID: &str = "https://example/builder";

pub fn digest(alg: &str, value: &str) -> HashMap<String, String> {
    HashMap::from([(alg.to_string(), value.to_string())])
}

/// Statement with one subject, an empty parameters object and one material.
pub fn sample_statement() -> ProvenanceStatement {
    ProvenanceStatement {
        type_: "https://in-toto.io/Statement/v0.2".to_string(),
        subject: vec![Subject {
            name: "pkg".to_string(),
            digest: digest("sha256", "ab12cd34"),
        }],
        predicate_type: "https://slsa.dev/provenance/v0.2".to_string(),
        predicate: ProvenancePredicate {
            builder: ProvenanceBuilder {
                id: BUILDER_ID.to_string(),
            },
            build_type: String::new(),
            invocation: ProvenanceInvocation {
                parameters: Some(json!({})),
                ..ProvenanceInvocation::default()
            },
            build_config: None,
            metadata: None,
            materials: vec![ProvenanceMaterial {
                uri: "git+https://example/repo".to_string(),
                digest: digest("sha1", "deadbeef"),
            }],
        },
    }
}

pub fn sample_statement_json() -> String {
    json!({
        "_type": "https://in-toto.io/Statement/v0.2",
        "subject": [{"name": "pkg", "digest": {"sha256": "ab12cd34"}}],
        "predicateType": "https://slsa.dev/provenance/v0.2",
        "predicate": {
            "builder": {"id": BUILDER_ID},
            "invocation": {"parameters": {}},
            "materials": [{"uri": "git+https://example/repo", "digest": {"sha1": "deadbeef"}}]
        }
    })
    .to_string()
}
