// Path: crates/client/tests/did_lifecycle.rs

//! End-to-end lifecycle tests: building a document, evolving it through
//! updaters, and checking the serialized entries byte-for-byte where the
//! wire contract demands it.

use factom_did_client::{Document, EntryError, KeyPurpose, KeyType};
use serde_json::Value;

fn did() -> Document {
    Document::new()
        .management_key("man-key1", 0, KeyType::EdDSA, None)
        .unwrap()
}

fn full_did() -> Document {
    Document::new()
        .management_key("man-key1", 0, KeyType::EdDSA, None)
        .unwrap()
        .management_key("man-key2", 1, KeyType::ECDSA, None)
        .unwrap()
        .management_key("man-key3", 1, KeyType::EdDSA, None)
        .unwrap()
        .management_key("man-key4", 2, KeyType::RSA, None)
        .unwrap()
        .did_key(
            "did-key1",
            [KeyPurpose::Authentication],
            KeyType::EdDSA,
            None,
            Some(2),
        )
        .unwrap()
        .did_key(
            "did-key2",
            [KeyPurpose::Authentication, KeyPurpose::PublicKey],
            KeyType::EdDSA,
            None,
            Some(3),
        )
        .unwrap()
        .did_key(
            "did-key3",
            [KeyPurpose::PublicKey],
            KeyType::EdDSA,
            None,
            Some(1),
        )
        .unwrap()
        .service("gmail-service", "email-service", "https://gmail.com", Some(2))
        .unwrap()
        .service(
            "banking-credential-service",
            "credential-store-service",
            "https://credentials.com",
            Some(0),
        )
        .unwrap()
}

/// Checks that `ext_ids[3]` is a valid signature by the key referenced in
/// `ext_ids[2]` over `ext_ids[0] || ext_ids[1] || ext_ids[2] || content`.
fn assert_signature_valid(document: &Document, entry: &factom_did_client::EntryData) {
    let key_id = String::from_utf8(entry.ext_ids[2].clone()).unwrap();
    let alias = key_id.split('#').nth(1).unwrap();
    let signer = document
        .management_keys()
        .iter()
        .find(|k| k.alias() == alias)
        .unwrap();

    let mut message = Vec::new();
    message.extend_from_slice(&entry.ext_ids[0]);
    message.extend_from_slice(&entry.ext_ids[1]);
    message.extend_from_slice(&entry.ext_ids[2]);
    message.extend_from_slice(&entry.content);
    assert!(signer.verify(&message, &entry.ext_ids[3]));

    // Any other byte stream must not verify.
    message.push(0);
    assert!(!signer.verify(&message, &entry.ext_ids[3]));
}

#[test]
fn test_update_with_only_additions() {
    let document = did();
    let mut updater = document.update().unwrap();
    updater
        .add_management_key("man-key2", 0, KeyType::EdDSA, None)
        .unwrap()
        .add_management_key("man-key3", 1, KeyType::RSA, None)
        .unwrap()
        .add_did_key(
            "did-key1",
            [KeyPurpose::PublicKey],
            KeyType::EdDSA,
            None,
            Some(1),
        )
        .unwrap()
        .add_service(
            "signature-service",
            "signature-service",
            "https://signature-service.com",
            None,
        )
        .unwrap();
    let entry = updater.export_entry_data().unwrap().unwrap();

    assert_eq!(entry.ext_ids.len(), 4);
    assert_eq!(entry.ext_ids[0], b"DIDUpdate");
    assert_eq!(entry.ext_ids[1], b"1.0.0");
    assert_eq!(
        entry.ext_ids[2],
        format!("{}#man-key1", document.id()).as_bytes()
    );
    assert_signature_valid(&document, &entry);

    let content: Value = serde_json::from_slice(&entry.content).unwrap();
    assert!(content.get("revoke").is_none());

    let added = &content["add"];
    let management = added["managementKey"].as_array().unwrap();
    assert_eq!(management.len(), 2);
    assert_eq!(added["didKey"].as_array().unwrap().len(), 1);
    assert_eq!(added["service"].as_array().unwrap().len(), 1);

    for key in management {
        assert_eq!(key["controller"], document.id());
        let (did_id, alias) = key["id"].as_str().unwrap().split_once('#').unwrap();
        assert_eq!(did_id, document.id());
        match alias {
            "man-key2" => {
                assert_eq!(key["type"], "Ed25519VerificationKey");
                assert_eq!(key["priority"], 0);
                assert!(key.get("publicKeyBase58").is_some());
                assert!(key.get("publicKeyPem").is_none());
                assert!(key.get("priorityRequirement").is_none());
            }
            "man-key3" => {
                assert_eq!(key["type"], "RSAVerificationKey");
                assert_eq!(key["priority"], 1);
                assert!(key.get("publicKeyPem").is_some());
                assert!(key.get("publicKeyBase58").is_none());
                assert!(key.get("priorityRequirement").is_none());
            }
            other => panic!("unexpected alias {other}"),
        }
    }

    let new_did_key = &added["didKey"][0];
    assert_eq!(
        new_did_key["id"],
        format!("{}#did-key1", document.id())
    );
    assert_eq!(new_did_key["purpose"], serde_json::json!(["publicKey"]));
    assert_eq!(new_did_key["priorityRequirement"], 1);
    assert_eq!(new_did_key["type"], "Ed25519VerificationKey");
    assert_eq!(new_did_key["controller"], document.id());

    let new_service = &added["service"][0];
    assert_eq!(
        new_service["id"],
        format!("{}#signature-service", document.id())
    );
    assert_eq!(new_service["type"], "signature-service");
    assert_eq!(new_service["serviceEndpoint"], "https://signature-service.com");
}

#[test]
fn test_update_with_only_revocations() {
    let document = full_did();
    let mut updater = document.update().unwrap();
    updater
        .revoke_management_key("man-key3")
        .unwrap()
        .revoke_did_key("did-key2")
        .unwrap()
        .revoke_service("gmail-service")
        .unwrap();
    let entry = updater.export_entry_data().unwrap().unwrap();

    assert_eq!(entry.ext_ids.len(), 4);
    assert_eq!(entry.ext_ids[0], b"DIDUpdate");
    assert_eq!(entry.ext_ids[1], b"1.0.0");
    assert_eq!(
        entry.ext_ids[2],
        format!("{}#man-key1", document.id()).as_bytes()
    );
    assert_signature_valid(&document, &entry);

    let content: Value = serde_json::from_slice(&entry.content).unwrap();
    assert!(content.get("add").is_none());

    let revoked = &content["revoke"];
    assert_eq!(
        revoked["managementKey"],
        serde_json::json!([{"id": "man-key3"}])
    );
    assert_eq!(revoked["didKey"], serde_json::json!([{"id": "did-key2"}]));
    assert_eq!(
        revoked["service"],
        serde_json::json!([{"id": "gmail-service"}])
    );
}

#[test]
fn test_update_with_additions_and_revocations() {
    let document = full_did();
    let mut updater = document.update().unwrap();
    updater
        .add_management_key("man-key5", 0, KeyType::EdDSA, None)
        .unwrap()
        .add_did_key(
            "auth-key1",
            [KeyPurpose::Authentication],
            KeyType::EdDSA,
            None,
            None,
        )
        .unwrap()
        .add_service(
            "encrypted-chat",
            "chat-service",
            "https://my-chat-service.com",
            None,
        )
        .unwrap()
        .revoke_management_key("man-key1")
        .unwrap()
        .revoke_did_key("did-key3")
        .unwrap()
        .revoke_did_key("did-key1")
        .unwrap()
        .revoke_service("gmail-service")
        .unwrap();
    let entry = updater.export_entry_data().unwrap().unwrap();

    assert_eq!(entry.ext_ids.len(), 4);
    // Revoking the priority-0 key demands a priority-0 signer.
    assert_eq!(
        entry.ext_ids[2],
        format!("{}#man-key1", document.id()).as_bytes()
    );
    assert_signature_valid(&document, &entry);

    let content: Value = serde_json::from_slice(&entry.content).unwrap();

    let revoked = &content["revoke"];
    assert_eq!(
        revoked["managementKey"],
        serde_json::json!([{"id": "man-key1"}])
    );
    // Revocation order is the call order.
    assert_eq!(
        revoked["didKey"],
        serde_json::json!([{"id": "did-key3"}, {"id": "did-key1"}])
    );
    assert_eq!(
        revoked["service"],
        serde_json::json!([{"id": "gmail-service"}])
    );

    let added = &content["add"];
    assert_eq!(added["managementKey"].as_array().unwrap().len(), 1);
    assert_eq!(
        added["managementKey"][0]["id"],
        format!("{}#man-key5", document.id())
    );
    assert_eq!(added["managementKey"][0]["priority"], 0);
    assert_eq!(
        added["didKey"][0]["id"],
        format!("{}#auth-key1", document.id())
    );
    assert_eq!(added["didKey"][0]["purpose"], serde_json::json!(["authentication"]));
    assert_eq!(
        added["service"][0]["id"],
        format!("{}#encrypted-chat", document.id())
    );
    assert_eq!(added["service"][0]["type"], "chat-service");
    assert_eq!(
        added["service"][0]["serviceEndpoint"],
        "https://my-chat-service.com"
    );
}

#[test]
fn test_update_content_round_trips_through_the_wire_schema() {
    use factom_did_types::entry::UpdateEntryContent;

    let mut updater = full_did().update().unwrap();
    updater
        .add_service(
            "encrypted-chat",
            "chat-service",
            "https://my-chat-service.com",
            None,
        )
        .unwrap()
        .revoke_management_key("man-key3")
        .unwrap();
    let entry = updater.export_entry_data().unwrap().unwrap();

    let decoded: UpdateEntryContent = serde_json::from_slice(&entry.content).unwrap();
    let added = decoded.add.unwrap();
    assert_eq!(added.service.len(), 1);
    assert_eq!(added.service[0].endpoint, "https://my-chat-service.com");
    assert!(added.management_key.is_empty());
    let revoked = decoded.revoke.unwrap();
    assert_eq!(revoked.management_key[0].id, "man-key3");
    assert!(revoked.did_key.is_empty());
}

#[test]
fn test_revoking_the_last_management_key_fails() {
    let mut updater = did().update().unwrap();
    updater.revoke_management_key("man-key1").unwrap();
    assert!(matches!(
        updater.export_entry_data(),
        Err(EntryError::NoManagementKey)
    ));
}

#[test]
fn test_revoking_all_top_priority_keys_fails() {
    let document = Document::new()
        .management_key("man-key1", 0, KeyType::EdDSA, None)
        .unwrap()
        .management_key("man-key2", 1, KeyType::EdDSA, None)
        .unwrap();
    let mut updater = document.update().unwrap();
    updater.revoke_management_key("man-key1").unwrap();
    assert!(matches!(
        updater.export_entry_data(),
        Err(EntryError::NoTopPriorityKey)
    ));
}

#[test]
fn test_insufficient_authority_is_rejected() {
    // The only original key has priority 2, but revoking did-key1 requires
    // priority 1 or better.
    let document = Document::new()
        .management_key("man-key1", 2, KeyType::EdDSA, None)
        .unwrap()
        .did_key(
            "did-key1",
            [KeyPurpose::PublicKey],
            KeyType::EdDSA,
            None,
            Some(1),
        )
        .unwrap();
    let mut updater = document.update().unwrap();
    updater.revoke_did_key("did-key1").unwrap();
    assert!(matches!(
        updater.export_entry_data(),
        Err(EntryError::InsufficientAuthority { required: 1 })
    ));
}

#[test]
fn test_chained_updates_across_generations() {
    let mut updater = full_did().update().unwrap();
    updater.revoke_service("gmail-service").unwrap();
    let second_generation = updater.get_updated();

    let mut updater = second_generation.update().unwrap();
    updater
        .revoke_service("banking-credential-service")
        .unwrap();
    let third_generation = updater.get_updated();
    assert!(third_generation.services().is_empty());
}

#[test]
fn test_version_upgrade_entry() {
    let document = full_did();
    let entry = document.export_version_upgrade_entry("0.3.0").unwrap();

    assert_eq!(entry.ext_ids.len(), 4);
    assert_eq!(entry.ext_ids[0], b"DIDMethodVersionUpgrade");
    assert_eq!(entry.ext_ids[1], b"1.0.0");
    assert_eq!(
        entry.ext_ids[2],
        format!("{}#man-key1", document.id()).as_bytes()
    );
    assert_eq!(entry.content, br#"{"didMethodVersion":"0.3.0"}"#);
    assert_signature_valid(&document, &entry);

    assert!(document.export_version_upgrade_entry("").is_err());
}

#[test]
fn test_deactivation_entry_requires_a_top_priority_key() {
    let document = full_did();
    let entry = document.export_deactivation_entry().unwrap();

    assert_eq!(entry.ext_ids.len(), 4);
    assert_eq!(entry.ext_ids[0], b"DIDDeactivation");
    assert!(entry.content.is_empty());
    assert_signature_valid(&document, &entry);

    let weak = Document::new()
        .management_key("man-key1", 2, KeyType::EdDSA, None)
        .unwrap();
    assert!(matches!(
        weak.export_deactivation_entry(),
        Err(EntryError::NoTopPriorityKey)
    ));
}
