// Path: crates/crypto/src/sign/eddsa/tests/mod.rs
use super::*;

#[test]
fn test_sign_and_verify() {
    let pair = Ed25519KeyPair::generate().unwrap();
    let message = b"hello-DIDs";

    let signature = pair.sign(message).unwrap();
    assert_eq!(signature.to_bytes().len(), 64);
    assert!(pair.public_key().verify(message, &signature).is_ok());
}

#[test]
fn test_tampered_message_fails() {
    let pair = Ed25519KeyPair::generate().unwrap();
    let signature = pair.sign(b"hello-DIDs").unwrap();
    assert!(pair.public_key().verify(b"hello", &signature).is_err());
}

#[test]
fn test_seed_round_trip_is_deterministic() {
    let pair = Ed25519KeyPair::generate().unwrap();
    let seed = pair.private_key().to_bytes();
    assert_eq!(seed.len(), ED25519_KEY_LENGTH);

    let loaded = Ed25519PrivateKey::from_bytes(&seed).unwrap();
    let rebuilt = Ed25519KeyPair::from_private_key(&loaded).unwrap();

    assert_eq!(
        rebuilt.public_key().to_bytes(),
        pair.public_key().to_bytes()
    );

    // Ed25519 is deterministic, so both pairs produce the same signature.
    let message = b"persistence";
    assert_eq!(
        pair.sign(message).unwrap().to_bytes(),
        rebuilt.sign(message).unwrap().to_bytes()
    );
}

#[test]
fn test_short_seed_rejected() {
    let err = Ed25519PrivateKey::from_bytes(b"012afaf").unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKey(_)));
}

#[test]
fn test_foreign_key_rejects_signature() {
    let signer = Ed25519KeyPair::generate().unwrap();
    let other = Ed25519KeyPair::generate().unwrap();
    let signature = signer.sign(b"message").unwrap();
    assert!(other.public_key().verify(b"message", &signature).is_err());
}
