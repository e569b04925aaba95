// Path: crates/crypto/src/sign/ecdsa/tests/mod.rs
use super::*;

#[test]
fn test_sign_and_verify() {
    let pair = Secp256k1KeyPair::generate().unwrap();
    let message = b"hello-DIDs";

    let signature = pair.sign(message).unwrap();
    assert_eq!(signature.to_bytes().len(), 64);
    assert!(pair.public_key().verify(message, &signature).is_ok());
    assert!(pair.public_key().verify(b"hello", &signature).is_err());
}

#[test]
fn test_signatures_are_deterministic() {
    // RFC 6979: the nonce is derived from the key and message, so signing
    // the same message twice yields identical bytes.
    let pair = Secp256k1KeyPair::generate().unwrap();
    let message = b"deterministic";
    assert_eq!(
        pair.sign(message).unwrap().to_bytes(),
        pair.sign(message).unwrap().to_bytes()
    );
}

#[test]
fn test_scalar_round_trip() {
    let pair = Secp256k1KeyPair::generate().unwrap();
    let scalar = pair.private_key().to_bytes();
    assert_eq!(scalar.len(), SECP256K1_KEY_LENGTH);

    let loaded = Secp256k1PrivateKey::from_bytes(&scalar).unwrap();
    assert_eq!(
        loaded.public_key().unwrap().to_bytes(),
        pair.public_key().to_bytes()
    );
}

#[test]
fn test_public_key_is_compressed_sec1() {
    let pair = Secp256k1KeyPair::generate().unwrap();
    let bytes = pair.public_key().to_bytes();
    assert_eq!(bytes.len(), 33);
    assert!(bytes[0] == 0x02 || bytes[0] == 0x03);
}

#[test]
fn test_invalid_scalars_rejected() {
    // Wrong length.
    assert!(Secp256k1PrivateKey::from_bytes(b"012afaf").is_err());
    // Zero is not a valid secret scalar.
    assert!(Secp256k1PrivateKey::from_bytes(&[0u8; 32]).is_err());
    // The curve order itself is out of range.
    let order = hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")
        .unwrap();
    assert!(Secp256k1PrivateKey::from_bytes(&order).is_err());
}
