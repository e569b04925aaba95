// Path: crates/crypto/src/sign/rsa/tests/mod.rs
use super::*;
use rsa::pkcs1::EncodeRsaPrivateKey;

#[test]
fn test_sign_and_verify() {
    let pair = RsaKeyPair::generate().unwrap();
    let message = b"hello-DIDs";

    let signature = pair.sign(message).unwrap();
    // PKCS#1 v1.5 signatures are as long as the modulus.
    assert_eq!(signature.to_bytes().len(), MIN_RSA_BITS / 8);
    assert!(pair.public_key().verify(message, &signature).is_ok());
    assert!(pair.public_key().verify(b"hello", &signature).is_err());
}

#[test]
fn test_private_key_accepts_pkcs1_and_pkcs8() {
    let pair = RsaKeyPair::generate().unwrap();
    let pkcs8_der = pair.private_key().to_bytes();

    // PKCS#8 DER round trip.
    let reloaded = RsaPrivateKey::from_bytes(&pkcs8_der).unwrap();
    assert_eq!(
        reloaded.public_key().unwrap().to_bytes(),
        pair.public_key().to_bytes()
    );

    // PKCS#1 PEM.
    let pkcs1_pem = rsa::RsaPrivateKey::from_pkcs8_der(&pkcs8_der)
        .unwrap()
        .to_pkcs1_pem(LineEnding::LF)
        .unwrap();
    let reloaded = RsaPrivateKey::from_bytes(pkcs1_pem.as_bytes()).unwrap();
    assert_eq!(
        reloaded.public_key().unwrap().to_bytes(),
        pair.public_key().to_bytes()
    );
}

#[test]
fn test_garbage_key_rejected() {
    let err = RsaPrivateKey::from_bytes(b"012afaf").unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKey(_)));
}

#[test]
fn test_public_pem_is_spki() {
    let pair = RsaKeyPair::generate().unwrap();
    let public = pair.public_key();
    assert!(public.pem().starts_with("-----BEGIN PUBLIC KEY-----"));

    // The PEM re-parses to the same normalized DER.
    let reloaded = RsaPublicKey::from_bytes(public.pem().as_bytes()).unwrap();
    assert_eq!(reloaded.to_bytes(), public.to_bytes());
}
