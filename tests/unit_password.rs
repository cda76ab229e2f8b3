use warden::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_produces_bcrypt_hash() {
    let hash = hash_password("secret-pass").unwrap();

    assert_ne!(hash, "secret-pass");
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_password_round_trip() {
    let hash = hash_password("secret-pass").unwrap();

    assert!(verify_password("secret-pass", &hash).unwrap());
    assert!(!verify_password("wrong-pass", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("same-password").unwrap();
    let second = hash_password("same-password").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("same-password", &first).unwrap());
    assert!(verify_password("same-password", &second).unwrap());
}

#[test]
fn test_verify_password_rejects_garbage_hash() {
    assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
}
