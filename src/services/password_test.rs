use super::*;

#[test]
fn hash_then_verify_round_trip() {
    let hashed = hash_password("secret1").unwrap();
    assert_ne!(hashed, "secret1");
    assert!(verify_password("secret1", &hashed).unwrap());
    assert!(!verify_password("secret2", &hashed).unwrap());
    assert!(!verify_password("", &hashed).unwrap());
}

#[test]
fn equal_plaintexts_hash_differently() {
    let a = hash_password("secret1").unwrap();
    let b = hash_password("secret1").unwrap();
    assert_ne!(a, b);
}

#[test]
fn verify_rejects_malformed_hash() {
    assert!(verify_password("secret1", "not-a-bcrypt-hash").is_err());
}

#[test]
fn verify_accepts_hash_from_any_cost() {
    // Cost is embedded in the hash; verify must not assume DEFAULT_COST.
    let cheap = bcrypt::hash("secret1", 4).unwrap();
    assert!(verify_password("secret1", &cheap).unwrap());
    assert!(!verify_password("wrong", &cheap).unwrap());
}
