use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{
    engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _,
};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Fresh opaque session secret.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Argon2 at rest, for session secrets and passwords alike.
pub fn encrypt(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

/// Bearer tokens carry the user id and the raw secret in one opaque blob.
pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    Some((Uuid::parse_str(id).ok()?, secret.to_string()))
}

/// Resolve a bearer token to its user id. None for anything malformed,
/// stale, or signed out.
pub async fn session_user_id(db: &PostgresService, token: &str) -> Option<Uuid> {
    let (user_id, secret) = extract_token_parts(token)?;
    let user = db.get_user_by_id(&user_id).await.ok()?;
    let hash = user.token_hash?;
    match verify(&secret, &hash) {
        Ok(true) => Some(user_id),
        _ => None,
    }
}
