use crate::token::RawToken;
use crate::unixtime::UnixTimestamp;
use jsonwebtoken::{encode, EncodingKey, Header};

//--------------------------------------------------------------------------------------------------
// Token minting for tests - the real issuer is the backend
//--------------------------------------------------------------------------------------------------

pub(crate) fn mint(sub: i64, email: &str, role: &str, name: &str, exp: UnixTimestamp) -> RawToken {
    let payload = serde_json::json!({
        "sub": sub,
        "email": email,
        "role": role,
        "name": name,
        "exp": exp.unix_seconds(),
    });
    let token = encode(
        &Header::default(),
        &payload,
        &EncodingKey::from_secret(b"test-signing-key"),
    )
    .unwrap();
    RawToken::new(token)
}

pub(crate) fn mint_for_role(role: &str, exp: UnixTimestamp) -> RawToken {
    mint(7, "ana@example.com", role, "Ana", exp)
}

//--------------------------------------------------------------------------------------------------
