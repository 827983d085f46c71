//! HS256 bearer tokens sent with every request.
//!
//! A token is a compact JWT: base64url(header).base64url(claims).base64url(sig)
//! where the signature is HMAC-SHA256 keyed with the API key. The server
//! accepts it only while `iat` is within [`TOKEN_VALIDITY_SECONDS`] of its
//! clock, so tokens are minted fresh for each request.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// How far `iat` may drift from the current time before a token is rejected.
pub const TOKEN_VALIDITY_SECONDS: i64 = 30;

const ALGORITHM: &str = "HS256";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Decode(String),
    #[error("Invalid token: signature")]
    Signature,
    #[error("Invalid token: unsupported algorithm {0}")]
    Algorithm(String),
    #[error("Invalid token: no issuer")]
    MissingIssuer,
    #[error("Token has expired")]
    Expired { issued_at: i64 },
    #[error("Invalid signing key")]
    InvalidKey,
}

#[derive(Serialize, Deserialize)]
struct Header {
    typ: String,
    alg: String,
}

/// Claims carried by a token: the issuing service and the issue time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub iat: i64,
}

#[derive(Deserialize)]
struct RawClaims {
    iss: Option<String>,
    iat: Option<i64>,
}

/// Mints a token for `client_id`, signed with `secret`, issued now.
pub fn create_jwt_token(secret: &str, client_id: &str) -> Result<String, TokenError> {
    create_jwt_token_at(secret, client_id, Utc::now().timestamp())
}

/// Mints a token with an explicit issue time (unix seconds).
pub fn create_jwt_token_at(
    secret: &str,
    client_id: &str,
    issued_at: i64,
) -> Result<String, TokenError> {
    let header = Header {
        typ: "JWT".to_string(),
        alg: ALGORITHM.to_string(),
    };
    let claims = Claims {
        iss: client_id.to_string(),
        iat: issued_at,
    };

    let header_b64 = encode_segment(&header)?;
    let claims_b64 = encode_segment(&claims)?;
    let signing_input = format!("{}.{}", header_b64, claims_b64);
    let signature = sign(secret, signing_input.as_bytes())?;

    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Reads the issuer from a token without checking its signature.
pub fn get_token_issuer(token: &str) -> Result<String, TokenError> {
    let (_, claims_b64, _) = split(token)?;
    let claims: RawClaims = decode_segment(claims_b64)?;
    claims.iss.ok_or(TokenError::MissingIssuer)
}

/// Verifies a token against `secret` and the current time.
pub fn decode_jwt_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode_jwt_token_at(token, secret, Utc::now().timestamp())
}

/// Verifies a token against `secret` as if the current time were `now`.
pub fn decode_jwt_token_at(token: &str, secret: &str, now: i64) -> Result<Claims, TokenError> {
    let (header_b64, claims_b64, signature_b64) = split(token)?;

    let header: Header = decode_segment(header_b64)?;
    if header.alg != ALGORITHM {
        return Err(TokenError::Algorithm(header.alg));
    }

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|e| TokenError::Decode(e.to_string()))?;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::InvalidKey)?;
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(claims_b64.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::Signature)?;

    let raw: RawClaims = decode_segment(claims_b64)?;
    let iss = raw.iss.ok_or(TokenError::MissingIssuer)?;
    let iat = raw
        .iat
        .ok_or_else(|| TokenError::Decode("missing iat".to_string()))?;

    if (now - iat).abs() > TOKEN_VALIDITY_SECONDS {
        return Err(TokenError::Expired { issued_at: iat });
    }

    Ok(Claims { iss, iat })
}

fn sign(secret: &str, input: &[u8]) -> Result<Vec<u8>, TokenError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::InvalidKey)?;
    mac.update(input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn split(token: &str) -> Result<(&str, &str, &str), TokenError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(c), Some(s), None) => Ok((h, c, s)),
        _ => Err(TokenError::Decode("expected three segments".to_string())),
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::Decode(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Decode(e.to_string()))
}
