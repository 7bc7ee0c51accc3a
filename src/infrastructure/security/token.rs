// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::AuthTokenVerifier,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies compact bearer tokens of the form `<id>.<username>.<sig>`,
/// where `sig` is the url-safe base64 HMAC-SHA256 of `<id>.<username>`
/// under a secret shared with the issuing auth service.
pub struct HmacTokenVerifier {
    secret: Vec<u8>,
}

impl HmacTokenVerifier {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(format!("hmac init failed: {err}")))
    }
}

#[async_trait]
impl AuthTokenVerifier for HmacTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (message, tag) = token
            .rsplit_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        let provided = URL_SAFE_NO_PAD
            .decode(tag)
            .map_err(|_| ApplicationError::unauthorized("malformed token signature"))?;

        let mut mac = self.mac()?;
        mac.update(message.as_bytes());
        mac.verify_slice(&provided)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let (id, username) = message
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token payload"))?;
        let id = id
            .parse::<i64>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(AuthenticatedUser {
            id,
            username: username.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &[u8], message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret).unwrap();
        mac.update(message.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    #[tokio::test]
    async fn accepts_a_well_signed_token() {
        let verifier = HmacTokenVerifier::new(*b"super-secret");
        let token = format!("42.gentlereader.{}", sign(b"super-secret", "42.gentlereader"));
        let user = verifier.verify(&token).await.unwrap();
        assert_eq!(i64::from(user.id), 42);
        assert_eq!(user.username, "gentlereader");
    }

    #[tokio::test]
    async fn rejects_a_tampered_token() {
        let verifier = HmacTokenVerifier::new(*b"super-secret");
        let token = format!("43.impostor.{}", sign(b"super-secret", "42.gentlereader"));
        assert!(verifier.verify(&token).await.is_err());
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let verifier = HmacTokenVerifier::new(*b"super-secret");
        assert!(verifier.verify("not-a-token").await.is_err());
        assert!(verifier.verify("0.nobody.AAAA").await.is_err());
    }
}
