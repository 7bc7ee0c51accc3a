use crate::domain::user::UserId;

/// The authenticated subject as established by the token verifier.
/// Token issuance happens outside this crate.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}
