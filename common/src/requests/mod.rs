use serde::{Deserialize, Serialize};

#[derive(Serialize)]
/// Request payload for the auth token endpoint.
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Successful response of the auth token endpoint: an access token for the
/// Authorization header plus a refresh token, both persisted client-side.
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}
