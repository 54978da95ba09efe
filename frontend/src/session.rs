//! Session and credential store.
//!
//! Single source of truth for "who is logged in, against which tenant".
//! Tokens and the selected tenant are mirrored into localStorage so a reload
//! resumes the session; `logout` clears both the in-memory copy and storage.
//! Every other module reads the session through an injected clone; only the
//! mutators here change it.

use gloo_net::http::Request;

use common::requests::{LoginRequest, TokenPair};

use crate::config::{
    ACCESS_TOKEN_KEY, AUTH_URL, DEFAULT_TENANT, REFRESH_TOKEN_KEY, SELECTED_TENANT_KEY,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub selected_tenant: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            selected_tenant: DEFAULT_TENANT.to_string(),
        }
    }
}

impl Session {
    /// Resumes the persisted session, if any. Missing keys yield an
    /// unauthenticated session against the default tenant.
    pub fn load() -> Self {
        Self {
            access_token: storage_get(ACCESS_TOKEN_KEY),
            refresh_token: storage_get(REFRESH_TOKEN_KEY),
            selected_tenant: storage_get(SELECTED_TENANT_KEY)
                .unwrap_or_else(|| DEFAULT_TENANT.to_string()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Exchanges credentials for a token pair. On success the tokens are
    /// persisted and held in memory. Network and credential failures both
    /// collapse to `false`; the login form retries on user action only.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = match Request::post(&format!("{}/token/", AUTH_URL)).json(&payload) {
            Ok(request) => request,
            Err(_) => return false,
        };
        match request.send().await {
            Ok(response) if response.ok() => match response.json::<TokenPair>().await {
                Ok(tokens) => {
                    storage_set(ACCESS_TOKEN_KEY, &tokens.access);
                    storage_set(REFRESH_TOKEN_KEY, &tokens.refresh);
                    self.access_token = Some(tokens.access);
                    self.refresh_token = Some(tokens.refresh);
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }

    /// Clears tokens and tenant selection from memory and storage. Idempotent.
    pub fn logout(&mut self) {
        clear_storage();
        self.access_token = None;
        self.refresh_token = None;
        self.selected_tenant = DEFAULT_TENANT.to_string();
    }

    /// Changes the active tenant and persists it. Takes effect on the next
    /// API call; dependents observe the change and refetch themselves.
    pub fn set_selected_tenant(&mut self, tenant_id: &str) {
        self.selected_tenant = tenant_id.to_string();
        storage_set(SELECTED_TENANT_KEY, tenant_id);
    }

    /// Header set for authenticated API calls. Unauthenticated sessions
    /// produce `Bearer null`; the login gate keeps that path unreachable.
    pub fn auth_headers(&self) -> [(String, String); 3] {
        let token = self.access_token.as_deref().unwrap_or("null");
        [
            ("Authorization".to_string(), format!("Bearer {}", token)),
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                "X-Selected-Tenant".to_string(),
                self.selected_tenant.clone(),
            ),
        ]
    }
}

/// Drops every persisted credential. Also called by the API gateway when a
/// 401 invalidates the session mid-flight.
pub fn clear_storage() {
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SELECTED_TENANT_KEY] {
        storage_remove(key);
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn storage_get(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn storage_set(key: &str, value: &str) {
    if let Some(storage) = storage() {
        storage.set_item(key, value).ok();
    }
}

fn storage_remove(key: &str) {
    if let Some(storage) = storage() {
        storage.remove_item(key).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_headers_carry_token_and_tenant() {
        let session = Session {
            access_token: Some("abc123".to_string()),
            refresh_token: Some("def456".to_string()),
            selected_tenant: "humana".to_string(),
        };
        let headers = session.auth_headers();
        assert_eq!(headers[0].1, "Bearer abc123");
        assert_eq!(headers[1].1, "application/json");
        assert_eq!(headers[2], ("X-Selected-Tenant".to_string(), "humana".to_string()));
    }

    #[test]
    fn unauthenticated_headers_use_null_bearer() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_headers()[0].1, "Bearer null");
    }
}
