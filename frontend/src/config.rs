//! Build-time configuration and fixed client-side constants.
//!
//! Base URLs are resolved at compile time from the environment so deployments
//! can point the console at their own API without code changes; the defaults
//! match a local development server.

use common::model::tenant::Tenant;

/// Root of the resource API. Every entity endpoint hangs off this.
pub const API_BASE_URL: &str = match option_env!("ADMIN_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/core-api",
};

/// Root of the auth service exposing `POST /token/`.
pub const AUTH_URL: &str = match option_env!("ADMIN_AUTH_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// localStorage keys for the persisted session. Cleared together on logout.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const SELECTED_TENANT_KEY: &str = "selected_tenant";

/// Page size of the server's list pagination. Total page counts are derived
/// from the authoritative `count` field with this constant, never from the
/// number of rows in hand.
pub const PAGE_SIZE: u64 = 10;

pub const DEFAULT_TENANT: &str = "core";

/// Fallback tenant list used when the `tenants` endpoint is unreachable.
pub fn fallback_tenants() -> Vec<Tenant> {
    [
        ("core", "Core"),
        ("humana", "Humana"),
        ("bcbs_az", "BCBS Arizona"),
        ("centene", "Centene"),
        ("uhc", "UHC"),
        ("aarp", "AARP"),
        ("aetna", "Aetna"),
    ]
    .into_iter()
    .map(|(id, name)| Tenant {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}
