use serde::{Deserialize, Serialize};

/// A selectable backing database. Rows come from the `tenants` reference
/// endpoint; the frontend also carries a built-in fallback list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
}
