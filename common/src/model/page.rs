use serde::Deserialize;

/// One page of a paginated list response.
///
/// Every list endpoint of the admin API wraps its rows in the same envelope:
/// `count` is the total number of matching rows across all pages, `next` and
/// `previous` are opaque page URLs (absent on the last/first page), and
/// `results` holds the rows of the requested page only. A new `Page` always
/// replaces the previous one wholesale; pages are never merged client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Record;

    #[test]
    fn deserializes_full_envelope() {
        let body = r#"{
            "count": 23,
            "next": "http://localhost:8000/core-api/patients/?page=2",
            "previous": null,
            "results": [{"id": 1, "firstname": "Ada"}]
        }"#;
        let page: Page<Record> = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, 23);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn missing_results_defaults_to_empty() {
        let body = r#"{"count": 0, "next": null, "previous": null}"#;
        let page: Page<Record> = serde_json::from_str(body).unwrap();
        assert!(page.results.is_empty());
    }
}
