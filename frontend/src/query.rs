//! List query state: page, free-text search, structured filters.
//!
//! Mutating search or filters resets the page to 1 so the next fetch can
//! never land beyond the new total page count.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Sets one filter value; an empty value removes the key. Either way the
    /// page resets to 1.
    pub fn set_filter(&mut self, key: &str, value: String) {
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value);
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// Query-string pairs for a list fetch.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_string(), self.page.to_string())];
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    /// Query-string pairs for a CSV export. Export covers the full filtered
    /// set, so the page is omitted and the format marker appended.
    pub fn export_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs.push(("format".to_string(), "csv".to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_resets_page() {
        let mut query = ListQuery::new();
        query.page = 5;
        query.set_search("Smith".to_string());
        assert_eq!(query.page, 1);
        assert_eq!(
            query.pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("search".to_string(), "Smith".to_string()),
            ]
        );
    }

    #[test]
    fn filter_change_resets_page_and_empty_value_removes_key() {
        let mut query = ListQuery::new();
        query.set_filter("status", "active".to_string());
        query.page = 3;
        query.set_filter("status", String::new());
        assert_eq!(query.page, 1);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn pairs_omit_empty_search() {
        let mut query = ListQuery::new();
        query.set_filter("gender", "F".to_string());
        assert_eq!(
            query.pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("gender".to_string(), "F".to_string()),
            ]
        );
    }

    #[test]
    fn export_pairs_drop_page_and_append_format() {
        let mut query = ListQuery::new();
        query.page = 4;
        query.set_search("Mercy".to_string());
        query.set_filter("client_type", "hospital".to_string());
        query.page = 4;
        let pairs = query.export_pairs();
        assert!(!pairs.iter().any(|(key, _)| key == "page"));
        assert_eq!(pairs.last().unwrap(), &("format".to_string(), "csv".to_string()));
    }
}
