//! State for the generic record list component.
//!
//! One instance drives one entity view: the current query, the last fetched
//! page, the selection set, the fetch sequence counter, and which (if any)
//! form dialog is open. The transition helpers here are pure; the
//! side-effecting half of the state machine lives in `update.rs`.

use std::collections::HashSet;

use common::model::page::Page;
use common::model::record::Record;
use common::model::reference::ReferenceItem;

use crate::config::PAGE_SIZE;
use crate::entities::EntityKind;
use crate::query::ListQuery;

/// Which form dialog is open. At most one per view.
#[derive(Debug, Clone, PartialEq)]
pub enum FormTarget {
    Closed,
    Create,
    Edit(Record),
}

pub struct RecordListComponent {
    pub entity: EntityKind,
    pub query: ListQuery,
    /// Search box content; copied into the query on explicit submit only.
    pub search_input: String,
    pub items: Vec<Record>,
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub selection: HashSet<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters_open: bool,
    pub form: FormTarget,
    pub referral_types: Vec<ReferenceItem>,
    pub referral_statuses: Vec<ReferenceItem>,
    /// Monotonically increasing fetch sequence. A response is applied only
    /// if it carries the latest issued sequence, so a slow early response
    /// can never clobber a faster later one.
    pub fetch_seq: u32,
}

impl RecordListComponent {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            query: ListQuery::new(),
            search_input: String::new(),
            items: Vec::new(),
            total_count: 0,
            has_next: false,
            has_previous: false,
            selection: HashSet::new(),
            loading: false,
            error: None,
            filters_open: false,
            form: FormTarget::Closed,
            referral_types: Vec::new(),
            referral_statuses: Vec::new(),
            fetch_seq: 0,
        }
    }

    /// Total page count from the authoritative server-side `count`.
    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(PAGE_SIZE) as u32
    }

    /// Marks a fetch as started and returns its sequence number.
    pub fn begin_fetch(&mut self) -> u32 {
        self.fetch_seq += 1;
        self.loading = true;
        self.error = None;
        self.fetch_seq
    }

    /// Applies a successful page fetch. Returns `false` (no state change) if
    /// a newer fetch has been issued since `seq`. Replaces the page
    /// wholesale and prunes selected ids that no longer exist in it.
    pub fn apply_page(&mut self, seq: u32, page: Page<Record>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.total_count = page.count;
        self.has_next = page.has_next();
        self.has_previous = page.has_previous();
        self.items = page.results;

        let visible: HashSet<String> = self.visible_ids().into_iter().collect();
        self.selection.retain(|id| visible.contains(id));
        true
    }

    /// Applies a failed fetch: the error banner is shown but the last-known
    /// rows stay visible rather than flashing an empty table.
    pub fn fetch_failed(&mut self, seq: u32, message: String) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Clamped page navigation; returns `true` if the page actually moved.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages().max(1));
        if clamped == self.query.page {
            return false;
        }
        self.query.page = clamped;
        true
    }

    pub fn toggle_select(&mut self, id: String) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Tri-state select-all over the visible rows: selects everything unless
    /// everything is already selected, in which case it clears. Never spans
    /// pages.
    pub fn toggle_select_all(&mut self) {
        let visible = self.visible_ids();
        if !visible.is_empty() && self.selection.len() == visible.len() {
            self.selection.clear();
        } else {
            self.selection = visible.into_iter().collect();
        }
    }

    pub fn all_selected(&self) -> bool {
        let visible = self.visible_ids();
        !visible.is_empty() && self.selection.len() == visible.len()
    }

    /// Identities of the rows on screen, in row order. Rows the descriptor
    /// cannot identify are skipped (they cannot be selected or edited).
    pub fn visible_ids(&self) -> Vec<String> {
        let descriptor = self.entity.descriptor();
        self.items
            .iter()
            .filter_map(|record| descriptor.identity_of(record))
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        // Row order, for stable bulk-delete reporting.
        self.visible_ids()
            .into_iter()
            .filter(|id| self.selection.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(count: u64, ids: &[u64], next: bool, previous: bool) -> Page<Record> {
        Page {
            count,
            next: next.then(|| "next-url".to_string()),
            previous: previous.then(|| "prev-url".to_string()),
            results: ids
                .iter()
                .map(|id| serde_json::from_value(json!({"id": id, "firstname": "x"})).unwrap())
                .collect(),
        }
    }

    fn loaded_state(count: u64, ids: &[u64]) -> RecordListComponent {
        let mut state = RecordListComponent::new(EntityKind::Patients);
        let seq = state.begin_fetch();
        assert!(state.apply_page(seq, page(count, ids, false, false)));
        state
    }

    #[test]
    fn twenty_three_records_make_three_pages() {
        let state = loaded_state(23, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn first_page_envelope_disables_previous_only() {
        let mut state = RecordListComponent::new(EntityKind::Patients);
        let seq = state.begin_fetch();
        state.apply_page(seq, page(23, &[1, 2], true, false));
        assert!(state.has_next);
        assert!(!state.has_previous);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = RecordListComponent::new(EntityKind::Patients);
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(!state.apply_page(first, page(99, &[1], false, false)));
        assert!(state.items.is_empty());
        assert!(state.apply_page(second, page(2, &[1, 2], false, false)));
        assert_eq!(state.total_count, 2);
    }

    #[test]
    fn failed_fetch_keeps_last_known_rows_visible() {
        let mut state = loaded_state(2, &[1, 2]);
        let seq = state.begin_fetch();
        assert!(state.fetch_failed(seq, "boom".to_string()));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);
    }

    #[test]
    fn toggle_select_all_is_involutive() {
        let mut state = loaded_state(3, &[1, 2, 3]);
        state.toggle_select("2".to_string());
        let before = state.selection.clone();

        state.toggle_select_all();
        assert_eq!(state.selection.len(), 3);
        state.toggle_select_all();
        assert!(state.selection.is_empty());

        // Partial selection goes to all, then a second toggle clears; the
        // off -> all -> off cycle never reconstructs a partial set.
        assert_ne!(state.selection, before);
    }

    #[test]
    fn refetch_prunes_stale_selection() {
        let mut state = loaded_state(3, &[1, 2, 3]);
        state.toggle_select("1".to_string());
        state.toggle_select("3".to_string());

        let seq = state.begin_fetch();
        state.apply_page(seq, page(2, &[1, 2], false, false));
        assert_eq!(state.selected_ids(), vec!["1".to_string()]);
    }

    #[test]
    fn page_navigation_clamps_to_range() {
        let mut state = loaded_state(23, &[1, 2, 3]);
        assert!(!state.go_to_page(0));
        assert!(state.go_to_page(3));
        assert!(!state.go_to_page(9));
        assert_eq!(state.query.page, 3);
    }

    #[test]
    fn begin_fetch_clears_error_and_sets_loading() {
        let mut state = loaded_state(1, &[1]);
        let seq = state.begin_fetch();
        state.fetch_failed(seq, "transient".to_string());
        state.begin_fetch();
        assert!(state.loading);
        assert!(state.error.is_none());
    }
}
