use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::entities::remote_row::RemoteRow;
use crate::domain::visibility::resolve_visibility;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No user key in the URL; nothing is fetched.
    #[default]
    Idle,
    Loading,
    Ready(Option<RemoteRow>),
}

/// Identifies one outstanding fetch. Only the newest ticket may land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub user_key: String,
}

/// Everything a topic page remembers for as long as it is mounted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    load: LoadState,
    expanded: BTreeSet<String>,
    generation: u64,
    /// Trimmed key of the latest `begin_load`; empty when idle.
    user_key: String,
}

impl PageState {
    pub fn row(&self) -> Option<&RemoteRow> {
        match &self.load {
            LoadState::Ready(row) => row.as_ref(),
            LoadState::Idle | LoadState::Loading => None,
        }
    }

    /// True while the cards for `user_key` are not known yet: a fetch is in
    /// flight, or the page rendered before its effect asked for this key.
    pub fn is_pending(&self, user_key: &str) -> bool {
        self.load == LoadState::Loading || user_key.trim() != self.user_key
    }

    /// Starts a fetch for `user_key`, invalidating any fetch still in flight.
    /// A blank key means "do not fetch" and yields no ticket.
    pub fn begin_load(&mut self, user_key: &str) -> Option<LoadTicket> {
        self.generation += 1;
        let user_key = user_key.trim();
        self.user_key = user_key.to_string();
        if user_key.is_empty() {
            self.load = LoadState::Idle;
            return None;
        }
        self.load = LoadState::Loading;
        Some(LoadTicket {
            generation: self.generation,
            user_key: user_key.to_string(),
        })
    }

    /// Applies a finished fetch. Returns `false` if a newer load superseded it.
    pub fn finish_load(&mut self, ticket: LoadTicket, row: Option<RemoteRow>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                user_key = %ticket.user_key,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale sheet response"
            );
            return false;
        }
        self.load = LoadState::Ready(row);
        true
    }

    pub fn is_visible(&self, container_id: &str) -> bool {
        resolve_visibility(container_id, self.row())
    }

    pub fn toggle_expanded(&mut self, container_id: &str) {
        if !self.expanded.remove(container_id) {
            self.expanded.insert(container_id.to_string());
        }
    }

    pub fn is_expanded(&self, container_id: &str) -> bool {
        self.expanded.contains(container_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with(id: &str, value: &str) -> RemoteRow {
        RemoteRow::new(
            vec!["id".to_string(), id.to_string()],
            vec!["u1".to_string(), value.to_string()],
        )
    }

    #[test]
    fn blank_key_is_idle_and_hides_cards() {
        let mut state = PageState::default();

        assert!(state.begin_load("  ").is_none());
        assert_eq!(&state.load, &LoadState::Idle);
        assert!(!state.is_visible("InfoCard_rights_1"));
    }

    #[test]
    fn loading_hides_cards_until_result_lands() {
        let mut state = PageState::default();
        let ticket = state.begin_load("u1").expect("ticket for non-empty key");
        assert_eq!(&state.load, &LoadState::Loading);
        assert!(!state.is_visible("InfoCard_rights_1"));

        assert!(state.finish_load(ticket, Some(row_with("InfoCard_rights_1", "TRUE"))));
        assert!(state.is_visible("InfoCard_rights_1"));
    }

    #[test]
    fn first_render_with_a_key_counts_as_pending() {
        let mut state = PageState::default();
        assert!(state.is_pending("u1"));
        assert!(!state.is_pending("  "));

        let ticket = state.begin_load("u1").expect("ticket");
        assert!(state.is_pending("u1"));

        state.finish_load(ticket, None);
        assert!(!state.is_pending(" u1 "));
        assert!(state.is_pending("u2"));
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = PageState::default();
        let first = state.begin_load("u1").expect("first ticket");
        let second = state.begin_load("u2").expect("second ticket");

        assert!(state.finish_load(second, Some(row_with("InfoCard_rights_1", "FALSE"))));
        assert!(!state.finish_load(first, Some(row_with("InfoCard_rights_1", "TRUE"))));
        assert!(!state.is_visible("InfoCard_rights_1"));
    }

    #[test]
    fn clearing_the_key_invalidates_in_flight_fetch() {
        let mut state = PageState::default();
        let ticket = state.begin_load("u1").expect("ticket");
        state.begin_load("");

        assert!(!state.finish_load(ticket, Some(row_with("InfoCard_rights_1", "TRUE"))));
        assert_eq!(&state.load, &LoadState::Idle);
    }

    #[test]
    fn missing_row_resolves_to_ready_without_data() {
        let mut state = PageState::default();
        let ticket = state.begin_load("u3").expect("ticket");

        state.finish_load(ticket, None);

        assert_eq!(&state.load, &LoadState::Ready(None));
        assert!(!state.is_visible("InfoCard_health_44"));
    }

    #[test]
    fn cards_toggle_independently_and_start_collapsed() {
        let mut state = PageState::default();
        assert!(!state.is_expanded("InfoCard_rights_1"));

        state.toggle_expanded("InfoCard_rights_1");
        assert!(state.is_expanded("InfoCard_rights_1"));
        assert!(!state.is_expanded("InfoCard_rights_2"));

        state.toggle_expanded("InfoCard_rights_1");
        assert!(!state.is_expanded("InfoCard_rights_1"));
    }
}
