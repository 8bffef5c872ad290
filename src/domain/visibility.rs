use crate::domain::entities::remote_row::RemoteRow;

/// Cell text that hides a card. Compared case-sensitively.
pub const HIDDEN_FLAG: &str = "FALSE";

/// Decides whether the card named `container_id` should render for `row`.
///
/// Looks up the exact column first, then the legacy spelling with the first
/// `"_2"` collapsed to `"2"` (`InfoCard_home-adjustments_2` ->
/// `InfoCard_home-adjustments2`). An absent row hides everything.
pub fn resolve_visibility(container_id: &str, row: Option<&RemoteRow>) -> bool {
    let Some(row) = row else {
        return false;
    };

    if let Some(value) = row.value_for(container_id) {
        return is_shown(value);
    }

    legacy_column_id(container_id)
        .and_then(|alternative| row.value_for(&alternative))
        .is_some_and(is_shown)
}

/// Older sheet columns dropped the underscore before a trailing `2`.
pub fn legacy_column_id(container_id: &str) -> Option<String> {
    container_id
        .contains("_2")
        .then(|| container_id.replacen("_2", "2", 1))
}

fn is_shown(value: &str) -> bool {
    value != HIDDEN_FLAG && !value.trim().is_empty()
}
