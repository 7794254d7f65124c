use crate::types::AlertLevel;

/// Villages flagged as affected at `level`: a fixed-length prefix of the
/// store order (none, first 3, first 6, or all). Shorter lists are returned
/// whole.
pub fn affected_villages<T>(level: AlertLevel, villages: &[T]) -> &[T] {
    match level.village_cutoff() {
        Some(n) => &villages[..n.min(villages.len())],
        None => villages,
    }
}
