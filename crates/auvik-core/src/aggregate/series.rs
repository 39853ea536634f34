// Column statistics over raw sample series.
//
// A series is the `data` array of a statistics entity: one row per sample,
// column 0 the timestamp, metric columns after it.

/// Mean of one column across all rows. `None` for an empty series --
/// "no data" and "zero" mean different things to every caller.
#[must_use]
pub fn column_mean(rows: &[Vec<f64>], column: usize) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows
        .iter()
        .map(|row| row.get(column).copied().unwrap_or(0.0))
        .sum();
    Some(sum / rows.len() as f64)
}

/// Mean of one column with glitch suppression: values at or above `cap`
/// are dropped from the sum, but the divisor stays the full row count.
#[must_use]
pub fn capped_column_mean(rows: &[Vec<f64>], column: usize, cap: f64) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows
        .iter()
        .map(|row| row.get(column).copied().unwrap_or(0.0))
        .filter(|value| *value < cap)
        .sum();
    Some(sum / rows.len() as f64)
}
