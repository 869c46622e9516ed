use crate::models::{DaySnapshot, HabitHistory};

/// Percent of habits checked off, rounded to the nearest integer. A day with
/// no habits at all counts as 0.
pub fn day_progress(snapshot: &DaySnapshot) -> u8 {
    let total = snapshot.sections.values().map(Vec::len).sum::<usize>();
    if total == 0 {
        return 0;
    }
    let done = snapshot.sections.values().flatten().filter(|h| h.done).count();
    (100.0 * done as f64 / total as f64).round() as u8
}

/// History entries with `start <= date <= end`, ascending by date string.
/// Bounds are optional and compare lexicographically, which matches calendar
/// order for `YYYY-MM-DD` keys; free-text keys sort however they sort.
pub fn filter_history<'a>(
    history: &'a HabitHistory,
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<(&'a str, &'a DaySnapshot)> {
    history
        .days
        .iter()
        .filter(|(date, _)| {
            if let Some(start) = start {
                if date.as_str() < start {
                    return false;
                }
            }
            if let Some(end) = end {
                if date.as_str() > end {
                    return false;
                }
            }
            true
        })
        .map(|(date, snapshot)| (date.as_str(), snapshot))
        .collect()
}

/// Chart series over a filtered history: one label and one percent per day.
pub fn history_series(filtered: &[(&str, &DaySnapshot)]) -> (Vec<String>, Vec<u8>) {
    let labels = filtered.iter().map(|(date, _)| date.to_string()).collect();
    let values = filtered
        .iter()
        .map(|(_, snapshot)| day_progress(snapshot))
        .collect();
    (labels, values)
}
