use crate::models::{default_sections, DaySnapshot, HabitHistory};

/// Snapshot for `date`, falling back to the default template for dates the
/// history has never seen. Notes start empty on the template path.
pub fn snapshot_for(history: &HabitHistory, date: &str) -> DaySnapshot {
    history
        .days
        .get(date)
        .cloned()
        .unwrap_or_else(|| DaySnapshot {
            sections: default_sections(),
            notes: String::new(),
        })
}

/// Replace the stored snapshot for `date` wholesale. Durability is the
/// caller's follow-up call to `storage::persist_history`.
pub fn commit(history: &mut HabitHistory, date: impl Into<String>, snapshot: DaySnapshot) {
    history.days.insert(date.into(), snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HabitRecord;

    #[test]
    fn unknown_date_gets_default_template() {
        let history = HabitHistory::default();
        let snapshot = snapshot_for(&history, "2024-06-01");

        assert_eq!(snapshot.sections.len(), 4);
        assert_eq!(snapshot.sections.values().flatten().count(), 6);
        assert!(snapshot.sections.values().flatten().all(|h| !h.done));
        assert!(snapshot.notes.is_empty());
    }

    #[test]
    fn commit_replaces_wholesale() {
        let mut history = HabitHistory::default();
        commit(&mut history, "2024-06-01", snapshot_for(&history, "2024-06-01"));

        let mut replacement = DaySnapshot::default();
        replacement.sections.insert(
            "Вечер".to_string(),
            vec![HabitRecord {
                id: 1,
                title: "Прогулка".to_string(),
                done: true,
            }],
        );
        replacement.notes = "поздно лёг".to_string();
        commit(&mut history, "2024-06-01", replacement.clone());

        assert_eq!(history.days.len(), 1);
        assert_eq!(history.days["2024-06-01"], replacement);
    }

    #[test]
    fn stored_date_returns_stored_snapshot() {
        let mut history = HabitHistory::default();
        let mut snapshot = snapshot_for(&history, "2024-06-01");
        snapshot.notes = "x".to_string();
        commit(&mut history, "2024-06-01", snapshot.clone());

        assert_eq!(snapshot_for(&history, "2024-06-01"), snapshot);
    }
}
