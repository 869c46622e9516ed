//! Edits to a single day's snapshot. Every operation takes the snapshot by
//! value and hands back the edited one; the caller commits the result to the
//! history. Invalid targets (unknown section, unknown id, blank names) leave
//! the snapshot untouched.

use crate::models::{DaySnapshot, HabitRecord};

pub fn toggle(mut snapshot: DaySnapshot, section: &str, id: u64) -> DaySnapshot {
    if let Some(habits) = snapshot.sections.get_mut(section) {
        if let Some(habit) = habits.iter_mut().find(|h| h.id == id) {
            habit.done = !habit.done;
        }
    }
    snapshot
}

/// Next habit id: one past the largest id anywhere in this snapshot. Ids are
/// only ever compared within one day, so different dates may reuse them.
pub fn next_habit_id(snapshot: &DaySnapshot) -> u64 {
    snapshot
        .sections
        .values()
        .flatten()
        .map(|h| h.id)
        .max()
        .unwrap_or(0)
        + 1
}

pub fn add_habit(mut snapshot: DaySnapshot, section: &str, title: &str) -> DaySnapshot {
    let title = title.trim();
    if title.is_empty() {
        return snapshot;
    }
    let id = next_habit_id(&snapshot);
    if let Some(habits) = snapshot.sections.get_mut(section) {
        habits.push(HabitRecord {
            id,
            title: title.to_string(),
            done: false,
        });
    }
    snapshot
}

pub fn delete_habit(mut snapshot: DaySnapshot, section: &str, id: u64) -> DaySnapshot {
    if let Some(habits) = snapshot.sections.get_mut(section) {
        habits.retain(|h| h.id != id);
    }
    snapshot
}

/// Inline title edit. The title is taken verbatim, blanks included.
pub fn rename_habit(mut snapshot: DaySnapshot, section: &str, id: u64, title: &str) -> DaySnapshot {
    if let Some(habits) = snapshot.sections.get_mut(section) {
        if let Some(habit) = habits.iter_mut().find(|h| h.id == id) {
            habit.title = title.to_string();
        }
    }
    snapshot
}

/// Moves the habit list under the new name; a freshly introduced name lands at
/// the end of the section order. Renaming onto an existing section replaces
/// that section's habits.
pub fn rename_section(mut snapshot: DaySnapshot, old_name: &str, new_name: &str) -> DaySnapshot {
    if new_name.trim().is_empty() || new_name == old_name {
        return snapshot;
    }
    if let Some(habits) = snapshot.sections.shift_remove(old_name) {
        snapshot.sections.insert(new_name.to_string(), habits);
    }
    snapshot
}

pub fn delete_section(mut snapshot: DaySnapshot, section: &str) -> DaySnapshot {
    snapshot.sections.shift_remove(section);
    snapshot
}

/// An existing name is reset to an empty section, same as the rename
/// collision.
pub fn add_section(mut snapshot: DaySnapshot, name: &str) -> DaySnapshot {
    if name.trim().is_empty() {
        return snapshot;
    }
    snapshot.sections.insert(name.to_string(), Vec::new());
    snapshot
}

pub fn set_notes(mut snapshot: DaySnapshot, notes: &str) -> DaySnapshot {
    snapshot.notes = notes.to_string();
    snapshot
}

/// Unchecks every habit and clears the notes; sections, titles and order stay
/// as they are.
pub fn reset_day(mut snapshot: DaySnapshot) -> DaySnapshot {
    for habits in snapshot.sections.values_mut() {
        for habit in habits {
            habit.done = false;
        }
    }
    snapshot.notes.clear();
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_sections;

    fn template() -> DaySnapshot {
        DaySnapshot {
            sections: default_sections(),
            notes: String::new(),
        }
    }

    #[test]
    fn toggle_twice_restores_snapshot() {
        let snapshot = template();
        let once = toggle(snapshot.clone(), "Утренний блок", 2);
        assert!(once.sections["Утренний блок"][1].done);

        let twice = toggle(once, "Утренний блок", 2);
        assert_eq!(twice, snapshot);
    }

    #[test]
    fn toggle_unknown_target_is_noop() {
        let snapshot = template();
        assert_eq!(toggle(snapshot.clone(), "Утренний блок", 99), snapshot);
        assert_eq!(toggle(snapshot.clone(), "нет такого", 1), snapshot);
    }

    #[test]
    fn add_habit_allocates_past_every_existing_id() {
        let snapshot = add_habit(template(), "Тренировка", "Растяжка");
        let added = snapshot.sections["Тренировка"].last().unwrap();
        assert_eq!(added.id, 7);
        assert_eq!(added.title, "Растяжка");
        assert!(!added.done);

        let snapshot = add_habit(snapshot, "Утренний блок", "Чтение");
        assert_eq!(snapshot.sections["Утренний блок"].last().unwrap().id, 8);
    }

    #[test]
    fn add_habit_trims_title() {
        let snapshot = add_habit(template(), "Тренировка", "  Растяжка  ");
        assert_eq!(
            snapshot.sections["Тренировка"].last().unwrap().title,
            "Растяжка"
        );
    }

    #[test]
    fn add_habit_blank_title_is_noop() {
        let snapshot = template();
        assert_eq!(add_habit(snapshot.clone(), "Тренировка", ""), snapshot);
        assert_eq!(add_habit(snapshot.clone(), "Тренировка", "   "), snapshot);
    }

    #[test]
    fn add_habit_unknown_section_is_noop() {
        let snapshot = template();
        assert_eq!(add_habit(snapshot.clone(), "нет такого", "Чтение"), snapshot);
    }

    #[test]
    fn delete_habit_removes_only_the_target() {
        let snapshot = delete_habit(template(), "Утренний блок", 2);
        let ids: Vec<u64> = snapshot.sections["Утренний блок"].iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(delete_habit(snapshot.clone(), "Утренний блок", 99), snapshot);
    }

    #[test]
    fn rename_habit_sets_title_verbatim() {
        let snapshot = rename_habit(template(), "Тренировка", 5, "Зал");
        assert_eq!(snapshot.sections["Тренировка"][0].title, "Зал");

        // no blank guard on inline edits
        let snapshot = rename_habit(snapshot, "Тренировка", 5, "");
        assert_eq!(snapshot.sections["Тренировка"][0].title, "");
    }

    #[test]
    fn rename_section_moves_list_to_new_key() {
        let snapshot = rename_section(template(), "Тренировка", "Спорт");
        assert!(!snapshot.sections.contains_key("Тренировка"));
        assert_eq!(snapshot.sections["Спорт"][0].id, 5);
        // a new name joins at the end of the order
        assert_eq!(snapshot.sections.keys().last().unwrap(), "Спорт");
    }

    #[test]
    fn rename_section_blank_or_self_is_noop() {
        let snapshot = template();
        assert_eq!(rename_section(snapshot.clone(), "Тренировка", "  "), snapshot);
        assert_eq!(
            rename_section(snapshot.clone(), "Тренировка", "Тренировка"),
            snapshot
        );
        assert_eq!(rename_section(snapshot.clone(), "нет такого", "Спорт"), snapshot);
    }

    #[test]
    fn rename_section_collision_overwrites_target() {
        let snapshot = rename_section(template(), "Тренировка", "Без сериалов/фильмов");

        assert_eq!(snapshot.sections.len(), 3);
        let survivor = &snapshot.sections["Без сериалов/фильмов"];
        assert_eq!(survivor.len(), 1);
        assert_eq!(survivor[0].id, 5);
        assert_eq!(survivor[0].title, "Тренировка");
    }

    #[test]
    fn add_section_creates_empty_section() {
        let snapshot = add_section(template(), "Вечерний блок");
        assert_eq!(snapshot.sections.len(), 5);
        assert!(snapshot.sections["Вечерний блок"].is_empty());
        assert_eq!(snapshot.sections.keys().last().unwrap(), "Вечерний блок");
    }

    #[test]
    fn add_section_blank_is_noop_and_collision_resets() {
        let snapshot = template();
        assert_eq!(add_section(snapshot.clone(), "   "), snapshot);

        let snapshot = add_section(snapshot, "Тренировка");
        assert!(snapshot.sections["Тренировка"].is_empty());
    }

    #[test]
    fn delete_section_drops_habits_with_it() {
        let snapshot = delete_section(template(), "Утренний блок");
        assert_eq!(snapshot.sections.len(), 3);
        assert_eq!(snapshot.sections.values().flatten().count(), 3);

        assert_eq!(delete_section(snapshot.clone(), "нет такого"), snapshot);
    }

    #[test]
    fn reset_day_clears_done_and_notes_only() {
        let snapshot = toggle(template(), "Утренний блок", 1);
        let snapshot = toggle(snapshot, "Тренировка", 5);
        let snapshot = set_notes(snapshot, "устал");

        let reset = reset_day(snapshot);
        assert!(reset.sections.values().flatten().all(|h| !h.done));
        assert!(reset.notes.is_empty());
        assert_eq!(reset, template());
    }

    #[test]
    fn reset_day_keeps_added_structure() {
        let snapshot = add_section(template(), "Вечерний блок");
        let snapshot = add_habit(snapshot, "Вечерний блок", "Прогулка");
        let snapshot = toggle(snapshot, "Вечерний блок", 7);

        let reset = reset_day(snapshot);
        assert_eq!(reset.sections.len(), 5);
        assert_eq!(reset.sections["Вечерний блок"][0].title, "Прогулка");
        assert!(!reset.sections["Вечерний блок"][0].done);
    }
}
