use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Section name to its habit list. Iteration order is insertion order and is
/// what the page displays.
pub type Sections = IndexMap<String, Vec<HabitRecord>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DaySnapshot {
    pub sections: Sections,
    pub notes: String,
}

/// Everything ever tracked, keyed by the free-text date string. Serialized as
/// a bare JSON object, `{"2024-06-01": {"sections": {...}, "notes": ""}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HabitHistory {
    pub days: BTreeMap<String, DaySnapshot>,
}

/// Starter sections for any date that has no stored snapshot yet.
pub fn default_sections() -> Sections {
    let mut sections = Sections::new();
    sections.insert(
        "Утренний блок".to_string(),
        vec![
            habit(1, "Вода + 10 отжиманий"),
            habit(2, "Медитация 10 мин"),
            habit(3, "Английский 10 мин"),
        ],
    );
    sections.insert(
        "Развитие бизнеса".to_string(),
        vec![habit(4, "1 час на развитие бизнеса")],
    );
    sections.insert("Тренировка".to_string(), vec![habit(5, "Тренировка")]);
    sections.insert(
        "Без сериалов/фильмов".to_string(),
        vec![habit(6, "Без сериалов/фильмов")],
    );
    sections
}

fn habit(id: u64, title: &str) -> HabitRecord {
    HabitRecord {
        id,
        title: title.to_string(),
        done: false,
    }
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
    pub section: String,
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub date: String,
    pub section: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteHabitRequest {
    pub date: String,
    pub section: String,
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct RenameHabitRequest {
    pub date: String,
    pub section: String,
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSectionRequest {
    pub date: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameSectionRequest {
    pub date: String,
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteSectionRequest {
    pub date: String,
    pub section: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub sections: Sections,
    pub notes: String,
    pub progress: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
}
