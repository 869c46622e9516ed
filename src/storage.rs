use crate::errors::StorageError;
use crate::models::HabitHistory;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/state.json"))
}

/// Reads the whole history from disk. A missing file is an empty history; a
/// present but unreadable or unparsable file is surfaced as a typed error.
pub async fn load_history(path: &Path) -> Result<HabitHistory, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HabitHistory::default());
        }
        Err(err) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|err| StorageError::CorruptHistory {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Startup variant: log the failure and come up with an empty history instead
/// of refusing to start.
pub async fn load_or_default(path: &Path) -> HabitHistory {
    match load_history(path).await {
        Ok(history) => history,
        Err(err) => {
            error!("{err}; starting with an empty history");
            HabitHistory::default()
        }
    }
}

/// Rewrites the whole serialized history. Best effort: no temp file or
/// rename, a crash mid-write can lose the latest commit.
pub async fn persist_history(path: &Path, history: &HabitHistory) -> Result<(), StorageError> {
    let payload =
        serde_json::to_vec_pretty(history).map_err(|err| StorageError::Encode { source: err })?;
    fs::write(path, payload)
        .await
        .map_err(|err| StorageError::Persist {
            path: path.to_path_buf(),
            source: err,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day;
    use crate::history::{commit, snapshot_for};

    fn unique_temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "habit_tracker_{tag}_{}_{}.json",
            std::process::id(),
            nanos
        ));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_history() {
        let path = unique_temp_path("missing");
        let history = load_history(&path).await.unwrap();
        assert!(history.days.is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let path = unique_temp_path("roundtrip");

        let mut history = HabitHistory::default();
        let snapshot = snapshot_for(&history, "2024-06-01");
        let snapshot = day::toggle(snapshot, "Тренировка", 5);
        let snapshot = day::add_habit(snapshot, "Утренний блок", "Чтение");
        let snapshot = day::set_notes(snapshot, "x");
        commit(&mut history, "2024-06-01", snapshot);

        persist_history(&path, &history).await.unwrap();
        let reloaded = load_history(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(reloaded, history);
        // section order survives the round trip
        let reloaded_names: Vec<&String> = reloaded.days["2024-06-01"].sections.keys().collect();
        let expected_names: Vec<&String> = history.days["2024-06-01"].sections.keys().collect();
        assert_eq!(reloaded_names, expected_names);
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_typed_error() {
        let path = unique_temp_path("corrupt");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = load_history(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::CorruptHistory { .. }));

        let fallback = load_or_default(&path).await;
        tokio::fs::remove_file(&path).await.unwrap();
        assert!(fallback.days.is_empty());
    }
}
