use crate::errors::AppError;
use crate::keys::{RecordKey, STREAK_KEY, THEME_KEY};
use crate::models::{PlannerRecord, StreakState, Theme};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

/// The whole persisted state: string keys to text values. Planner records and
/// streak state are JSON text inside their entries; journal text and theme are
/// stored raw. A date never written has no entry and reads as the default
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreData {
    pub entries: BTreeMap<String, String>,
}

impl StoreData {
    pub fn planner(&self, date: NaiveDate) -> PlannerRecord {
        let key = RecordKey::planner(date).storage_key();
        self.parse_entry(&key)
    }

    pub fn set_planner(&mut self, date: NaiveDate, record: &PlannerRecord) -> Result<(), AppError> {
        let key = RecordKey::planner(date).storage_key();
        let text = serde_json::to_string(record).map_err(AppError::internal)?;
        self.entries.insert(key, text);
        Ok(())
    }

    pub fn journal(&self, date: NaiveDate) -> String {
        let key = RecordKey::journal(date).storage_key();
        self.entries.get(&key).cloned().unwrap_or_default()
    }

    pub fn set_journal(&mut self, date: NaiveDate, text: impl Into<String>) {
        let key = RecordKey::journal(date).storage_key();
        self.entries.insert(key, text.into());
    }

    pub fn streak(&self) -> StreakState {
        self.parse_entry(STREAK_KEY)
    }

    pub fn set_streak(&mut self, state: &StreakState) -> Result<(), AppError> {
        let text = serde_json::to_string(state).map_err(AppError::internal)?;
        self.entries.insert(STREAK_KEY.to_string(), text);
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        match self.entries.get(THEME_KEY) {
            Some(value) => Theme::parse(value).unwrap_or_else(|| {
                warn!("unrecognized stored theme {value:?}, using system");
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.entries.insert(THEME_KEY.to_string(), theme.as_str().to_string());
    }

    fn parse_entry<T: Default + for<'de> Deserialize<'de>>(&self, key: &str) -> T {
        match self.entries.get(key) {
            Some(text) => match serde_json::from_str(text) {
                Ok(value) => value,
                Err(err) => {
                    warn!("malformed entry {key}: {err}, using default");
                    T::default()
                }
            },
            None => T::default(),
        }
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("DAYPLAN_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/planner.json"))
}

pub async fn load_data(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoreData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &StoreData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChecklistItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unwritten_date_reads_as_default_repeatedly() {
        let store = StoreData::default();
        let day = date(2024, 3, 14);
        assert_eq!(store.planner(day), PlannerRecord::default());
        assert_eq!(store.planner(day), PlannerRecord::default());
        assert_eq!(store.journal(day), "");
        assert_eq!(store.streak(), StreakState::default());
        assert_eq!(store.theme(), Theme::System);
    }

    #[test]
    fn planner_record_round_trips() {
        let mut store = StoreData::default();
        let day = date(2024, 3, 14);
        let mut record = PlannerRecord::default();
        record.top3 = ["pay rent".into(), "call bank".into(), "gym".into()];
        record.top3_checked = [true, false, true];
        record.rating = 4;
        record.exercise = 2;
        record.water[0] = true;
        record.todos.push(ChecklistItem {
            text: "water plants".into(),
            done: true,
        });
        record.highlight = "sunny walk".into();

        store.set_planner(day, &record).unwrap();
        assert_eq!(store.planner(day), record);
    }

    #[test]
    fn planner_and_journal_for_same_date_are_independent() {
        let mut store = StoreData::default();
        let day = date(2024, 1, 1);
        store.set_journal(day, "quiet day");
        assert_eq!(store.planner(day), PlannerRecord::default());

        let mut record = PlannerRecord::default();
        record.highlight = "fireworks".into();
        store.set_planner(day, &record).unwrap();
        assert_eq!(store.journal(day), "quiet day");
    }

    #[test]
    fn journal_entries_do_not_interfere_across_dates() {
        let mut store = StoreData::default();
        store.set_journal(date(2024, 1, 1), "first");
        store.set_journal(date(2024, 1, 2), "second");
        assert_eq!(store.journal(date(2024, 1, 1)), "first");
        assert_eq!(store.journal(date(2024, 1, 2)), "second");
    }

    #[test]
    fn malformed_planner_entry_reads_as_default() {
        let mut store = StoreData::default();
        let day = date(2024, 3, 14);
        store
            .entries
            .insert(RecordKey::planner(day).storage_key(), "{not json".into());
        assert_eq!(store.planner(day), PlannerRecord::default());
    }

    #[test]
    fn unrecognized_theme_reads_as_system() {
        let mut store = StoreData::default();
        store.entries.insert(THEME_KEY.to_string(), "sepia".into());
        assert_eq!(store.theme(), Theme::System);

        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.entries.get(THEME_KEY).unwrap(), "dark");
    }

    #[test]
    fn entries_use_the_documented_key_layout() {
        let mut store = StoreData::default();
        let day = date(2024, 1, 2);
        store.set_journal(day, "note");
        store.set_planner(day, &PlannerRecord::default()).unwrap();
        store
            .set_streak(&StreakState {
                count: 1,
                last_date: Some("2024-01-02".into()),
            })
            .unwrap();
        store.set_theme(Theme::Light);

        let keys: Vec<&str> = store.entries.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "journal-2024-01-02",
                "planner-2024-01-02",
                "planner-streak",
                "planner-theme",
            ]
        );
    }
}
