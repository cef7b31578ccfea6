use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MoneyEntry {
    pub sign: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Menu {
    pub breakfast: String,
    pub lunch: String,
    pub snacks: String,
    pub dinner: String,
}

/// One day of planner data. Field names are the persisted layout; records
/// saved by earlier versions may omit fields, so every one falls back to its
/// default on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerRecord {
    pub top3: [String; 3],
    pub top3_checked: [bool; 3],
    pub rating: u8,
    pub time_tracker: [String; 14],
    pub todos: Vec<ChecklistItem>,
    pub calls: Vec<ChecklistItem>,
    pub menu: Menu,
    pub water: [bool; 8],
    pub exercise: u8,
    pub money: Vec<MoneyEntry>,
    pub highlight: String,
}

/// Consecutive-day counter over completed top-3 sections. Global, one
/// instance per store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakState {
    pub count: u32,
    pub last_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub top3: bool,
    pub water: bool,
    pub exercise: bool,
    pub todos: bool,
    pub calls: bool,
    pub percent: u8,
}

#[derive(Debug, Serialize)]
pub struct PlannerDayResponse {
    pub date: String,
    pub record: PlannerRecord,
    pub progress: Progress,
    pub streak: StreakState,
}

#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_record_uses_persisted_field_names() {
        let mut record = PlannerRecord::default();
        record.top3[0] = "write report".into();
        record.top3_checked[0] = true;
        record.time_tracker[2] = "standup".into();
        record.menu.breakfast = "toast".into();
        record.money.push(MoneyEntry {
            sign: "-".into(),
            amount: "12".into(),
            category: "Expense".into(),
        });

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        for field in [
            "top3",
            "top3Checked",
            "rating",
            "timeTracker",
            "todos",
            "calls",
            "menu",
            "water",
            "exercise",
            "money",
            "highlight",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(value["menu"]["Breakfast"], "toast");
        assert_eq!(value["money"][0]["type"], "Expense");
    }

    #[test]
    fn planner_record_fills_missing_fields_with_defaults() {
        let record: PlannerRecord =
            serde_json::from_str(r#"{"top3":["a","b","c"]}"#).unwrap();
        assert_eq!(record.top3[0], "a");
        assert_eq!(record.top3_checked, [false; 3]);
        assert_eq!(record.rating, 0);
        assert!(record.todos.is_empty());
        assert_eq!(record.water, [false; 8]);
    }

    #[test]
    fn streak_state_round_trips_last_date_field() {
        let state = StreakState {
            count: 4,
            last_date: Some("2024-01-02".into()),
        };
        let text = serde_json::to_string(&state).unwrap();
        assert!(text.contains("\"lastDate\":\"2024-01-02\""));
        let back: StreakState = serde_json::from_str(&text).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn theme_parse_accepts_known_values_only() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse("Dark"), None);
    }
}
