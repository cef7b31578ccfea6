use chrono::NaiveDate;

pub const STREAK_KEY: &str = "planner-streak";
pub const THEME_KEY: &str = "planner-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Planner,
    Journal,
}

impl RecordKind {
    fn prefix(self) -> &'static str {
        match self {
            RecordKind::Planner => "planner",
            RecordKind::Journal => "journal",
        }
    }
}

/// Every per-date entry key is built here, so the key grammar lives in one
/// place instead of scattered format strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordKey {
    pub kind: RecordKind,
    pub date: NaiveDate,
}

impl RecordKey {
    pub fn planner(date: NaiveDate) -> Self {
        Self {
            kind: RecordKind::Planner,
            date,
        }
    }

    pub fn journal(date: NaiveDate) -> Self {
        Self {
            kind: RecordKind::Journal,
            date,
        }
    }

    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.kind.prefix(), date_key(self.date))
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Accepts only the canonical ten-character `YYYY-MM-DD` form: four-digit
/// year, zero-padded month and day. Chrono's signed extended years fail the
/// length check, which keeps every accepted date far from the range limits
/// where neighboring-day arithmetic overflows.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    (date_key(parsed) == value).then_some(parsed)
}
