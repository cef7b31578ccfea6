use crate::keys::date_key;
use crate::models::StreakState;
use chrono::{Duration, NaiveDate};

/// One observation step: the streak only ever moves when the observed day has
/// all three top tasks checked. "The day before" is relative to the observed
/// date, not wall-clock today.
pub fn observe(state: &StreakState, date: NaiveDate, top3_complete: bool) -> StreakState {
    if !top3_complete {
        return state.clone();
    }

    let selected = date_key(date);
    if state.last_date.as_deref() == Some(selected.as_str()) {
        return state.clone();
    }

    let day_before = date_key(date - Duration::days(1));
    if state.last_date.as_deref() == Some(day_before.as_str()) {
        StreakState {
            count: state.count.saturating_add(1),
            last_date: Some(selected),
        }
    } else {
        StreakState {
            count: 1,
            last_date: Some(selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn incomplete_day_never_moves_the_streak() {
        let state = StreakState {
            count: 5,
            last_date: Some("2024-01-10".into()),
        };
        assert_eq!(observe(&state, date(2024, 1, 11), false), state);
        assert_eq!(observe(&state, date(2024, 1, 10), false), state);
        assert_eq!(observe(&StreakState::default(), date(2024, 1, 1), false), StreakState::default());
    }

    #[test]
    fn first_completion_starts_at_one() {
        let next = observe(&StreakState::default(), date(2024, 1, 5), true);
        assert_eq!(next.count, 1);
        assert_eq!(next.last_date.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn consecutive_days_increment() {
        let day_one = observe(&StreakState::default(), date(2024, 1, 5), true);
        let day_two = observe(&day_one, date(2024, 1, 6), true);
        assert_eq!(day_two.count, 2);
        assert_eq!(day_two.last_date.as_deref(), Some("2024-01-06"));
    }

    #[test]
    fn skipping_a_day_resets_to_one() {
        let day_one = observe(&StreakState::default(), date(2024, 1, 5), true);
        let day_two = observe(&day_one, date(2024, 1, 6), true);
        let after_gap = observe(&day_two, date(2024, 1, 8), true);
        assert_eq!(after_gap.count, 1);
        assert_eq!(after_gap.last_date.as_deref(), Some("2024-01-08"));
    }

    #[test]
    fn reobserving_a_completed_day_is_idempotent() {
        let day_one = observe(&StreakState::default(), date(2024, 1, 5), true);
        let again = observe(&day_one, date(2024, 1, 5), true);
        assert_eq!(again, day_one);
    }

    #[test]
    fn increments_across_month_boundary() {
        let state = StreakState {
            count: 3,
            last_date: Some("2024-01-31".into()),
        };
        let next = observe(&state, date(2024, 2, 1), true);
        assert_eq!(next.count, 4);
        assert_eq!(next.last_date.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn completing_a_past_day_extends_the_streak_that_ended_before_it() {
        let state = StreakState {
            count: 2,
            last_date: Some("2024-01-04".into()),
        };
        let next = observe(&state, date(2024, 1, 5), true);
        assert_eq!(next.count, 3);
    }

    #[test]
    fn completing_the_earliest_key_date_starts_a_streak() {
        let next = observe(&StreakState::default(), date(0, 1, 1), true);
        assert_eq!(next.count, 1);
        assert_eq!(next.last_date.as_deref(), Some("0000-01-01"));
    }
}
