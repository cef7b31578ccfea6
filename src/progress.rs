use crate::models::{PlannerRecord, Progress};

pub fn day_progress(record: &PlannerRecord) -> Progress {
    let top3 = record.top3_checked.iter().all(|&checked| checked);
    let water = record.water.iter().all(|&filled| filled);
    let exercise = record.exercise > 0;
    let todos = record.todos.iter().any(|item| item.done);
    let calls = record.calls.iter().any(|item| item.done);

    let completed = [top3, water, exercise, todos, calls]
        .into_iter()
        .filter(|&done| done)
        .count();

    Progress {
        top3,
        water,
        exercise,
        todos,
        calls,
        percent: (completed * 20) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChecklistItem;

    #[test]
    fn default_record_scores_zero() {
        let progress = day_progress(&PlannerRecord::default());
        assert!(!progress.top3);
        assert!(!progress.water);
        assert!(!progress.exercise);
        assert!(!progress.todos);
        assert!(!progress.calls);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn each_section_is_worth_twenty_percent() {
        let mut record = PlannerRecord::default();
        record.exercise = 1;
        assert_eq!(day_progress(&record).percent, 20);

        record.water = [true; 8];
        assert_eq!(day_progress(&record).percent, 40);

        record.top3_checked = [true; 3];
        assert_eq!(day_progress(&record).percent, 60);

        record.todos.push(ChecklistItem {
            text: "laundry".into(),
            done: true,
        });
        assert_eq!(day_progress(&record).percent, 80);

        record.calls.push(ChecklistItem {
            text: "dentist".into(),
            done: true,
        });
        assert_eq!(day_progress(&record).percent, 100);
    }

    #[test]
    fn top3_counts_checkmarks_not_text() {
        let mut record = PlannerRecord::default();
        record.top3 = ["a".into(), "b".into(), "c".into()];
        assert!(!day_progress(&record).top3);

        record.top3 = Default::default();
        record.top3_checked = [true; 3];
        assert!(day_progress(&record).top3);
    }

    #[test]
    fn partial_water_or_undone_items_do_not_count() {
        let mut record = PlannerRecord::default();
        record.water[0] = true;
        record.water[7] = true;
        record.todos.push(ChecklistItem {
            text: "pending".into(),
            done: false,
        });
        let progress = day_progress(&record);
        assert!(!progress.water);
        assert!(!progress.todos);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn percent_is_always_a_multiple_of_twenty() {
        let mut record = PlannerRecord::default();
        for step in 0..6 {
            if step > 0 {
                match step {
                    1 => record.exercise = 3,
                    2 => record.water = [true; 8],
                    3 => record.top3_checked = [true; 3],
                    4 => record.todos.push(ChecklistItem {
                        text: String::new(),
                        done: true,
                    }),
                    _ => record.calls.push(ChecklistItem {
                        text: String::new(),
                        done: true,
                    }),
                }
            }
            let percent = day_progress(&record).percent;
            assert_eq!(percent % 20, 0);
            assert!(percent <= 100);
        }
    }
}
