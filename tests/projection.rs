use taskorder::dag::schedule;
use taskorder::errors::TaskOrderError;
use taskorder::report::{project, ProjectionOptions};
use taskorder_test_utils::builders::{date, TaskBuilder};

fn opts(start: &str, hours_per_day: f64) -> ProjectionOptions {
    ProjectionOptions::new(date(start), hours_per_day).unwrap()
}

#[test]
fn days_roll_over_at_the_daily_budget() {
    let tasks = vec![
        TaskBuilder::new("A").hours(8.0).due("2024-01-01").build(),
        TaskBuilder::new("B").hours(4.0).due("2024-01-01").after("A").build(),
        TaskBuilder::new("C").hours(6.0).due("2024-01-03").after("B").build(),
    ];
    let order = schedule(&tasks).unwrap();

    let projection = project(&order, &tasks, opts("2024-01-01", 8.0));
    let rows = &projection.tasks;

    // A fills day one exactly and is on time.
    assert_eq!(rows[0].title, "A");
    assert_eq!(rows[0].start_hour, 0.0);
    assert_eq!(rows[0].finish_hour, 8.0);
    assert_eq!(rows[0].finish_date, date("2024-01-01"));
    assert_eq!(rows[0].days_late, 0);

    // B spills into day two, one day past due.
    assert_eq!(rows[1].finish_date, date("2024-01-02"));
    assert_eq!(rows[1].days_late, 1);
    assert!(rows[1].is_late());

    // C ends at hour 18, on the third day.
    assert_eq!(rows[2].start_hour, 12.0);
    assert_eq!(rows[2].finish_date, date("2024-01-03"));
    assert!(!rows[2].is_late());

    let kpi = &projection.kpi;
    assert_eq!(kpi.makespan_hours, 18.0);
    assert_eq!(kpi.late_count, 1);
    assert_eq!(kpi.total_days_late, 1);
    assert_eq!(kpi.max_days_late, 1);
    assert!((kpi.on_time_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn smaller_daily_budget_pushes_finish_dates_out() {
    let tasks = vec![TaskBuilder::new("long").hours(10.0).due("2024-06-03").build()];
    let order = vec!["long".to_string()];

    let projection = project(&order, &tasks, opts("2024-06-01", 2.5));
    assert_eq!(projection.tasks[0].finish_date, date("2024-06-04"));
    assert_eq!(projection.tasks[0].days_late, 1);
}

#[test]
fn empty_order_is_fully_on_time() {
    let projection = project(&[], &[], opts("2024-01-01", 8.0));
    assert!(projection.tasks.is_empty());
    assert_eq!(projection.kpi.makespan_hours, 0.0);
    assert_eq!(projection.kpi.on_time_rate, 1.0);
    assert_eq!(projection.kpi.max_days_late, 0);
}

#[test]
fn unknown_titles_in_order_are_skipped() {
    let tasks = vec![TaskBuilder::new("real").hours(2.0).due("2024-01-05").build()];
    let order = vec!["ghost".to_string(), "real".to_string()];

    let projection = project(&order, &tasks, opts("2024-01-01", 8.0));
    assert_eq!(projection.tasks.len(), 1);
    assert_eq!(projection.tasks[0].title, "real");
    assert_eq!(projection.tasks[0].start_hour, 0.0);
}

#[test]
fn invalid_daily_budget_is_rejected() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            ProjectionOptions::new(date("2024-01-01"), bad),
            Err(TaskOrderError::ConfigError(_))
        ));
    }
}

#[test]
fn summed_estimates_that_fill_a_day_stay_on_that_day() {
    for (hours, hours_per_day) in [
        ([0.2, 4.9, 0.9], 6.0),
        ([0.2, 5.9, 0.9], 7.0),
        ([0.2, 6.4, 0.9], 7.5),
    ] {
        let tasks = vec![
            TaskBuilder::new("a").hours(hours[0]).due("2024-01-01").build(),
            TaskBuilder::new("b").hours(hours[1]).due("2024-01-01").build(),
            TaskBuilder::new("c").hours(hours[2]).due("2024-01-01").build(),
        ];
        let order = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let projection = project(&order, &tasks, opts("2024-01-01", hours_per_day));
        let last = &projection.tasks[2];
        assert_eq!(last.finish_date, date("2024-01-01"), "budget {hours_per_day}");
        assert_eq!(last.days_late, 0, "budget {hours_per_day}");
        assert_eq!(projection.kpi.late_count, 0);
    }
}
