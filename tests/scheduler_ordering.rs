use taskorder::dag::{check, schedule, TaskGraph};
use taskorder::model::Task;
use taskorder_test_utils::builders::TaskBuilder;
use taskorder_test_utils::{init_tracing, titles};

fn task(title: &str) -> TaskBuilder {
    TaskBuilder::new(title)
}

#[test]
fn dependency_constraints_dominate_due_date() {
    init_tracing();
    let tasks = vec![
        task("A").hours(2.0).due("2024-01-10").build(),
        task("B").hours(3.0).due("2024-01-05").after("A").build(),
    ];

    let order = schedule(&tasks).unwrap();
    assert_eq!(titles(&order), vec!["A", "B"]);
}

#[test]
fn earlier_due_date_goes_first() {
    let tasks = vec![
        task("X").due("2024-02-01").build(),
        task("Y").due("2024-01-15").build(),
    ];

    assert_eq!(titles(&schedule(&tasks).unwrap()), vec!["Y", "X"]);
}

#[test]
fn equal_due_dates_prefer_shorter_estimate() {
    let tasks = vec![
        task("P").hours(5.0).due("2024-03-01").build(),
        task("Q").hours(2.0).due("2024-03-01").build(),
    ];

    assert_eq!(titles(&schedule(&tasks).unwrap()), vec!["Q", "P"]);
}

#[test]
fn full_ties_fall_back_to_title_order() {
    let tasks = vec![
        task("beta").hours(1.5).due("2024-03-01").build(),
        task("alpha").hours(1.5).due("2024-03-01").build(),
        task("Gamma").hours(1.5).due("2024-03-01").build(),
    ];

    // Byte-wise comparison: uppercase sorts before lowercase.
    assert_eq!(
        titles(&schedule(&tasks).unwrap()),
        vec!["Gamma", "alpha", "beta"]
    );
}

#[test]
fn only_ready_tasks_compete_on_priority() {
    // B is the most urgent task but cannot start before A, and C is more
    // urgent than A. Priority is only applied among tasks that are ready.
    let tasks = vec![
        task("A").due("2024-03-01").build(),
        task("B").due("2024-01-01").after("A").build(),
        task("C").due("2024-02-01").build(),
    ];

    assert_eq!(titles(&schedule(&tasks).unwrap()), vec!["C", "A", "B"]);
}

#[test]
fn diamond_orders_siblings_by_priority() {
    let tasks = vec![
        task("D").due("2024-01-02").after("B").after("C").build(),
        task("B").hours(4.0).due("2024-01-05").after("A").build(),
        task("C").hours(2.0).due("2024-01-05").after("A").build(),
        task("A").due("2024-01-01").build(),
    ];

    assert_eq!(titles(&schedule(&tasks).unwrap()), vec!["A", "C", "B", "D"]);
}

#[test]
fn empty_input_yields_empty_order() {
    let order = schedule(&[]).unwrap();
    assert!(order.is_empty());
    assert!(check(&[]).is_ok());
}

#[test]
fn scheduling_is_idempotent_and_leaves_input_untouched() {
    let tasks = vec![
        task("deploy").hours(1.0).due("2024-05-03").after("test").build(),
        task("test").hours(2.0).due("2024-05-02").after("build").build(),
        task("build").hours(3.0).due("2024-05-01").build(),
        task("docs").hours(2.0).due("2024-05-02").build(),
    ];
    let before: Vec<Task> = tasks.clone();

    let first = schedule(&tasks).unwrap();
    let second = schedule(&tasks).unwrap();

    assert_eq!(first, second);
    assert_eq!(tasks, before);
    assert_eq!(titles(&first), vec!["build", "docs", "test", "deploy"]);
}

#[test]
fn input_order_does_not_change_the_result() {
    let mut tasks = vec![
        task("a").due("2024-01-03").build(),
        task("b").due("2024-01-01").after("a").build(),
        task("c").due("2024-01-02").build(),
        task("d").due("2024-01-02").hours(0.5).after("c").build(),
    ];
    let forward = schedule(&tasks).unwrap();

    tasks.reverse();
    let backward = schedule(&tasks).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn graph_exposes_roots_and_adjacency() {
    let tasks = vec![
        task("report").after("data").after("schema").build(),
        task("data").build(),
        task("schema").build(),
        task("review").after("report").build(),
    ];
    let graph = TaskGraph::build(&tasks).unwrap();

    assert_eq!(graph.len(), 4);
    assert!(!graph.is_empty());
    assert_eq!(graph.roots(), vec!["data", "schema"]);
    assert_eq!(graph.in_degree("report"), Some(2));
    assert_eq!(graph.in_degree("data"), Some(0));
    assert_eq!(graph.in_degree("missing"), None);
    assert_eq!(graph.dependencies_of("report"), vec!["data", "schema"]);
    assert_eq!(graph.dependents_of("report"), vec!["review"]);
    assert!(graph.dependents_of("review").is_empty());

    let order = graph.ready_order().unwrap();
    assert_eq!(titles(&order), vec!["data", "schema", "report", "review"]);
}
