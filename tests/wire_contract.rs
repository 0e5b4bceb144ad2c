use serde_json::json;
use taskorder::errors::{SchedulingError, TaskOrderError};
use taskorder::wire::{
    schedule_request, status_for, ErrorBody, ScheduleRequest, ScheduleResponse, WireTask,
};
use taskorder_test_utils::builders::{date, TaskBuilder};

fn request(value: serde_json::Value) -> ScheduleRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn request_uses_camel_case_and_defaults_dependencies() {
    let req = request(json!({
        "tasks": [
            { "title": "A", "estimatedHours": 2.5, "dueDate": "2024-01-10" },
            { "title": "B", "estimatedHours": 3, "dueDate": "2024-01-05", "dependencies": ["A"] }
        ]
    }));

    assert_eq!(
        req.tasks[0],
        WireTask {
            title: "A".to_string(),
            estimated_hours: 2.5,
            due_date: date("2024-01-10"),
            dependencies: vec![],
        }
    );
    assert_eq!(req.tasks[1].dependencies, vec!["A"]);
}

#[test]
fn response_serialises_recommended_order_and_optional_project_id() {
    let with_id = ScheduleResponse {
        project_id: Some("123".to_string()),
        recommended_order: vec!["A".to_string(), "B".to_string()],
    };
    assert_eq!(
        serde_json::to_value(&with_id).unwrap(),
        json!({ "projectId": "123", "recommendedOrder": ["A", "B"] })
    );

    let without_id = ScheduleResponse {
        project_id: None,
        recommended_order: vec![],
    };
    assert_eq!(
        serde_json::to_value(&without_id).unwrap(),
        json!({ "recommendedOrder": [] })
    );
}

#[test]
fn schedule_request_answers_like_the_endpoint() {
    let req = request(json!({
        "tasks": [
            { "title": "A", "estimatedHours": 2, "dueDate": "2024-01-10", "dependencies": [] },
            { "title": "B", "estimatedHours": 3, "dueDate": "2024-01-05", "dependencies": ["A"] }
        ]
    }));

    let response = schedule_request(&req, Some("123")).unwrap();
    assert_eq!(response.project_id.as_deref(), Some("123"));
    assert_eq!(response.recommended_order, vec!["A", "B"]);
}

#[test]
fn cycle_becomes_a_400_error_body() {
    let req = request(json!({
        "tasks": [
            { "title": "A", "estimatedHours": 1, "dueDate": "2024-02-01", "dependencies": ["B"] },
            { "title": "B", "estimatedHours": 1, "dueDate": "2024-02-01", "dependencies": ["A"] }
        ]
    }));

    let err = schedule_request(&req, None).unwrap_err();
    assert!(matches!(
        err,
        TaskOrderError::Scheduling(SchedulingError::CyclicDependency { .. })
    ));
    assert_eq!(status_for(&err), 400);

    let body = ErrorBody::from(&err);
    assert_eq!(body.code, "cyclic_dependency");
    assert_eq!(body.titles, vec!["A", "B"]);

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["code"], "cyclic_dependency");
    assert_eq!(value["titles"], json!(["A", "B"]));
}

#[test]
fn invalid_estimate_is_a_request_error() {
    let req = request(json!({
        "tasks": [ { "title": "A", "estimatedHours": -2, "dueDate": "2024-01-01" } ]
    }));

    let err = schedule_request(&req, None).unwrap_err();
    match &err {
        TaskOrderError::InvalidTask(msg) => assert!(msg.contains("task 'A'")),
        other => panic!("Expected InvalidTask, got: {:?}", other),
    }
    assert_eq!(status_for(&err), 400);

    let body = ErrorBody::from(&err);
    assert_eq!(body.code, "invalid_request");
    assert!(body.titles.is_empty());
    assert!(serde_json::to_value(&body).unwrap().get("titles").is_none());
}

#[test]
fn non_domain_failures_map_to_server_statuses() {
    let timeout = TaskOrderError::Timeout(50);
    assert_eq!(status_for(&timeout), 504);
    assert_eq!(ErrorBody::from(&timeout).code, "timeout");

    let io = TaskOrderError::IoError(std::io::Error::other("disk gone"));
    assert_eq!(status_for(&io), 500);
    assert_eq!(ErrorBody::from(&io).code, "internal");
}

#[test]
fn requests_can_be_built_from_tasks() {
    let tasks = vec![
        TaskBuilder::new("ship")
            .hours(0.5)
            .due("2024-04-02")
            .after("test")
            .after("build")
            .build(),
    ];

    let req = ScheduleRequest::from_tasks(&tasks);
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "tasks": [ {
            "title": "ship",
            "estimatedHours": 0.5,
            "dueDate": "2024-04-02",
            "dependencies": ["build", "test"]
        } ] })
    );
    assert_eq!(req.to_tasks().unwrap(), tasks);
}
