//! Integration tests for task operations.

mod common;

use clockify::api::request::TaskStatus;
use clockify::RequestOption;
use common::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn all_filters_active_tasks() {
    let (mut server, clockify) = setup().await;

    let mock = server
        .mock("GET", tasks_path().as_str())
        .match_query(exact_query(
            "is-active=true&name=Design&page=1&page-size=50&strict-name-search=true",
        ))
        .with_status(200)
        .with_body(json!([task_json("t1", "Design")]).to_string())
        .create_async()
        .await;

    let tasks = clockify
        .tasks(WORKSPACE, PROJECT)
        .all(&[
            RequestOption::IsActive(true),
            RequestOption::Name("Design".to_string()),
            RequestOption::StrictNameSearch(true),
            RequestOption::Billable(true),
        ])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status, "ACTIVE");
}

#[tokio::test]
async fn add_sends_fields_in_body() {
    let (mut server, clockify) = setup().await;

    let mock = server
        .mock("POST", tasks_path().as_str())
        .match_body(Matcher::Json(json!({
            "name": "Docs",
            "assigneeIds": ["u1", "u2"],
            "estimate": "PT4H",
            "status": "ACTIVE"
        })))
        .with_status(201)
        .with_body(task_json("t2", "Docs").to_string())
        .create_async()
        .await;

    let task = clockify
        .tasks(WORKSPACE, PROJECT)
        .add("Docs", &[
            RequestOption::AssigneeIds(vec!["u1".to_string(), "u2".to_string()]),
            RequestOption::Estimate("PT4H".to_string()),
            RequestOption::Status(TaskStatus::Active),
        ])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(task.id, "t2");
}

#[tokio::test]
async fn update_marks_task_done() {
    let (mut server, clockify) = setup().await;

    let mock = server
        .mock("PUT", format!("{}/t1", tasks_path()).as_str())
        .match_body(Matcher::Json(json!({
            "name": "Design",
            "status": "DONE",
            "billable": false
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "t1",
                "name": "Design",
                "projectId": PROJECT,
                "status": "DONE",
                "billable": false
            })
            .to_string(),
        )
        .create_async()
        .await;

    let task = clockify
        .tasks(WORKSPACE, PROJECT)
        .update("t1", &[
            RequestOption::Name("Design".to_string()),
            RequestOption::Status(TaskStatus::Done),
            RequestOption::Billable(false),
        ])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(task.status, "DONE");
    assert!(!task.billable);
}

#[tokio::test]
async fn delete_uses_plural_path() {
    let (mut server, clockify) = setup().await;

    let mock = server
        .mock("DELETE", format!("{}/t1", tasks_path()).as_str())
        .with_status(200)
        .with_body(task_json("t1", "Design").to_string())
        .create_async()
        .await;

    let deleted = clockify
        .projects(WORKSPACE)
        .tasks(PROJECT)
        .delete("t1", &[])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(deleted.id, "t1");
}

#[tokio::test]
async fn delete_failure_is_labelled_del() {
    let (mut server, clockify) = setup().await;

    server
        .mock("DELETE", format!("{}/t1", tasks_path()).as_str())
        .with_status(403)
        .with_body("")
        .create_async()
        .await;

    let err = clockify
        .tasks(WORKSPACE, PROJECT)
        .delete("t1", &[])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "del: http error: status code 403");
}
