use pmt_client::{ClientError, PmtClient};
use pmt_domain::codes::{TaskPriority, TaskStatusCode};
use pmt_domain::task::{TaskCreate, TaskUpdate};
use pmt_domain::user::LoginRequest;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PmtClient {
    PmtClient::with_http_client(server.uri(), reqwest::Client::new())
}

fn login_request() -> LoginRequest {
    LoginRequest { email: "ada@example.com".to_owned(), password: "secret".to_owned() }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "ada",
            "email": "ada@example.com"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_stores_the_session_user() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let client = client_for(&server);
    assert!(!client.is_logged_in());

    let user = client.login(&login_request()).await.unwrap();
    assert_eq!(user.id, Some(1));
    assert!(client.is_logged_in());
    assert_eq!(client.current_user().unwrap().username, "ada");

    client.logout();
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn failed_login_surfaces_the_api_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login(&login_request()).await.unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "bad credentials");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn project_creation_requires_a_session() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let project = pmt_domain::project::Project {
        id: None,
        name: "PMT".to_owned(),
        description: None,
        start_date: "2030-01-01".to_owned(),
        created_by: None,
        created_at: None,
        updated_at: None,
        created_by_user: None,
        member_count: None,
    };

    let err = client.create_project(&project).await.unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));
}

#[tokio::test]
async fn project_creation_passes_the_creator_as_a_query_param() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(query_param("createdById", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "name": "PMT",
            "startDate": "2030-01-01",
            "createdBy": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.login(&login_request()).await.unwrap();

    let project = pmt_domain::project::Project {
        id: None,
        name: "PMT".to_owned(),
        description: None,
        start_date: "2030-01-01".to_owned(),
        created_by: None,
        created_at: None,
        updated_at: None,
        created_by_user: None,
        member_count: None,
    };

    let created = client.create_project(&project).await.unwrap();
    assert_eq!(created.id, Some(9));
    assert_eq!(created.created_by, Some(1));
}

#[tokio::test]
async fn task_creation_fills_session_user_and_normalizes_the_due_date() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "title": "Fix bug",
            "priority": "HIGH",
            "dueDate": "2030-06-01",
            "projectId": 7,
            "createdById": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "title": "Fix bug",
            "statusId": 1,
            "priority": "HIGH",
            "projectId": 7,
            "createdBy": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.login(&login_request()).await.unwrap();

    let created = client
        .create_task(TaskCreate {
            title: "Fix bug".to_owned(),
            description: None,
            status: None,
            priority: TaskPriority::High,
            due_date: Some("2030-06-01T15:30:00".to_owned()),
            project_id: 7,
            assigned_to_id: None,
            // Overwritten by the session user.
            created_by_id: 0,
        })
        .await
        .unwrap();

    assert_eq!(created.id, Some(42));
    assert_eq!(created.priority, TaskPriority::High);
}

#[tokio::test]
async fn task_status_update_uses_the_wire_code() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/42/status/IN_PROGRESS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "title": "Fix bug",
            "statusId": 2,
            "priority": "HIGH",
            "projectId": 7,
            "createdBy": 1,
            "statusName": "IN_PROGRESS"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client.update_task_status(42, TaskStatusCode::InProgress).await.unwrap();
    assert_eq!(task.status_name.as_deref(), Some("IN_PROGRESS"));
}

#[tokio::test]
async fn task_update_sends_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/42"))
        .and(body_json(json!({"status": "DONE"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "title": "Fix bug",
            "statusId": 3,
            "priority": "HIGH",
            "projectId": 7,
            "createdBy": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = TaskUpdate { status: Some("DONE".to_owned()), ..TaskUpdate::default() };
    let task = client.update_task(42, update).await.unwrap();
    assert_eq!(task.status_id, 3);
}

#[tokio::test]
async fn membership_check_decodes_null_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project-members/check/7/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let membership = client.check_project_membership(7, 2).await.unwrap();
    assert!(membership.is_none());
}

#[tokio::test]
async fn notification_inbox_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notifications/user/1/unread"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5,
            "userId": 1,
            "title": "Task Updated",
            "message": "Task \"Fix Bug\" has been updated",
            "type": "INFO",
            "isRead": false
        }])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/notifications/5/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "userId": 1,
            "title": "Task Updated",
            "message": "Task \"Fix Bug\" has been updated",
            "type": "INFO",
            "isRead": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/notifications/user/1/read-all"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let unread = client.unread_notifications(1).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].kind, "INFO");

    let read = client.mark_notification_read(5).await.unwrap();
    assert!(read.is_read);

    client.mark_all_notifications_read(1).await.unwrap();
}

#[tokio::test]
async fn deletion_accepts_an_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_task(42).await.unwrap();
}
