use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use lms_api::{
    config::Config,
    routes::{create_router, AppState},
};

fn create_test_server() -> TestServer {
    let state = Arc::new(AppState::in_memory(&Config::default()));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn create_member(server: &TestServer, name: &str, email: &str) -> Value {
    let response = server
        .post("/api/members")
        .json(&json!({ "name": name, "email": email, "password": "secret" }))
        .await;
    response.assert_status_ok();
    response.json()
}

async fn create_path(server: &TestServer, name: &str, tags: &[&str], modules: &[&str]) -> Value {
    let modules: Vec<Value> = modules.iter().map(|t| json!({ "title": t })).collect();
    let response = server
        .post("/api/paths")
        .json(&json!({
            "name": name,
            "description": format!("{} track", name),
            "difficulty": "Intermediate",
            "skill_tags": tags,
            "estimated_duration": "6 weeks",
            "modules": modules
        }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "0b5e3a1c-9f4d-4e2a-8c7b-6d5e4f3a2b1c";
    let response = server
        .get("/")
        .add_header(
            header::HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.headers().get("x-request-id").unwrap(), id);
}

#[tokio::test]
async fn test_register_login_and_me() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "Ada Lovelace", "email": "ada@example.com", "password": "engine" }))
        .await;
    response.assert_status_ok();
    let member: Value = response.json();
    assert_eq!(member["initials"], "AL");
    assert_eq!(member["role"], "Developer");
    assert!(member.get("password_hash").is_none());

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "ada@example.com", "password": "engine" }))
        .await;
    response.assert_status_ok();
    let login: Value = response.json();
    assert_eq!(login["token_type"], "bearer");
    assert_eq!(login["user"]["email"], "ada@example.com");

    let token = login["access_token"].as_str().unwrap();
    let response = server
        .get("/api/auth/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        )
        .await;
    response.assert_status_ok();
    let me: Value = response.json();
    assert_eq!(me["id"], member["id"]);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let server = create_test_server();
    create_member(&server, "Grace Hopper", "grace@example.com").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "grace@example.com", "password": "wrong" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_token() {
    let server = create_test_server();
    let response = server.get("/api/auth/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_create_rejects_duplicate_email() {
    let server = create_test_server();
    create_member(&server, "Alan Turing", "alan@example.com").await;

    let response = server
        .post("/api/members")
        .json(&json!({ "name": "Alan T", "email": "alan@example.com", "password": "x" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let server = create_test_server();
    create_member(&server, "Alan Turing", "alan@example.com").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "Alan T", "email": "alan@example.com", "password": "x" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_member_crud_and_skills() {
    let server = create_test_server();
    let member = create_member(&server, "Linus", "linus@example.com").await;
    let id = member["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/members/{}", id))
        .json(&json!({ "role": "Maintainer", "participation_score": 42 }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["role"], "Maintainer");
    assert_eq!(updated["participation_score"], 42);
    assert_eq!(updated["name"], "Linus");

    let response = server
        .post(&format!("/api/members/{}/skills", id))
        .json(&json!({ "name": "C" }))
        .await;
    response.assert_status_ok();
    let with_skill: Value = response.json();
    assert_eq!(with_skill["skills"][0]["name"], "C");
    assert_eq!(with_skill["skills"][0]["proficiency"], "Beginner");

    let members: Vec<Value> = server.get("/api/members").await.json();
    assert_eq!(members.len(), 1);

    server.delete(&format!("/api/members/{}", id)).await.assert_status_ok();
    server
        .get(&format!("/api/members/{}", id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_task_defaults_and_update() {
    let server = create_test_server();

    let response = server
        .post("/api/tasks")
        .json(&json!({ "title": "Write docs" }))
        .await;
    response.assert_status_ok();
    let task: Value = response.json();
    assert_eq!(task["status"], "Pending");
    assert_eq!(task["priority"], "Medium");
    assert_eq!(task["skill_focus"], "General");

    let id = task["id"].as_i64().unwrap();
    let response = server
        .put(&format!("/api/tasks/{}", id))
        .json(&json!({ "status": "Completed" }))
        .await;
    response.assert_status_ok();
    let done: Value = response.json();
    assert_eq!(done["status"], "Completed");
    assert_eq!(done["title"], "Write docs");

    server
        .put("/api/tasks/999")
        .json(&json!({ "status": "Completed" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_path_crud() {
    let server = create_test_server();
    let path = create_path(&server, "Frontend", &["React"], &["Hooks", "Context"]).await;
    let id = path["id"].as_i64().unwrap();
    assert_eq!(path["modules"].as_array().unwrap().len(), 2);

    let fetched: Value = server.get(&format!("/api/paths/{}", id)).await.json();
    assert_eq!(fetched["name"], "Frontend");

    server.delete(&format!("/api/paths/{}", id)).await.assert_status_ok();
    server
        .get(&format!("/api/paths/{}", id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_recommendations_rank_matching_modules() {
    let server = create_test_server();
    create_path(&server, "Frontend", &["React", "Frontend"], &["Advanced React Patterns"]).await;
    create_path(&server, "Backend", &["Python", "Backend"], &["Intro to Python"]).await;
    create_path(
        &server,
        "Services",
        &["Node.js", "Backend", "JavaScript"],
        &["Node.js Microservices"],
    )
    .await;
    create_path(&server, "Data", &["Python", "Data"], &["Data Science 101"]).await;

    let member = create_member(&server, "Dan Abramov", "dan@example.com").await;
    let id = member["id"].as_i64().unwrap();
    server
        .put(&format!("/api/members/{}", id))
        .json(&json!({ "skills": [{ "name": "React" }, { "name": "JavaScript" }] }))
        .await
        .assert_status_ok();

    let response = server.post(&format!("/api/recommendations/{}", id)).await;
    response.assert_status_ok();
    let recs: Vec<Value> = response.json();

    let titles: Vec<&str> = recs.iter().map(|r| r["module"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Advanced React Patterns", "Node.js Microservices"]);
    assert!(recs[0]["score"].as_f64().unwrap() > recs[1]["score"].as_f64().unwrap());
    assert!(recs[0]["reason"]
        .as_str()
        .unwrap()
        .starts_with("Matches your skills ("));
}

#[tokio::test]
async fn test_recommendations_fall_back_without_skills() {
    let server = create_test_server();
    let member = create_member(&server, "New Joiner", "new@example.com").await;
    let id = member["id"].as_i64().unwrap();

    let response = server
        .post(&format!("/api/recommendations/{}", id))
        .add_query_param("top_k", 1)
        .await;
    response.assert_status_ok();
    let recs: Vec<Value> = response.json();

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["module"], "Advanced React");
    assert_eq!(recs[0]["score"], 0.0);
    assert_eq!(recs[0]["reason"], "Popular for beginners");
}

#[tokio::test]
async fn test_recommendations_reject_non_numeric_top_k() {
    let server = create_test_server();
    let member = create_member(&server, "New Joiner", "new@example.com").await;
    let id = member["id"].as_i64().unwrap();

    let response = server
        .post(&format!("/api/recommendations/{}", id))
        .add_query_param("top_k", "abc")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_recommendations_for_missing_member() {
    let server = create_test_server();
    let response = server.post("/api/recommendations/404").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Member not found");
}

#[tokio::test]
async fn test_settings_defaults_and_update() {
    let server = create_test_server();

    let settings: Value = server.get("/api/settings").await.json();
    assert_eq!(settings["theme"], "black-blue");
    assert_eq!(settings["bot_enabled"], true);

    let response = server
        .put("/api/settings")
        .json(&json!({ "theme": "light", "bot_enabled": false }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["theme"], "light");
    assert_eq!(updated["bot_enabled"], false);

    let response = server
        .post("/api/bot/command")
        .json(&json!({ "command": "/adminStats" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.get("error").is_none());
    assert!(body["text"].as_str().unwrap().starts_with("Admin Stats"));
}

#[tokio::test]
async fn test_bot_add_skill_and_profile() {
    let server = create_test_server();
    let member = create_member(&server, "Rustacean", "ferris@example.com").await;
    let id = member["id"].as_i64().unwrap();

    let response = server
        .post("/api/bot/command")
        .json(&json!({ "command": "/addSkill", "memberId": id, "skill": "Rust" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["card"]["title"], "Skill Added");

    let fetched: Value = server.get(&format!("/api/members/{}", id)).await.json();
    assert_eq!(fetched["skills"][0]["name"], "Rust");

    let response = server
        .post("/api/bot/command")
        .json(&json!({ "command": "/viewProfile", "memberId": id }))
        .await;
    let body: Value = response.json();
    assert!(body["text"].as_str().unwrap().contains("Rustacean"));
    assert_eq!(body["buttons"][0]["action"]["type"], "open_url");
}

#[tokio::test]
async fn test_bot_recommend_next_returns_list() {
    let server = create_test_server();
    let member = create_member(&server, "Py Dev", "py@example.com").await;
    let id = member["id"].as_i64().unwrap();

    let response = server
        .post("/api/bot/command")
        .json(&json!({ "command": "/recommendNext", "memberId": id }))
        .await;
    response.assert_status_ok();
    let recs: Vec<Value> = response.json();
    assert_eq!(recs.len(), 2);
}

#[tokio::test]
async fn test_analytics_counts() {
    let server = create_test_server();
    create_member(&server, "One", "one@example.com").await;
    server
        .post("/api/tasks")
        .json(&json!({ "title": "Open task" }))
        .await
        .assert_status_ok();

    let response = server.get("/api/analytics").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_members"], 1);
    assert_eq!(body["active_tasks"], 1);
    assert_eq!(body["member_growth"][3]["value"], 1);
    assert_eq!(body["member_growth"][0]["value"], 0);

    server
        .post("/api/analytics/regenerate")
        .await
        .assert_status_ok();
}
