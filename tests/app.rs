use axum::Router;
use postbox::{app::AppState, db, http};
use serde_json::json;
use tokio::task::JoinHandle;

async fn start_server() -> (String, JoinHandle<()>) {
    // Single connection so every request sees the same in-memory database
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite://:memory:")
        .await
        .expect("connect memory sqlite");
    db::run_migrations(&pool).await.expect("migrate");
    let state = AppState { db: pool };
    let app: Router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

fn email_payload(subject: &str) -> serde_json::Value {
    json!({
        "sender_name": "Jane Doe",
        "sender_email": "jane.doe@business.com",
        "recipient": "Richard Brown",
        "subject": subject,
        "body": "Hi Richard,\n\nJust checking in.",
    })
}

async fn create(
    client: &reqwest::Client,
    base: &str,
    payload: &serde_json::Value,
) -> serde_json::Value {
    let res = client
        .post(format!("{}/emails", base))
        .json(payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn update(
    client: &reqwest::Client,
    base: &str,
    id: i64,
    payload: &serde_json::Value,
) -> reqwest::Response {
    client
        .put(format!("{}/emails/{}", base, id))
        .json(payload)
        .send()
        .await
        .unwrap()
}

async fn list_ids(client: &reqwest::Client, base: &str, filter: &str) -> Vec<i64> {
    let res = client
        .get(format!("{}/emails?filter={}", base, filter))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let v: serde_json::Value = res.json().await.unwrap();
    v["emails"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn create_forces_flags_off_and_returns_full_email() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    // Flag fields in the payload must be ignored, never trusted
    let mut payload = email_payload("Hello");
    payload["is_read"] = json!(true);
    payload["archived"] = json!(true);

    let v = create(&client, &base, &payload).await;
    assert_eq!(v["is_read"], json!(false));
    assert_eq!(v["archived"], json!(false));
    assert_eq!(v["subject"], json!("Hello"));
    assert_eq!(v["attachments"].as_array().unwrap().len(), 0);
    assert!(v["created_at"].as_str().unwrap().ends_with('Z'));
    let preview = v["preview"].as_str().unwrap();
    assert!(v["body"].as_str().unwrap().starts_with(preview));
}

#[tokio::test]
async fn preview_is_first_80_chars_of_body() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let mut payload = email_payload("Long body");
    payload["body"] = json!("x".repeat(90));

    let v = create(&client, &base, &payload).await;
    assert_eq!(v["preview"].as_str().unwrap(), "x".repeat(80));
}

#[tokio::test]
async fn list_entries_omit_body_and_attachments() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();
    create(&client, &base, &email_payload("Compact")).await;

    let res = client
        .get(format!("{}/emails", base))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let v: serde_json::Value = res.json().await.unwrap();
    let entry = &v["emails"].as_array().unwrap()[0];
    assert_eq!(entry["subject"], json!("Compact"));
    assert!(entry.get("body").is_none());
    assert!(entry.get("attachments").is_none());
}

#[tokio::test]
async fn filters_partition_the_mailbox() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let unread = create(&client, &base, &email_payload("Unread")).await["id"]
        .as_i64()
        .unwrap();
    let read = create(&client, &base, &email_payload("Read")).await["id"]
        .as_i64()
        .unwrap();
    let archived = create(&client, &base, &email_payload("Archived")).await["id"]
        .as_i64()
        .unwrap();

    let res = update(&client, &base, read, &json!({ "is_read": true })).await;
    assert!(res.status().is_success());
    let res = update(&client, &base, archived, &json!({ "archived": true })).await;
    assert!(res.status().is_success());

    let all = list_ids(&client, &base, "all").await;
    assert!(all.contains(&unread));
    assert!(all.contains(&read));
    assert!(!all.contains(&archived));

    assert_eq!(list_ids(&client, &base, "unread").await, vec![unread]);
    assert_eq!(list_ids(&client, &base, "archive").await, vec![archived]);
}

#[tokio::test]
async fn read_receipt_on_archived_email_stays_archived() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let id = create(&client, &base, &email_payload("Archived then read")).await["id"]
        .as_i64()
        .unwrap();
    update(&client, &base, id, &json!({ "archived": true })).await;

    let res = update(&client, &base, id, &json!({ "is_read": true })).await;
    assert!(res.status().is_success());
    let v: serde_json::Value = res.json().await.unwrap();
    assert_eq!(v["is_read"], json!(true));
    assert_eq!(v["archived"], json!(true));

    assert!(!list_ids(&client, &base, "all").await.contains(&id));
    assert!(!list_ids(&client, &base, "unread").await.contains(&id));
    assert!(list_ids(&client, &base, "archive").await.contains(&id));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    for subject in ["first", "second", "third"] {
        create(&client, &base, &email_payload(subject)).await;
    }

    let res = client
        .get(format!("{}/emails", base))
        .send()
        .await
        .unwrap();
    let v: serde_json::Value = res.json().await.unwrap();
    let emails = v["emails"].as_array().unwrap();
    assert_eq!(emails.len(), 3);
    assert_eq!(emails[0]["subject"], json!("third"));
    for pair in emails.windows(2) {
        assert!(pair[0]["created_at"].as_str().unwrap() >= pair[1]["created_at"].as_str().unwrap());
    }
}

#[tokio::test]
async fn empty_update_returns_the_unchanged_record() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &email_payload("Untouched")).await;
    let id = created["id"].as_i64().unwrap();

    let res = update(&client, &base, id, &json!({})).await;
    assert!(res.status().is_success());
    let v: serde_json::Value = res.json().await.unwrap();
    assert_eq!(v["created_at"], created["created_at"]);
    assert_eq!(v["subject"], created["subject"]);
    assert_eq!(v["body"], created["body"]);
    assert_eq!(v["attachments"], created["attachments"]);
}

#[tokio::test]
async fn update_missing_email_is_404() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let res = update(&client, &base, 9999, &json!({ "is_read": true })).await;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let id = create(&client, &base, &email_payload("Doomed")).await["id"]
        .as_i64()
        .unwrap();

    let res = client
        .delete(format!("{}/emails/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/emails/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/emails/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attachments_round_trip_in_order() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let mut payload = email_payload("With attachments");
    payload["attachments"] = json!([
        { "name": "a.pdf", "size": "1MB", "url": "#" },
        { "name": "b.png", "url": "#" },
    ]);

    let id = create(&client, &base, &payload).await["id"].as_i64().unwrap();

    let res = client
        .get(format!("{}/emails/{}", base, id))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let v: serde_json::Value = res.json().await.unwrap();
    let atts = v["attachments"].as_array().unwrap();
    assert_eq!(atts.len(), 2);
    assert_eq!(atts[0], json!({ "name": "a.pdf", "size": "1MB", "url": "#" }));
    // Omitted size defaults to empty, not null
    assert_eq!(atts[1], json!({ "name": "b.png", "size": "", "url": "#" }));
}

#[tokio::test]
async fn unknown_filter_is_rejected() {
    let (base, _srv) = start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/emails?filter=starred", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}
