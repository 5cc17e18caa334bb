use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn listing_users_reflects_registrations() {
    let app = TestApp::spawn().await;

    let response = app.get("/users").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);

    app.register("a@b.com", "pw123456", "abc").await;
    app.register("c@d.com", "pw123456", "cde").await;

    let body: Value = app.get("/users").await.json().await.unwrap();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    // Sensitive fields are never listed.
    for user in users {
        assert!(user.get("password_hash").is_none());
        assert!(user.get("refresh_tokens").is_none());
    }
}

#[tokio::test]
async fn getting_a_user_by_id() {
    let app = TestApp::spawn().await;
    let created: Value = app
        .register("a@b.com", "pw123456", "abc")
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/users/{id}")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "abc");
}

#[tokio::test]
async fn getting_an_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/users/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "user not found");
}

#[tokio::test]
async fn email_lookup_answers_null_when_nothing_matches() {
    let app = TestApp::spawn().await;

    let response = app.get("/users/email/nobody@b.com").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn email_lookup_finds_a_registered_user() {
    let app = TestApp::spawn().await;
    app.register("a@b.com", "pw123456", "abc").await;

    // Lookup is case-insensitive thanks to normalization.
    let response = app.get("/users/email/A@B.COM").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "a@b.com");
}

#[tokio::test]
async fn updating_a_user_changes_only_the_given_fields() {
    let app = TestApp::spawn().await;
    let created: Value = app
        .register("a@b.com", "pw123456", "abc")
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app
        .put_json(&format!("/users/{id}"), &json!({ "username": "renamed" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "renamed");
    assert_eq!(body["email"], "a@b.com");
}

#[tokio::test]
async fn updating_a_user_cannot_take_another_users_email_or_username() {
    let app = TestApp::spawn().await;
    app.register("a@b.com", "pw123456", "abc").await;
    let second: Value = app
        .register("c@d.com", "pw123456", "cde")
        .await
        .json()
        .await
        .unwrap();
    let id = second["id"].as_str().unwrap();

    let response = app
        .put_json(&format!("/users/{id}"), &json!({ "email": "a@b.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 409);

    let response = app
        .put_json(&format!("/users/{id}"), &json!({ "username": "abc" }))
        .await;
    assert_eq!(response.status().as_u16(), 409);

    // The second user kept its own identity.
    let body: Value = app.get(&format!("/users/{id}")).await.json().await.unwrap();
    assert_eq!(body["email"], "c@d.com");
    assert_eq!(body["username"], "cde");
}

#[tokio::test]
async fn updating_an_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .put_json(
            "/users/00000000-0000-0000-0000-000000000000",
            &json!({ "username": "renamed" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleting_a_user_removes_it() {
    let app = TestApp::spawn().await;
    let created: Value = app
        .register("a@b.com", "pw123456", "abc")
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app.delete(&format!("/users/{id}")).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.get(&format!("/users/{id}")).await.status().as_u16(), 404);
    // Deleting again reports the absence.
    assert_eq!(app.delete(&format!("/users/{id}")).await.status().as_u16(), 404);
}
