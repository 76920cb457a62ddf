mod common;

use common::TestApp;
use common::SECRET_VALUE;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("abc", "abcdef").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"message": "User registered successfully"}));

    let sent = app.notifications.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].username, "abc");
    assert_eq!(sent[0].email, "a@b.com");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register("abc", "abcdef").await;
    let response = app.register("abc", "other-password").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Username already taken");
    assert_eq!(app.notifications.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_succeeds_when_notification_fails() {
    let app = TestApp::spawn_with_failing_notifications().await;

    let response = app.register("abc", "abcdef").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.login("abc", "abcdef").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::spawn().await;

    let cases = [
        (
            json!({"username": "abc", "password": "abcdef", "email": "a@b.com"}),
            "Missing required field: fullname",
        ),
        (
            json!({"password": "abcdef", "fullname": "Abc Def", "email": "a@b.com"}),
            "Missing required field: username",
        ),
        (
            json!({"username": "ab", "password": "abcdef", "fullname": "Abc Def", "email": "a@b.com"}),
            "minimum 3 characters",
        ),
        (
            json!({"username": "abc", "password": "abc", "fullname": "Abc Def", "email": "a@b.com"}),
            "minimum 6 characters",
        ),
        (
            json!({"username": "abc", "password": "abcdef", "fullname": "Abc Def", "email": "nope"}),
            "email",
        ),
    ];

    for (payload, expected) in cases {
        let response = app
            .post("/register")
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert!(
            body["message"].as_str().unwrap().contains(expected),
            "unexpected message {:?} for {}",
            body["message"],
            expected
        );
    }

    assert!(app.notifications.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_requires_json_content_type() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .header("content-type", "text/plain")
        .body(r#"{"username":"abc"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"error": "Content-Type must be application/json"})
    );
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "Invalid JSON data"}));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.register("abc", "abcdef").await;

    let response = app.login("abc", "abcdef").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("Missing token");
    assert_eq!(token.split('.').count(), 3);

    let claims = auth::TokenService::new()
        .verify(token, SECRET_VALUE.as_bytes())
        .expect("Token does not verify");
    assert_eq!(claims.sub.as_deref(), Some("abc"));
    assert_eq!(claims.username().as_deref(), Some("abc"));
    assert_eq!(claims.email().as_deref(), Some("a@b.com"));
    assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 43_200);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("abc", "abcdef").await;

    let wrong_password = app.login("abc", "wrong-password").await;
    let unknown_user = app.login("nobody", "abcdef").await;
    let malformed_user = app.login("a", "abcdef").await;

    let mut bodies = Vec::new();
    for response in [wrong_password, unknown_user, malformed_user] {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(response.text().await.expect("Failed to read body"));
    }

    assert_eq!(bodies[0], r#"{"message":"Invalid credentials"}"#);
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

#[tokio::test]
async fn test_login_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/login")
        .json(&json!({"username": "abc"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Missing required field: password");
}

#[tokio::test]
async fn test_register_login_protected_scenario() {
    let app = TestApp::spawn().await;

    assert_eq!(
        app.register("abc", "abcdef").await.status(),
        StatusCode::CREATED
    );
    assert_eq!(
        app.register("abc", "abcdef").await.status(),
        StatusCode::BAD_REQUEST
    );

    let body: serde_json::Value = app
        .login("abc", "abcdef")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    let token = body["token"].as_str().expect("Missing token");

    let response = app
        .get_authenticated("/protected", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        "Hello, abc! You have access to this protected resource."
    );
}

#[tokio::test]
async fn test_protected_rejections() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("abc", "abcdef").await;

    let foreign_token = auth::TokenService::new()
        .issue("abc", Default::default(), b"some-other-secret", 3600)
        .unwrap();
    let expired_token = auth::TokenService::new()
        .issue("abc", Default::default(), SECRET_VALUE.as_bytes(), -10)
        .unwrap();
    let mut tampered_token = token.clone();
    tampered_token.pop();

    let requests = [
        app.get("/protected"),
        app.get("/protected").header("authorization", "Basic abc"),
        app.get("/protected").header("authorization", "Bearer "),
        app.get_authenticated("/protected", "not-a-jwt"),
        app.get_authenticated("/protected", &foreign_token),
        app.get_authenticated("/protected", &expired_token),
        app.get_authenticated("/protected", &tampered_token),
    ];

    for request in requests {
        let response = request.send().await.expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({"message": "Unauthorized"}));
    }
}

#[tokio::test]
async fn test_todo_get_before_put_returns_empty_list() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("abc", "abcdef").await;

    let response = app
        .get_authenticated("/todos/t1", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_todo_put_then_get() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("abc", "abcdef").await;
    let payload = json!({"title": "buy milk", "done": false});

    let response = app
        .put_authenticated("/todos/t1", &token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"message": "Todo saved successfully"}));

    let body: serde_json::Value = app
        .get_authenticated("/todos/t1", &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_todos_are_scoped_to_owner() {
    let app = TestApp::spawn().await;
    let owner_token = app.register_and_login("abc", "abcdef").await;
    let other_token = app.register_and_login("xyz", "abcdef").await;

    app.put_authenticated("/todos/t1", &owner_token)
        .json(&json!(["secret plan"]))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = app
        .get_authenticated("/todos/t1", &other_token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_todo_put_missing_id() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("abc", "abcdef").await;

    for path in ["/todos", "/todos/"] {
        let response = app
            .put_authenticated(path, &token)
            .json(&json!([]))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Missing todo id");
    }
}

#[tokio::test]
async fn test_todo_get_without_id_returns_empty_list() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("abc", "abcdef").await;

    let response = app
        .get_authenticated("/todos", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_todo_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/todos/t1")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
