use crate::helpers::spawn_app;
use serde_json::json;

// -----------------------------------------------------------------------------
// reads

#[actix_rt::test]
async fn default_greeting_uses_the_startup_greeting() {
    let test_app = spawn_app();

    let response = test_app.get_greet(None).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("failed to parse body");
    assert_eq!(body["message"], "Hello World!");
}

#[actix_rt::test]
async fn named_greeting_greets_the_caller_by_name() {
    let test_app = spawn_app();

    let response = test_app.get_greet(Some("Joe")).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("failed to parse body");
    assert_eq!(body["message"], "Hello Joe!");
}

#[actix_rt::test]
async fn repeated_reads_return_identical_results() {
    let test_app = spawn_app();

    let first: serde_json::Value = test_app
        .get_greet(Some("Joe"))
        .await
        .json()
        .await
        .expect("failed to parse body");
    let second: serde_json::Value = test_app
        .get_greet(Some("Joe"))
        .await
        .json()
        .await
        .expect("failed to parse body");

    //reads don't mutate anything - two in a row must agree
    assert_eq!(first, second);
}

// -----------------------------------------------------------------------------
// updates

#[actix_rt::test]
async fn update_greeting_returns_a_204_with_an_empty_body() {
    let test_app = spawn_app();

    let response = test_app.put_greeting(&json!({ "greeting": "Hola" })).await;

    assert_eq!(204, response.status().as_u16());
    let body = response.text().await.expect("failed to read body");
    assert!(body.is_empty());
}

#[actix_rt::test]
async fn update_greeting_is_visible_to_subsequent_reads() {
    let test_app = spawn_app();

    let response = test_app.put_greeting(&json!({ "greeting": "Hola" })).await;
    assert_eq!(204, response.status().as_u16());

    //no staleness window - the very next read must already see the new value
    let body: serde_json::Value = test_app
        .get_greet(Some("Jose"))
        .await
        .json()
        .await
        .expect("failed to parse body");
    assert_eq!(body["message"], "Hola Jose!");

    let body: serde_json::Value = test_app
        .get_greet(None)
        .await
        .json()
        .await
        .expect("failed to parse body");
    assert_eq!(body["message"], "Hola World!");
}

// "table-driven" = "parametrised" test
#[actix_rt::test]
async fn update_greeting_returns_a_400_when_the_greeting_is_missing() {
    // Arrange
    let test_app = spawn_app();
    let test_cases = vec![
        (json!({}), "missing the greeting field"),
        (json!({ "greeting": "" }), "empty greeting"),
        (json!({ "greeting": null }), "null greeting"),
    ];
    for (invalid_body, error_message) in test_cases {
        // Act
        let response = test_app.put_greeting(&invalid_body).await;
        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        let body: serde_json::Value = response.json().await.expect("failed to parse body");
        assert_eq!(body["message"], "No greeting provided");
    }

    //a rejected update must leave the greeting untouched
    let body: serde_json::Value = test_app
        .get_greet(None)
        .await
        .json()
        .await
        .expect("failed to parse body");
    assert_eq!(body["message"], "Hello World!");
}
