//! Wire-format tests for the Messages API request body.

use kelp_claude::Request;
use llm::Message;

#[test]
fn serialized_body_shape() {
    let req = Request::new("claude-sonnet-4-5")
        .with_max_tokens(512)
        .with_system("Be terse.");
    let body = req.body(&[Message::user("ping"), Message::assistant("pong")]);
    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(value["model"], "claude-sonnet-4-5");
    assert_eq!(value["max_tokens"], 512);
    assert_eq!(value["system"], "Be terse.");
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "ping");
    assert_eq!(value["messages"][1]["role"], "assistant");
}

#[test]
fn system_field_omitted_when_unset() {
    let body = Request::default().body(&[Message::user("hi")]);
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("system").is_none());
}

#[test]
fn no_system_role_reaches_the_messages_array() {
    let body = Request::default().body(&[Message::system("rules"), Message::user("hi")]);
    let value = serde_json::to_value(&body).unwrap();
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(value["system"], "rules");
}
