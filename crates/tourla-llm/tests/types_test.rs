use tourla_llm::{ChatOptions, ChatRequest, Message};

#[test]
fn test_chat_request_creation() {
    let messages = vec![Message::human("Hola")];
    let request = ChatRequest::new("gpt-3.5-turbo", messages);

    assert_eq!(request.model, "gpt-3.5-turbo");
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.options, ChatOptions::default());
}

#[test]
fn test_chat_request_with_options() {
    let options = ChatOptions::new().temperature(0.7).max_tokens(256);
    let request = ChatRequest::new("gpt-3.5-turbo", vec![Message::human("Hola")]).with_options(options);

    assert_eq!(request.options.temperature, Some(0.7));
    assert_eq!(request.options.max_tokens, Some(256));
}

#[test]
fn test_message_serializes_with_role_tag() {
    let json = serde_json::to_value(Message::ai("¡Claro!")).unwrap();
    assert_eq!(json["role"], "assistant");
    assert_eq!(json["content"], "¡Claro!");

    let back: Message = serde_json::from_value(serde_json::json!({"role": "user", "content": "hola"})).unwrap();
    assert_eq!(back, Message::human("hola"));
}
