use tourla_llm::{ChatClient, ChatRequest, GeminiClient, Message, OpenAIClient};

#[tokio::test]
async fn test_openai_chat_parses_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "model": "gpt-3.5-turbo",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Visita Monserrate."}, "finish_reason": "stop"}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
            }"#,
        )
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let response = client
        .chat(ChatRequest::new("gpt-3.5-turbo", vec![Message::human("¿Qué visito?")]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.content.as_deref(), Some("Visita Monserrate."));
    assert_eq!(response.usage.unwrap().total_tokens, 14);
}

#[tokio::test]
async fn test_openai_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("invalid key")
        .create_async()
        .await;

    let client = OpenAIClient::new("bad").unwrap().with_base_url(server.url());
    let err = client
        .chat(ChatRequest::new("gpt-3.5-turbo", vec![Message::human("hola")]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_gemini_chat_reads_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::UrlEncoded("key".into(), "g-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "  Museo del Oro  "}]}, "finishReason": "STOP"}]}"#)
        .create_async()
        .await;

    let client = GeminiClient::new("g-key").unwrap().with_base_url(server.url());
    let response = client
        .chat(ChatRequest::new("gemini-1.5-flash", vec![Message::human("museos")]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.content.as_deref(), Some("Museo del Oro"));
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
}

#[tokio::test]
async fn test_gemini_empty_candidates_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let client = GeminiClient::new("g-key").unwrap().with_base_url(server.url());
    let result = client
        .chat(ChatRequest::new("gemini-1.5-flash", vec![Message::human("hola")]))
        .await;

    assert!(result.is_err());
}
