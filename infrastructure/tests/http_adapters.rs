//! reqwest adapters against a local stub server

mod support;

use docqa_application::{
    AnswerQuestionUseCase, DocumentQaWorkflow, ExtractDocumentUseCase, NoProgress,
};
use docqa_domain::{ApiKey, DocumentSession, QaError, Question};
use docqa_infrastructure::{HtmlTextExtractor, HttpDocumentSource, OpenAiLlmGateway};
use std::sync::Arc;
use support::StubServer;

const TEST_KEY: &str = "sk-test-0123456789abcdef";

fn workflow(completion_base: &str) -> DocumentQaWorkflow {
    DocumentQaWorkflow::new(
        ExtractDocumentUseCase::new(
            Arc::new(HttpDocumentSource::new()),
            Arc::new(HtmlTextExtractor::new()),
        ),
        AnswerQuestionUseCase::new(Arc::new(OpenAiLlmGateway::new(completion_base))),
    )
}

fn key() -> ApiKey {
    ApiKey::try_new(TEST_KEY).unwrap()
}

fn question() -> Question {
    Question::try_new("What color is the sky?").unwrap()
}

async fn session_with(text_html: &str) -> (DocumentSession, StubServer) {
    let page = StubServer::start(200, "text/html; charset=utf-8", text_html).await;
    let mut session = DocumentSession::new();
    workflow("http://127.0.0.1:9")
        .fetch(&mut session, &page.url("/article"), &NoProgress)
        .await
        .unwrap();
    (session, page)
}

#[tokio::test]
async fn fetch_extracts_visible_text() {
    let page = StubServer::start(
        200,
        "text/html",
        "<html><head><script>track()</script></head><body><nav>Menu</nav><p>The sky is blue.</p></body></html>",
    )
    .await;

    let mut session = DocumentSession::new();
    let document = workflow("http://127.0.0.1:9")
        .fetch(&mut session, &page.url("/article"), &NoProgress)
        .await
        .unwrap();

    assert_eq!(document.text.as_str(), "The sky is blue.");
    let requests = page.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].request_line().starts_with("GET /article"));
}

#[tokio::test]
async fn fetch_non_success_status_is_fetch_error() {
    let page = StubServer::start(404, "text/html", "<p>Not here</p>").await;

    let mut session = DocumentSession::new();
    let err = workflow("http://127.0.0.1:9")
        .fetch(&mut session, &page.url("/missing"), &NoProgress)
        .await
        .unwrap_err();

    match err {
        QaError::Fetch(message) => assert!(message.contains("404"), "{message}"),
        other => panic!("expected Fetch, got {other:?}"),
    }
    assert!(!session.has_document());
}

#[tokio::test]
async fn fetch_unreachable_host_is_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut session = DocumentSession::new();
    let err = workflow("http://127.0.0.1:9")
        .fetch(&mut session, &format!("http://{}/", addr), &NoProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, QaError::Fetch(_)), "{err:?}");
}

#[tokio::test]
async fn completion_request_carries_prompt_and_bearer_key() {
    let (session, _page) = session_with("<p>The sky is blue.</p>").await;
    let completion = StubServer::start(
        200,
        "application/json",
        r#"{"id":"c1","choices":[{"index":0,"message":{"role":"assistant","content":"Blue."},"finish_reason":"stop"}]}"#,
    )
    .await;

    let answer = workflow(&completion.base_url)
        .ask(&session, &question(), key(), &NoProgress)
        .await
        .unwrap();
    assert_eq!(answer.text(), "Blue.");

    let requests = completion.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.request_line().starts_with("POST /v1/chat/completions"));
    assert_eq!(
        request.header("authorization").as_deref(),
        Some(format!("Bearer {}", TEST_KEY).as_str())
    );

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("The sky is blue."));
    assert!(prompt.contains("Question: What color is the sky?"));
}

#[tokio::test]
async fn unauthorized_key_is_auth_error_without_the_key() {
    let (session, _page) = session_with("<p>The sky is blue.</p>").await;
    let completion = StubServer::start(
        401,
        "application/json",
        &format!(
            r#"{{"error":{{"message":"Incorrect API key provided: {}","type":"invalid_request_error"}}}}"#,
            TEST_KEY
        ),
    )
    .await;

    let err = workflow(&completion.base_url)
        .ask(&session, &question(), key(), &NoProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, QaError::Auth(_)), "{err:?}");
    assert!(!err.to_string().contains(TEST_KEY));
    assert!(!format!("{err:?}").contains(TEST_KEY));
}

#[tokio::test]
async fn rate_limit_is_service_error() {
    let (session, _page) = session_with("<p>The sky is blue.</p>").await;
    let completion = StubServer::start(
        429,
        "application/json",
        r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#,
    )
    .await;

    let err = workflow(&completion.base_url)
        .ask(&session, &question(), key(), &NoProgress)
        .await
        .unwrap_err();

    match err {
        QaError::Service(message) => assert!(message.contains("Rate limit reached"), "{message}"),
        other => panic!("expected Service, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_completion_is_service_error() {
    let (session, _page) = session_with("<p>The sky is blue.</p>").await;
    let completion = StubServer::start(200, "application/json", r#"{"choices":[]}"#).await;

    let err = workflow(&completion.base_url)
        .ask(&session, &question(), key(), &NoProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, QaError::Service(_)), "{err:?}");
}
