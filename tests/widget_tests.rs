use clarybot_relay::routes::create_router;
use clarybot_relay::services::completion::{CompletionProvider, CompletionRequest, ProviderError};
use clarybot_relay::services::relay_client::RelayClient;
use clarybot_relay::services::transcript::EntryRole;
use clarybot_relay::services::widget::{CANNED_SUGGESTION, ChatWidget, WidgetVariant};
use clarybot_relay::state::AppState;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct EchoProvider;

#[async_trait]
impl CompletionProvider for EchoProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let user = request.turns.last().map(|t| t.content.clone()).unwrap_or_default();
        Ok(format!("You said: {user}"))
    }
}

struct BrokenProvider;

#[async_trait]
impl CompletionProvider for BrokenProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
        Err(ProviderError::Other("upstream down".to_string()))
    }
}

async fn spawn_relay(provider: Arc<dyn CompletionProvider>) -> String {
    let state = Arc::new(AppState::new(provider));
    let app = create_router("public").with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn local_widget() -> ChatWidget {
    ChatWidget::new(WidgetVariant::Local { delay: Duration::ZERO })
}

#[tokio::test]
async fn test_local_widget_replies_from_keywords() {
    let mut widget = local_widget();
    widget.set_input("  I like physics ");

    let reply = widget.submit().await.unwrap();
    assert_eq!(reply.role, EntryRole::Bot);
    assert!(reply.text.contains("Aeronautical"));

    let entries = widget.transcript().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].role, EntryRole::User);
    assert_eq!(entries[0].text, "I like physics");
    assert_eq!(widget.input(), "");
}

#[tokio::test]
async fn test_blank_input_changes_nothing() {
    let mut widget = local_widget();
    for input in ["", "   ", "\n\t "] {
        widget.set_input(input);
        assert!(widget.submit().await.is_none());
    }
    assert!(widget.transcript().is_empty());
}

#[tokio::test]
async fn test_transcript_keeps_submission_order() {
    let mut widget = local_widget();
    for input in ["math", "bio", "design"] {
        widget.set_input(input);
        widget.submit().await;
    }

    let texts: Vec<&str> = widget
        .transcript()
        .entries()
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[0], "math");
    assert_eq!(texts[2], "bio");
    assert_eq!(texts[4], "design");
    assert!(texts[5].contains("Architecture"));
}

#[tokio::test]
async fn test_reply_waits_for_thinking_delay() {
    let mut widget = ChatWidget::new(WidgetVariant::Local { delay: Duration::from_millis(50) });
    widget.set_input("art");

    let started = Instant::now();
    widget.submit().await;
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_canned_widget() {
    let mut widget = ChatWidget::new(WidgetVariant::Canned { delay: Duration::ZERO });
    widget.set_input("anything");
    let reply = widget.submit().await.unwrap();
    assert_eq!(reply.text, CANNED_SUGGESTION);
}

#[tokio::test]
async fn test_networked_widget_round_trip() {
    let base = spawn_relay(Arc::new(EchoProvider)).await;
    let client = RelayClient::new(&base, Duration::from_secs(5)).unwrap();
    let mut widget = ChatWidget::new(WidgetVariant::Networked(client));

    widget.set_input(" hello ");
    let reply = widget.submit().await.unwrap();
    assert_eq!(reply.text, "You said: hello");
    assert_eq!(widget.transcript().len(), 2);
}

#[tokio::test]
async fn test_networked_widget_shows_placeholder_on_failure() {
    let base = spawn_relay(Arc::new(BrokenProvider)).await;
    let client = RelayClient::new(&base, Duration::from_secs(5)).unwrap();
    let mut widget = ChatWidget::new(WidgetVariant::Networked(client));

    widget.set_input("hello");
    let reply = widget.submit().await.unwrap();
    assert_eq!(reply.role, EntryRole::Bot);
    assert_eq!(reply.text, "Error connecting to AI.");
}
