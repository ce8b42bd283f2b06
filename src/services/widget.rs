// src/services/widget.rs
use std::time::Duration;

use tracing::warn;

use super::classifier::classify;
use super::relay_client::RelayClient;
use super::transcript::{EntryRole, Transcript, TranscriptEntry};
use crate::error::PROVIDER_FAILURE_REPLY;

pub const LOCAL_REPLY_DELAY: Duration = Duration::from_millis(700);
pub const CANNED_REPLY_DELAY: Duration = Duration::from_millis(600);
pub const CANNED_SUGGESTION: &str =
    "Suggestion: Explore STEM streams → Check Career Roadmap → Visit College Hub.";

/// How a widget produces replies. One variant per widget.
#[derive(Clone, Debug)]
pub enum WidgetVariant {
    /// Ask the relay service.
    Networked(RelayClient),
    /// Keyword classifier with a simulated thinking delay.
    Local { delay: Duration },
    /// The floating widget's fixed suggestion.
    Canned { delay: Duration },
}

impl WidgetVariant {
    pub fn local() -> Self {
        WidgetVariant::Local { delay: LOCAL_REPLY_DELAY }
    }

    pub fn canned() -> Self {
        WidgetVariant::Canned { delay: CANNED_REPLY_DELAY }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingReply {
    Ready { text: &'static str, delay: Duration },
    Relay { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    Ignore,
    Reply { user_text: String, reply: PendingReply },
}

/// Decide what a submit does, without touching the transcript or the network.
pub fn plan_submit(input: &str, variant: &WidgetVariant) -> SubmitPlan {
    let text = input.trim();
    if text.is_empty() {
        return SubmitPlan::Ignore;
    }

    let reply = match variant {
        WidgetVariant::Networked(_) => PendingReply::Relay { message: text.to_string() },
        WidgetVariant::Local { delay } => PendingReply::Ready { text: classify(text), delay: *delay },
        WidgetVariant::Canned { delay } => PendingReply::Ready { text: CANNED_SUGGESTION, delay: *delay },
    };

    SubmitPlan::Reply { user_text: text.to_string(), reply }
}

#[derive(Debug)]
pub struct ChatWidget {
    variant: WidgetVariant,
    transcript: Transcript,
    input: String,
    open: bool,
}

impl ChatWidget {
    pub fn new(variant: WidgetVariant) -> Self {
        Self {
            variant,
            transcript: Transcript::new(),
            input: String::new(),
            open: false,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Submit the current input. Returns the bot entry that was appended,
    /// or `None` when the input was blank.
    pub async fn submit(&mut self) -> Option<&TranscriptEntry> {
        let SubmitPlan::Reply { user_text, reply } = plan_submit(&self.input, &self.variant) else {
            return None;
        };

        self.transcript.append(EntryRole::User, user_text);
        self.input.clear();

        let reply_text = match (reply, &self.variant) {
            (PendingReply::Ready { text, delay }, _) => {
                tokio::time::sleep(delay).await;
                text.to_string()
            }
            (PendingReply::Relay { message }, WidgetVariant::Networked(client)) => {
                match client.send(&message).await {
                    Ok(reply) => reply,
                    Err(err) => {
                        warn!(error = %err, "relay call failed");
                        PROVIDER_FAILURE_REPLY.to_string()
                    }
                }
            }
            (PendingReply::Relay { .. }, _) => PROVIDER_FAILURE_REPLY.to_string(),
        };

        self.transcript.append(EntryRole::Bot, reply_text);
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(plan_submit("   \n\t", &WidgetVariant::local()), SubmitPlan::Ignore);
        assert_eq!(plan_submit("", &WidgetVariant::canned()), SubmitPlan::Ignore);
    }

    #[test]
    fn local_plan_trims_and_classifies() {
        let plan = plan_submit("  I like physics  ", &WidgetVariant::local());
        match plan {
            SubmitPlan::Reply { user_text, reply: PendingReply::Ready { text, delay } } => {
                assert_eq!(user_text, "I like physics");
                assert!(text.contains("Aeronautical"));
                assert_eq!(delay, LOCAL_REPLY_DELAY);
            }
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn networked_plan_forwards_trimmed_text() {
        let client = RelayClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let plan = plan_submit(" hello ", &WidgetVariant::Networked(client));
        assert_eq!(
            plan,
            SubmitPlan::Reply {
                user_text: "hello".to_string(),
                reply: PendingReply::Relay { message: "hello".to_string() },
            }
        );
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut widget = ChatWidget::new(WidgetVariant::canned());
        assert!(!widget.is_open());
        assert!(widget.toggle());
        widget.close();
        assert!(!widget.is_open());
    }
}
