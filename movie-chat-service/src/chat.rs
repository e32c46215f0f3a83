use movie_context::{ContextResolver, MovieRecord, QueryExtractor, SimilarMovie};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::info;

use crate::completion::CompletionClient;

/// Leading system instruction for every completion request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a Hollywood movie assistant. Use provided factual data. Do not hallucinate.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("completion failed: {0}")]
    Completion(String),
}

/// Structured reply handed back to the routing layer.
#[derive(Debug)]
pub struct ChatReply {
    pub reply: String,
    pub movie: Option<MovieRecord>,
    pub similar_movies: Vec<SimilarMovie>,
}

/// Per-request pipeline: validate, extract a search phrase, resolve factual
/// context, assemble the prompt and call the LLM.
///
/// The resolver is optional: without a metadata credential the service runs
/// LLM-only and never issues a lookup.
pub struct ChatService {
    extractor: QueryExtractor,
    resolver: Option<ContextResolver>,
    completion: CompletionClient,
}

impl ChatService {
    pub fn new(
        extractor: QueryExtractor,
        resolver: Option<ContextResolver>,
        completion: CompletionClient,
    ) -> Self {
        Self {
            extractor,
            resolver,
            completion,
        }
    }

    pub async fn handle_message(&self, message: &str) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let phrase = self.extractor.extract(message);

        let context = match &self.resolver {
            Some(resolver) => resolver.resolve(&phrase).await,
            None => None,
        };
        match &context {
            Some(resolved) => info!(title = %resolved.movie.title, "answering with factual context"),
            None => info!("answering without factual context"),
        }

        let block = context.as_ref().map(|resolved| resolved.context_block());
        let messages = build_messages(block.as_deref(), message);
        let reply = self
            .completion
            .complete(messages)
            .await
            .map_err(|e| ChatError::Completion(format!("LLM chat failed: {}", e)))?;

        let (movie, similar_movies) = match context {
            Some(resolved) => (Some(resolved.movie), resolved.similar_movies),
            None => (None, Vec::new()),
        };

        Ok(ChatReply {
            reply,
            movie,
            similar_movies,
        })
    }
}

/// Ordered role-tagged message list: the fixed system instruction, the
/// factual context block as a second system message when present, then the
/// user's message.
fn build_messages(context_block: Option<&str>, user_message: &str) -> Vec<Value> {
    let mut messages = vec![json!({
        "role": "system",
        "content": SYSTEM_INSTRUCTION,
    })];

    if let Some(block) = context_block {
        messages.push(json!({
            "role": "system",
            "content": block,
        }));
    }

    messages.push(json!({
        "role": "user",
        "content": user_message,
    }));

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_call() {
        let service = ChatService::new(
            QueryExtractor::new(),
            None,
            CompletionClient::with_api_url("unused", "http://127.0.0.1:9/unreachable"),
        );

        assert!(matches!(
            service.handle_message("   ").await,
            Err(ChatError::EmptyMessage)
        ));
    }

    #[test]
    fn messages_carry_context_as_second_system_entry() {
        let messages = build_messages(Some("MOVIE FACTS FROM TMDB\nTitle: Heat\n"), "plot of Heat");

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_INSTRUCTION);
        assert_eq!(messages[1]["role"], "system");
        assert_eq!(
            messages[1]["content"],
            "MOVIE FACTS FROM TMDB\nTitle: Heat\n"
        );
        assert_eq!(messages[2]["role"], "user");
        assert_eq!(messages[2]["content"], "plot of Heat");
    }

    #[test]
    fn messages_without_context_hold_only_system_and_user() {
        let messages = build_messages(None, "hello there");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "hello there");
    }
}
