pub mod chat;
pub mod completion;
pub mod models;
pub mod service;

pub use chat::{ChatError, ChatReply, ChatService, SYSTEM_INSTRUCTION};
pub use completion::CompletionClient;
pub use models::{ChatRequest, ChatResponse};
pub use service::{AppState, build_router, create_app};
