use movie_context::{MovieRecord, SimilarMovie};
use serde::{Deserialize, Serialize};

use crate::chat::ChatReply;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub movie: Option<MovieRecord>,
    pub similar_movies: Vec<SimilarMovie>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.reply,
            movie: reply.movie,
            similar_movies: reply.similar_movies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
