use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::movie::{MAX_SIMILAR_MOVIES, MovieRecord, ResolvedContext, SimilarMovie};
use crate::provider::MetadataProvider;

/// Resolves a search phrase into a factual movie context.
///
/// Every lookup failure is absorbed here: the only signal crossing this
/// boundary is `None`, meaning no factual context is available for the
/// request. A failed similar-titles fetch degrades to an empty list without
/// affecting the resolved record.
pub struct ContextResolver {
    provider: Arc<dyn MetadataProvider>,
}

impl ContextResolver {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self, phrase: &str) -> Option<ResolvedContext> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            debug!("empty search phrase, skipping metadata lookup");
            return None;
        }

        let hits = match self.provider.search_movies(phrase).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("movie search failed: {}", e);
                return None;
            }
        };
        // First result wins; ties between same-named films are not
        // disambiguated.
        let Some(first) = hits.into_iter().next() else {
            info!(phrase, "no movie matched the search phrase");
            return None;
        };
        info!(movie_id = first.id, title = %first.title, "matched movie");

        let details = match self.provider.movie_with_credits(first.id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(movie_id = first.id, "details fetch failed: {}", e);
                return None;
            }
        };

        let poster_url = details
            .poster_path
            .as_deref()
            .map(|path| self.provider.image_url(path));
        let movie = MovieRecord::from_details(details, poster_url);

        let similar_movies = match self.provider.similar_movies(first.id).await {
            Ok(similar) => similar
                .into_iter()
                .take(MAX_SIMILAR_MOVIES)
                .map(SimilarMovie::from)
                .collect(),
            Err(e) => {
                warn!(movie_id = first.id, "similar titles fetch failed: {}", e);
                Vec::new()
            }
        };

        Some(ResolvedContext {
            movie,
            similar_movies,
        })
    }
}
