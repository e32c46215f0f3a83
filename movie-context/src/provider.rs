use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One candidate from a title search, in provider relevance order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieHit {
    pub id: i64,
    pub title: String,
}

/// Full details for a matched title, credits included.
///
/// Every field the provider may omit defaults to its empty form so a sparse
/// response still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreEntry>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub credits: Credits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreEntry {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

/// One entry from a similar-titles lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarHit {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Read-only movie metadata source.
///
/// All three lookups are idempotent. An empty search result is a miss, not
/// an error; errors are reserved for transport and decode failures.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Title search returning ranked candidates.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieHit>>;

    /// Details and credit listing for one title, fetched in a single call.
    async fn movie_with_credits(&self, movie_id: i64) -> Result<MovieDetails>;

    /// Titles the provider considers similar, in its ranking order.
    async fn similar_movies(&self, movie_id: i64) -> Result<Vec<SimilarHit>>;

    /// Absolute image URL for a provider-relative poster path.
    fn image_url(&self, poster_path: &str) -> String;
}
