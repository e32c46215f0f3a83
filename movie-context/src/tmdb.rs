use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{MetadataError, Result};
use crate::provider::{MetadataProvider, MovieDetails, MovieHit, SimilarHit};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

/// Poster base at the fixed w500 width.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MovieHit>,
}

#[derive(Debug, Deserialize)]
struct SimilarResponse {
    #[serde(default)]
    results: Vec<SimilarHit>,
}

/// TMDB-backed [`MetadataProvider`].
///
/// Base URLs are fixed at construction; tests point them at a local mock.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    image_base: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_urls(api_key, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE)
    }

    pub fn with_base_urls(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        image_base: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into(),
            image_base: image_base.into(),
        }
    }

    async fn get_json<T>(&self, endpoint: &'static str, url: String) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(MetadataError::Status {
                endpoint,
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieHit>> {
        debug!(query, "searching TMDB");
        let url = format!(
            "{}/search/movie?api_key={}&query={}&include_adult=false",
            self.api_base,
            self.api_key,
            urlencoding::encode(query)
        );
        let body: SearchResponse = self.get_json("search/movie", url).await?;
        Ok(body.results)
    }

    async fn movie_with_credits(&self, movie_id: i64) -> Result<MovieDetails> {
        debug!(movie_id, "fetching TMDB details and credits");
        let url = format!(
            "{}/movie/{}?api_key={}&append_to_response=credits",
            self.api_base, movie_id, self.api_key
        );
        self.get_json("movie", url).await
    }

    async fn similar_movies(&self, movie_id: i64) -> Result<Vec<SimilarHit>> {
        debug!(movie_id, "fetching TMDB similar titles");
        let url = format!(
            "{}/movie/{}/similar?api_key={}",
            self.api_base, movie_id, self.api_key
        );
        let body: SimilarResponse = self.get_json("movie/similar", url).await?;
        Ok(body.results)
    }

    fn image_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base, poster_path)
    }
}
