use serde::{Deserialize, Serialize};

use crate::provider::{MovieDetails, SimilarHit};

/// Cast names kept on a normalized record.
pub const MAX_TOP_CAST: usize = 5;

/// Similar titles kept per resolution.
pub const MAX_SIMILAR_MOVIES: usize = 6;

/// Year sentinel for titles without a usable release date.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Normalized result of a successful metadata lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub title: String,
    pub release_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    pub genres: Vec<String>,
    pub top_cast: Vec<String>,
    pub overview: String,
    pub poster_url: Option<String>,
}

impl MovieRecord {
    /// Builds the record from provider details. The poster URL is resolved
    /// by the caller since only the provider knows its image base.
    pub fn from_details(details: MovieDetails, poster_url: Option<String>) -> Self {
        let release_year = release_year(details.release_date.as_deref());
        let director = details
            .credits
            .crew
            .into_iter()
            .find(|member| member.job == "Director")
            .map(|member| member.name);
        let genres = details.genres.into_iter().map(|genre| genre.name).collect();
        let top_cast = details
            .credits
            .cast
            .into_iter()
            .take(MAX_TOP_CAST)
            .map(|member| member.name)
            .collect();

        Self {
            title: details.title,
            release_year,
            director,
            genres,
            top_cast,
            overview: details.overview.unwrap_or_default(),
            poster_url,
        }
    }
}

/// Lightweight sibling record for a similar title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarMovie {
    pub id: i64,
    pub title: String,
    pub release_year: String,
}

impl From<SimilarHit> for SimilarMovie {
    fn from(hit: SimilarHit) -> Self {
        Self {
            id: hit.id,
            title: hit.title,
            release_year: release_year(hit.release_date.as_deref()),
        }
    }
}

/// A resolved movie plus its similar titles, ready to render for the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContext {
    pub movie: MovieRecord,
    pub similar_movies: Vec<SimilarMovie>,
}

impl ResolvedContext {
    /// Renders the factual context block injected into the LLM prompt.
    ///
    /// Field order is fixed; absent or empty fields produce no line at all.
    /// The block is prompt material only and is never parsed back.
    pub fn context_block(&self) -> String {
        let movie = &self.movie;
        let mut block = String::from("MOVIE FACTS FROM TMDB\n");
        block.push_str(&format!("Title: {}\n", movie.title));
        block.push_str(&format!("Year: {}\n", movie.release_year));
        if let Some(director) = &movie.director {
            block.push_str(&format!("Director: {}\n", director));
        }
        if !movie.genres.is_empty() {
            block.push_str(&format!("Genres: {}\n", movie.genres.join(", ")));
        }
        if !movie.top_cast.is_empty() {
            block.push_str(&format!("Top cast: {}\n", movie.top_cast.join(", ")));
        }
        if !movie.overview.is_empty() {
            block.push_str(&format!("Overview: {}\n", movie.overview));
        }
        if !self.similar_movies.is_empty() {
            let similar = self
                .similar_movies
                .iter()
                .map(|m| format!("{} ({})", m.title, m.release_year))
                .collect::<Vec<_>>()
                .join(", ");
            block.push_str(&format!("Similar movies: {}\n", similar));
        }
        block
    }
}

/// First four characters of the release date, or the sentinel when the
/// provider sent no date. An empty string counts as no date.
pub(crate) fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => UNKNOWN_YEAR.to_string(),
    }
}
