pub mod error;
pub mod movie;
pub mod provider;
pub mod query;
pub mod resolver;
pub mod tmdb;

// Re-export commonly used types
pub use error::{MetadataError, Result};
pub use movie::{
    MAX_SIMILAR_MOVIES, MAX_TOP_CAST, MovieRecord, ResolvedContext, SimilarMovie, UNKNOWN_YEAR,
};
pub use provider::{
    CastMember, Credits, CrewMember, GenreEntry, MetadataProvider, MovieDetails, MovieHit,
    SimilarHit,
};
pub use query::{DEFAULT_LEAD_INS, QueryExtractor};
pub use resolver::ContextResolver;
pub use tmdb::TmdbClient;
