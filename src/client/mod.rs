//! Movie catalog API client

use async_trait::async_trait;

use crate::error::ApiResult;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod movies;
pub mod token;

#[cfg(test)]
pub use mock::MockMovieClient;
pub use models::{AccessToken, MovieRecord, MovieSearchCriteria, NewMovie};
pub use movies::{MovieClient, parse_base_url};
pub use token::{ClientCredentials, TokenCache};

/// Movie catalog operations.
///
/// Implementations authenticate each call themselves; errors are returned
/// unchanged so the command layer can wrap them.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Search the catalog, sending only the filters that are set
    async fn search(&self, criteria: &MovieSearchCriteria) -> ApiResult<Vec<MovieRecord>>;

    /// Create a movie and return its server-assigned ID
    async fn add(&self, title: &str, year: i32) -> ApiResult<i64>;
}
