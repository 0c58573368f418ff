//! Mock movie catalog client for testing
//!
//! Provides a mock implementation of [`MovieApi`] for unit testing the
//! command layer without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::MovieApi;
use super::models::{MovieRecord, MovieSearchCriteria, NewMovie};
use crate::error::{ApiError, ApiResult};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockMovieClient::new()
///     .with_movies(vec![MovieRecord { id: 1, title: "My Movie".into(), year: 2023 }])
///     .await;
///
/// let movies = mock.search(&MovieSearchCriteria::new()).await?;
/// assert_eq!(movies.len(), 1);
/// ```
#[derive(Default)]
pub struct MockMovieClient {
    /// Movies to return from search
    movies: Arc<Mutex<Vec<MovieRecord>>>,
    /// ID to return from add
    next_id: Arc<Mutex<i64>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Search criteria received, in call order
    searches: Arc<Mutex<Vec<MovieSearchCriteria>>>,
    /// Movies submitted to add, in call order
    added: Arc<Mutex<Vec<NewMovie>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub search: usize,
    pub add: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.search + self.add
    }
}

impl MockMovieClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure movies to return from search.
    pub async fn with_movies(self, movies: Vec<MovieRecord>) -> Self {
        *self.movies.lock().await = movies;
        self
    }

    /// Configure the ID returned from add.
    pub async fn with_next_id(self, id: i64) -> Self {
        *self.next_id.lock().await = id;
        self
    }

    /// Configure an error for the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Search criteria received so far.
    pub async fn searches(&self) -> Vec<MovieSearchCriteria> {
        self.searches.lock().await.clone()
    }

    /// Movies submitted to add so far.
    pub async fn added(&self) -> Vec<NewMovie> {
        self.added.lock().await.clone()
    }

    async fn take_error(&self) -> ApiResult<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MovieApi for MockMovieClient {
    async fn search(&self, criteria: &MovieSearchCriteria) -> ApiResult<Vec<MovieRecord>> {
        self.call_count.lock().await.search += 1;
        self.searches.lock().await.push(criteria.clone());
        self.take_error().await?;
        Ok(self.movies.lock().await.clone())
    }

    async fn add(&self, title: &str, year: i32) -> ApiResult<i64> {
        self.call_count.lock().await.add += 1;
        self.added.lock().await.push(NewMovie {
            title: title.to_string(),
            year,
        });
        self.take_error().await?;
        Ok(*self.next_id.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_movies() {
        let mock = MockMovieClient::new()
            .with_movies(vec![MovieRecord {
                id: 1,
                title: "My Movie".to_string(),
                year: 2023,
            }])
            .await;

        let movies = mock.search(&MovieSearchCriteria::new()).await.unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(mock.call_counts().await.search, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockMovieClient::new()
            .with_next_id(42)
            .await
            .with_error(ApiError::authentication("error getting a token"))
            .await;

        assert!(mock.add("My Movie", 2023).await.is_err());
        assert_eq!(mock.add("My Movie", 2023).await.unwrap(), 42);
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
