//! Movie command implementations
//!
//! Commands validate their input, delegate to a [`MovieApi`], and wrap any
//! client failure in a single command-level error that keeps the client
//! as its source.

use log::debug;

use crate::cli::GlobalOptions;
use crate::client::{MovieApi, MovieRecord, MovieSearchCriteria};
use crate::error::{Error, Result};
use crate::models::{AddedMovieDisplay, MovieDisplay};
use crate::output;

const SEARCH_ERROR: &str = "An error occurred searching for movies";
const ADD_ERROR: &str = "An error occurred adding the movie";

/// Search the catalog with optional title/year filters
#[derive(Debug, Clone, Default)]
pub struct SearchMoviesCommand {
    pub title: Option<String>,
    pub year: Option<i32>,
}

impl SearchMoviesCommand {
    pub async fn handle<C: MovieApi + ?Sized>(&self, client: &C) -> Result<Vec<MovieRecord>> {
        let mut criteria = MovieSearchCriteria::new();
        if let Some(title) = &self.title {
            criteria = criteria.title(title.as_str());
        }
        if let Some(year) = self.year {
            criteria = criteria.year(year);
        }

        client
            .search(&criteria)
            .await
            .map_err(|source| Error::Command {
                message: SEARCH_ERROR,
                source,
            })
    }
}

/// Add a movie to the catalog
#[derive(Debug, Clone)]
pub struct AddMovieCommand {
    pub title: String,
    pub year: i32,
}

impl AddMovieCommand {
    /// Reject input the catalog must never see
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Movie must have a name"));
        }
        if self.year <= 0 {
            return Err(Error::Validation("Movie must have a positive year"));
        }
        Ok(())
    }

    pub async fn handle<C: MovieApi + ?Sized>(&self, client: &C) -> Result<i64> {
        self.validate()?;

        client
            .add(&self.title, self.year)
            .await
            .map_err(|source| Error::Command {
                message: ADD_ERROR,
                source,
            })
    }
}

/// Run the search command
pub async fn search(opts: &GlobalOptions, title: Option<String>, year: Option<i32>) -> Result<()> {
    let ctx = super::CommandContext::new(opts)?;
    debug!("Searching catalog at {:?}", ctx.config.base_url);

    let movies = SearchMoviesCommand { title, year }.handle(&ctx.client).await?;
    debug!("Search returned {} movies", movies.len());

    let display: Vec<MovieDisplay> = movies.into_iter().map(MovieDisplay::from).collect();
    output::print(&display, ctx.format)
}

/// Run the add command
pub async fn add(opts: &GlobalOptions, title: String, year: i32) -> Result<()> {
    let command = AddMovieCommand { title, year };
    // Reject bad input before touching config or the network; handle() checks again
    command.validate()?;

    let ctx = super::CommandContext::new(opts)?;
    debug!("Adding movie to catalog at {:?}", ctx.config.base_url);
    let id = command.handle(&ctx.client).await?;

    output::print(&AddedMovieDisplay { id }, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockMovieClient;
    use crate::error::ApiError;
    use std::error::Error as _;

    fn movie() -> MovieRecord {
        MovieRecord {
            id: 1,
            title: "My Movie".to_string(),
            year: 2023,
        }
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title() {
        for title in ["", "   "] {
            let client = MockMovieClient::new();
            let command = AddMovieCommand {
                title: title.to_string(),
                year: 2023,
            };

            let err = command.handle(&client).await.unwrap_err();

            assert_eq!(err.to_string(), "Movie must have a name");
            assert_eq!(client.call_counts().await.total(), 0);
        }
    }

    #[tokio::test]
    async fn test_add_rejects_non_positive_year() {
        for year in [-10, 0] {
            let client = MockMovieClient::new();
            let command = AddMovieCommand {
                title: "My Movie".to_string(),
                year,
            };

            let err = command.handle(&client).await.unwrap_err();

            assert!(matches!(err, Error::Validation("Movie must have a positive year")));
            assert_eq!(client.call_counts().await.add, 0);
        }
    }

    #[tokio::test]
    async fn test_add_wraps_client_failure() {
        let client = MockMovieClient::new()
            .with_error(ApiError::remote_call("failed to add movie"))
            .await;
        let command = AddMovieCommand {
            title: "My Movie".to_string(),
            year: 2023,
        };

        let err = command.handle(&client).await.unwrap_err();

        assert_eq!(err.to_string(), "An error occurred adding the movie");
        assert_eq!(err.source().unwrap().to_string(), "failed to add movie");
    }

    #[tokio::test]
    async fn test_add_returns_new_id() {
        let client = MockMovieClient::new().with_next_id(42).await;
        let command = AddMovieCommand {
            title: "My Movie".to_string(),
            year: 2023,
        };

        let id = command.handle(&client).await.unwrap();

        assert_eq!(id, 42);
        let added = client.added().await;
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].title, "My Movie");
        assert_eq!(added[0].year, 2023);
    }

    #[tokio::test]
    async fn test_search_wraps_client_failure() {
        let client = MockMovieClient::new()
            .with_error(ApiError::authentication("error getting a token"))
            .await;

        let err = SearchMoviesCommand::default()
            .handle(&client)
            .await
            .unwrap_err();

        match err {
            Error::Command { message, source } => {
                assert_eq!(message, "An error occurred searching for movies");
                assert!(matches!(source, ApiError::Authentication { .. }));
            }
            other => panic!("Expected Error::Command, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_passes_filters_through() {
        let cases = [
            (None, None),
            (Some("My Movie"), None),
            (None, Some(2023)),
            (Some("My Movie"), Some(2023)),
        ];

        for (title, year) in cases {
            let client = MockMovieClient::new().with_movies(vec![movie()]).await;
            let command = SearchMoviesCommand {
                title: title.map(str::to_string),
                year,
            };

            let movies = command.handle(&client).await.unwrap();

            assert_eq!(movies.len(), 1);
            let searches = client.searches().await;
            assert_eq!(searches[0].title.as_deref(), title);
            assert_eq!(searches[0].year, year);
        }
    }
}
