//! Movie catalog client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::token::TOKEN_PATH;
use super::{ClientCredentials, MovieApi, MovieRecord, MovieSearchCriteria, NewMovie, TokenCache};
use crate::error::{ApiError, ApiResult, ConfigError, Result};

/// Path of the movie collection, relative to the API base URL
pub const MOVIES_PATH: &str = "/api/movies";

const SEARCH_FAILED: &str = "failed to search for movies";
const SEARCH_DECODE_FAILED: &str = "failed to deserialize movies";
const ADD_FAILED: &str = "failed to add movie";
const ADD_DECODE_FAILED: &str = "failed to deserialize movie";

/// Parse an API base URL, accepting only absolute http(s) URLs
pub fn parse_base_url(base_url: &str) -> std::result::Result<Url, ConfigError> {
    let url = Url::parse(base_url).map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(ConfigError::InvalidBaseUrl(base_url.to_string())),
    }
}

/// Movie catalog API client.
///
/// Every call asks the shared [`TokenCache`] for a bearer token first, so
/// callers never deal with authentication.
pub struct MovieClient {
    http: HttpClient,
    movies_url: Url,
    tokens: TokenCache,
}

impl MovieClient {
    /// Create a new client for the catalog at `base_url`
    pub fn new(base_url: &str, credentials: ClientCredentials) -> Result<Self> {
        let base = parse_base_url(base_url)?;
        let endpoint = |path: &str| {
            base.join(path)
                .map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))
        };
        let movies_url = endpoint(MOVIES_PATH)?;
        let token_url = endpoint(TOKEN_PATH)?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            tokens: TokenCache::new(http.clone(), token_url, credentials),
            http,
            movies_url,
        })
    }

    /// Token cache backing this client
    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// URL for a search, carrying only the filters that are present
    fn search_url(&self, criteria: &MovieSearchCriteria) -> Url {
        let mut url = self.movies_url.clone();
        let params = criteria.to_query_params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }

    /// Attach a bearer token to the request and send it
    async fn send_authorized(&self, request: RequestBuilder) -> ApiResult<Response> {
        let token = self.tokens.get_token().await?;

        let response = request
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        debug!("{} {}", response.status(), response.url());
        Ok(response)
    }
}

/// Decode a JSON body, reporting any failure as a remote-call error
async fn read_json<T: DeserializeOwned>(response: Response, reason: &'static str) -> ApiResult<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::RemoteCall {
        reason,
        source: Some(e),
    })
}

#[async_trait]
impl MovieApi for MovieClient {
    async fn search(&self, criteria: &MovieSearchCriteria) -> ApiResult<Vec<MovieRecord>> {
        let url = self.search_url(criteria);
        debug!("Searching movies: {}", url);

        let response = self.send_authorized(self.http.get(url)).await?;
        if !response.status().is_success() {
            return Err(ApiError::remote_call(SEARCH_FAILED));
        }

        read_json(response, SEARCH_DECODE_FAILED).await
    }

    async fn add(&self, title: &str, year: i32) -> ApiResult<i64> {
        let body = NewMovie {
            title: title.to_string(),
            year,
        };
        debug!("Adding movie '{}' ({})", body.title, body.year);

        let request = self.http.post(self.movies_url.clone()).json(&body);
        let response = self.send_authorized(request).await?;
        if !response.status().is_success() {
            return Err(ApiError::remote_call(ADD_FAILED));
        }

        let movie: MovieRecord = read_json(response, ADD_DECODE_FAILED).await?;
        Ok(movie.id)
    }
}
