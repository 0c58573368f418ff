//! Movie models

use serde::{Deserialize, Serialize};

/// Movie resource as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Server-assigned movie ID
    pub id: i64,

    /// Movie title
    pub title: String,

    /// Release year
    pub year: i32,
}

/// Request body for creating a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
}

/// Optional filters for a movie search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSearchCriteria {
    /// Match on title (sent verbatim)
    pub title: Option<String>,

    /// Match on release year
    pub year: Option<i32>,
}

impl MovieSearchCriteria {
    /// Create criteria with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Filter by year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Query parameters for the present filters, `title` before `year`.
    ///
    /// Absent filters produce no pair at all.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref title) = self.title {
            params.push(("title", title.clone()));
        }
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }

        params
    }
}
