//! Movie display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::MovieRecord;
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// Movie display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MovieDisplay {
    /// Movie ID
    #[tabled(rename = "ID")]
    pub id: i64,

    /// Movie title
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Release year
    #[tabled(rename = "YEAR")]
    pub year: i32,
}

impl From<MovieRecord> for MovieDisplay {
    fn from(movie: MovieRecord) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
        }
    }
}

impl Formattable for Vec<MovieDisplay> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Result of a successful `add`.
#[derive(Debug, Clone, Serialize)]
pub struct AddedMovieDisplay {
    pub id: i64,
}

impl Formattable for AddedMovieDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(format!(
                "{} Added movie {}",
                "✓".green(),
                self.id.to_string().bold()
            )),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
