//! Display model implementations for table and JSON output

mod movie;

pub use movie::{AddedMovieDisplay, MovieDisplay};
