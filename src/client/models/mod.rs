//! Movie catalog API data models
//!
//! Wire types exchanged with the catalog and its token endpoint.

mod auth;
mod movie;

pub use auth::AccessToken;
pub use movie::{MovieRecord, MovieSearchCriteria, NewMovie};
