//! Authentication models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token issued by the client-credentials grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque token string sent as `Authorization: Bearer <token>`
    pub token: String,

    /// Absolute expiry instant
    pub expiry: DateTime<Utc>,
}

impl AccessToken {
    /// A token is usable strictly before its expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expiry
    }
}
