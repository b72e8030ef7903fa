// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComicVineError>;

#[derive(Debug, Error)]
pub enum ComicVineError {
    /// Transport-level failure: connection error, non-success HTTP status,
    /// or a body that could not be decoded as JSON.
    #[error("API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The response decoded, but not into the shape the endpoint promises.
    #[error("invalid response from Comic Vine API: {0}")]
    InvalidResponse(String),

    /// Comic Vine rejected the credential supplied at construction.
    #[error("invalid Comic Vine API key")]
    InvalidApiKey,
}
