// SPDX-License-Identifier: GPL-3.0-or-later

//! Comic Vine API client for fetching comic book metadata.
//!
//! This crate provides a client for interacting with the Comic Vine API,
//! including character/issue/volume/publisher/creator search and lookup
//! functionality with built-in rate limiting to comply with Comic Vine
//! API usage guidelines.

pub mod client;
pub mod error;
pub mod models;
pub mod rate_limiter;
pub mod response;

pub use client::ComicVineClient;
pub use error::{ComicVineError, Result};
pub use models::{ApiResponse, Character, Creator, Issue, IssueQuery, Publisher, Volume};
pub use response::{format_response, validate_response};
