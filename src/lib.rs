// SPDX-License-Identifier: Apache-2.0

//! Minimal client for sending GraphQL documents to the GitHub API.
//!
//! ```no_run
//! # async fn example() -> githubgql::Result<()> {
//! let token = std::env::var("GITHUB_TOKEN").ok();
//! let response = githubgql::request("query { viewer { login } }", token.as_deref()).await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod authentication;
pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::{request, GraphqlClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
