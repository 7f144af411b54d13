//! HTTP client for the apifootball.com v3 API.
//!
//! [`ApiFootballClient`] offers a fallible [`ApiFootballClient::try_fetch`] and implements the
//! [`football::ports::FootballUpstream`] port, where every failure is logged
//! and turned into an empty list.

mod client;
mod error;

pub use client::{ApiFootballClient, Action};
pub use error::UpstreamError;
