// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides the anonymous repository listing client. No authentication is
//! used; requests run against the remote's anonymous rate limits.

pub mod repos;

/// User-Agent sent with every API request. GitHub rejects anonymous requests
/// without one.
pub const USER_AGENT_VALUE: &str = concat!("gitfolio/", env!("CARGO_PKG_VERSION"));
