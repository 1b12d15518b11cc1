// SPDX-License-Identifier: Apache-2.0

//! Result types shared between command handlers and the output layer.

use serde::Serialize;

use gitfolio_core::RepoCard;

/// Result of a `list` run: the selected cards for one account.
#[derive(Serialize)]
pub struct ListResult {
    /// The account the cards belong to.
    pub username: String,
    /// The rendered cards, in remote order.
    pub cards: Vec<RepoCard>,
}
