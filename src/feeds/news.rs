//! News feed types

use serde::Deserialize;

/// A crypto-news article.
///
/// Title and URL pass through verbatim; upstream order is preserved and any
/// extra per-article fields are ignored. An empty article list is a valid
/// fetch result, indistinguishable from a failed fetch at the data level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}
