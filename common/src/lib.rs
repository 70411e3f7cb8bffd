use serde::{Deserialize, Serialize};

/// Employment type stamped on every posting. The search query already
/// filters on full-time listings, so it is never read from the markup.
pub const FULL_TIME: &str = "Full Time";

/// One job posting scraped from a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub link: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
}

/// A country/search pair and the webhook its postings go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Indeed locale code. `None` or `"us"` means the default host.
    #[serde(default)]
    pub country: Option<String>,
    pub search_keys: Vec<String>,
    pub webhook: String,
}
