//! Custom Search request types and validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GoogleError;

/// Highest `start` the API accepts; it never returns results past 100.
const MAX_START: u8 = 91;

/// Search parameters for the Custom Search JSON API.
///
/// Credentials (`key`, `cx`) are added by the client when the request is sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct SearchRequest {
    /// Search query (required).
    pub q: String,

    /// Number of results (1-10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u8>,

    /// 1-based index of the first result (1-91).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u8>,

    /// Safe search level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<SafeSearch>,

    /// Geolocation of the end user (country code, e.g., "us").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,

    /// Language restriction (e.g., "lang_en").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lr: Option<String>,
}

/// Safe search filtering levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Off,
    Medium,
    High,
}

impl FromStr for SafeSearch {
    type Err = GoogleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(SafeSearch::Off),
            "medium" => Ok(SafeSearch::Medium),
            "high" => Ok(SafeSearch::High),
            other => Err(GoogleError::InvalidSafeSearch(other.to_string())),
        }
    }
}

impl SearchRequest {
    /// Request for `q` with every option left to the API defaults.
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into(), ..Default::default() }
    }

    /// Validate the search request parameters.
    ///
    /// Returns an error if any parameters are out of range or malformed.
    pub fn validate(&self) -> Result<(), GoogleError> {
        if self.q.trim().is_empty() {
            return Err(GoogleError::InvalidQuery("query cannot be empty".to_string()));
        }

        if let Some(num) = self.num
            && !(1..=10).contains(&num)
        {
            return Err(GoogleError::InvalidNum);
        }

        if let Some(start) = self.start
            && !(1..=MAX_START).contains(&start)
        {
            return Err(GoogleError::InvalidStart);
        }

        Ok(())
    }

    /// Effective result count (default 10).
    pub fn get_num(&self) -> u8 {
        self.num.unwrap_or(10)
    }
}
