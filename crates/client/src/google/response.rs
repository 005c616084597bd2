//! Custom Search API response types.
//!
//! Only the fields the enricher reads are modeled; everything else in the
//! payload is ignored. Fields read through [`lenient`] fall back to their
//! default when null or of the wrong type, so one odd item never fails the
//! whole response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw response from the Custom Search JSON API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSearchResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub search_information: SearchInformation,
    /// Absent when the query matched nothing. Entries that are not objects are dropped.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<GoogleSearchItem>,
}

/// Timing and total-count block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInformation {
    #[serde(default, deserialize_with = "lenient")]
    pub search_time: f64,
    /// Total match estimate as text, e.g. "1000" or "1,000".
    #[serde(default = "default_total_results", deserialize_with = "lenient")]
    pub total_results: String,
}

fn default_total_results() -> String {
    "0".into()
}

impl Default for SearchInformation {
    fn default() -> Self {
        Self { search_time: 0.0, total_results: default_total_results() }
    }
}

/// A single search hit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSearchItem {
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient")]
    pub display_link: String,
    #[serde(default, deserialize_with = "lenient")]
    pub snippet: String,
    #[serde(default, deserialize_with = "lenient")]
    pub pagemap: Option<PageMap>,
}

/// Structured data Google extracted from the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMap {
    /// Tag name to value. Values are almost always strings; anything else is ignored on read.
    #[serde(default, deserialize_with = "lenient")]
    pub metatags: Vec<HashMap<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub cse_thumbnail: Vec<ImageRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub cse_image: Vec<ImageRef>,
}

/// Image reference inside a pagemap.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default, deserialize_with = "lenient")]
    pub src: Option<String>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl GoogleSearchItem {
    /// First metatags block, if any.
    pub fn metatags(&self) -> Option<&HashMap<String, Value>> {
        self.pagemap.as_ref().and_then(|p| p.metatags.first())
    }

    /// Thumbnail source, falling back to the generic page image.
    pub fn thumbnail(&self) -> Option<&str> {
        let pagemap = self.pagemap.as_ref()?;
        first_src(&pagemap.cse_thumbnail).or_else(|| first_src(&pagemap.cse_image))
    }
}

fn first_src(images: &[ImageRef]) -> Option<&str> {
    images.first().and_then(|i| i.src.as_deref()).filter(|s| !s.is_empty())
}

/// Read any JSON value, keeping `T` if it fits and `T::default()` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<GoogleSearchItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = lenient(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match GoogleSearchItem::deserialize(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed search item");
                None
            }
        })
        .collect())
}
