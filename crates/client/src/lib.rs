//! Client code for efficient-search.
//!
//! This crate provides the Google Programmable Search client and the
//! enrichment step that turns its raw responses into model-friendly results.

pub mod enrich;
pub mod google;

pub use enrich::{clean_snippet, clean_title, enrich_results, format_thousands, generate_summary};
pub use google::{
    GoogleClient, GoogleConfig, GoogleError, GoogleSearchItem, GoogleSearchResponse, PageMap, SafeSearch,
    SearchInformation, SearchProvider, SearchRequest,
};
