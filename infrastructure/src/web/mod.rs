//! **Web adapters** for the Fetcher/Cleaner
//!
//! | Adapter | Port | Key Dependency |
//! |---------|------|----------------|
//! | [`HttpDocumentSource`] | `DocumentSource` | `reqwest` |
//! | [`HtmlTextExtractor`] | `TextExtractor` | `scraper` |

mod extract;
mod fetch;

pub(crate) use fetch::error_chain;
pub use extract::{HtmlTextExtractor, html_to_text};
pub use fetch::HttpDocumentSource;
