//! Document domain
//!
//! Value objects for the fetched document and the pure text normalization
//! applied after markup has been linearized.

pub mod normalize;
pub mod text;
pub mod url;

pub use normalize::normalize_text;
pub use text::{DocumentText, PREVIEW_CHAR_LIMIT, PREVIEW_MARKER};
pub use url::DocumentUrl;
