//! Cross-checks against the `image` crate's optimized 3×3 filter.

pub mod library;

pub use library::{compare_with_library, library_filter3x3, ReferenceDiff};
