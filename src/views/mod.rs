//! Display-ready view models
//!
//! Handlers turn provider data into these structures; the browser renders
//! them as-is. Nothing here talks to the provider.

pub mod search;
pub mod show;
pub mod streaming;
pub mod utils;

pub use search::{SearchPageView, SearchStatus, ShowCardView};
pub use show::{ShowDetailsView, ShowPageView};
pub use streaming::{StreamingOptionCardView, StreamingOptionsView};
