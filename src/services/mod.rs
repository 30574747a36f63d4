pub mod debounce;
pub mod live_search;
pub mod normalizer;
pub mod providers;
pub mod title_search;
