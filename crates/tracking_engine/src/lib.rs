//! Tracking engine: the HTTP client for the tracking endpoint and the background
//! runtime that executes lookups.
mod engine;
mod fetch;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{
    tracking_url, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL, DEFAULT_SEARCH_TYPE,
    TRACKING_PATH,
};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, SearchId};
