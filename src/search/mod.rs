//! Search requests, responses, and orchestration.
//!
//! This module is the public entry point of the retrieval core. A
//! [`SearchRequest`] is validated, dispatched to the semantic and/or
//! keyword scoring paths according to its [`SearchType`], and the scored
//! candidates are ranked into a [`SearchResponse`].

pub mod request;
pub mod response;
pub mod service;

pub use request::{DEFAULT_MAX_RESULTS, SearchFilters, SearchRequest, SearchType};
pub use response::{MatchType, SearchResponse, SearchResult};
pub use service::{SearchConfig, SearchService};
