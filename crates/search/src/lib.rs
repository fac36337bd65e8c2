//! Relevance search over the LineOps work-order backend.
//!
//! The crate bundles everything a front-end needs to offer a search box over
//! work orders, cars and users: the category table, the relevance scorer, a
//! clock-driven debounce primitive, credential providers and the
//! [`SearchSession`] that ties them together with a background fetch worker.

pub mod auth;
pub mod candidate;
pub mod category;
pub mod debounce;
pub mod error;
pub mod scoring;
pub mod session;
pub mod source;

pub use auth::{AuthClient, CredentialProvider, StaticToken, TokenStore};
pub use candidate::Candidate;
pub use category::{Category, CategoryFields, UnknownCategory};
pub use debounce::{DEFAULT_DEBOUNCE, DebounceDelay, Debouncer, SEARCH_DEBOUNCE};
pub use error::{FetchError, LoginError, TokenStoreError};
pub use scoring::{MAX_RESULTS, ScoredCandidate, rank, score};
pub use session::{SearchSession, SearchStatus, Selection};
pub use source::{CandidateSource, HttpCandidateSource};
