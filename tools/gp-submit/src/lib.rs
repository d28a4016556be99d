//! GP-Submit: replay recorded extrinsic submissions through the submitter.

pub mod metered;
pub mod replay;
pub mod scenario;

pub use metered::MeteredObserver;
pub use replay::{describe_error_json, replay};
pub use scenario::Scenario;
