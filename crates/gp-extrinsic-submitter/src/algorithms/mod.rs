//! # Algorithms Module
//!
//! Proxy wrapping, failure messages and lifecycle tracking.

pub mod dispatch_message;
pub mod lifecycle;
pub mod proxy;

pub use dispatch_message::{describe_failure, describe_rejection};
pub use lifecycle::LifecycleTracker;
pub use proxy::{prepare_dispatch, PreparedDispatch};
