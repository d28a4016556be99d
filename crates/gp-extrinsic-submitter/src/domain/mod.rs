//! # Domain Module
//!
//! Core domain types for extrinsic submission.

pub mod entities;
pub mod errors;
pub mod latch;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use latch::OutcomeLatch;
pub use value_objects::*;
