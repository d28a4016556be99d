//! # Governance Portal Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Lifecycle tracker throughput
//! └── src/integration/  # Submitter end-to-end flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gp-tests
//! cargo bench -p gp-tests
//! ```
