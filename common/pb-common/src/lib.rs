//! PB Common - Shared utilities for the portal search tools
//!
//! - **Initialization**: [`init_tracing`] for standardized logging setup
//! - **Errors**: [`error_chain`] for one-line user-facing error reports
//!
//! # Example
//!
//! ```rust,ignore
//! pb_common::init_tracing("pb_search", cli.verbose)?;
//!
//! if let Err(err) = run().await {
//!     eprintln!("pb-search: {}", pb_common::error_chain(err.as_ref()));
//! }
//! ```

pub mod error;
pub mod init;

pub use error::error_chain;
pub use init::{init_tracing, Verbosity};
