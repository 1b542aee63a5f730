//! Browser utility modules.
//!
//! - [`dom`] - console logging and page helpers

pub mod dom;
