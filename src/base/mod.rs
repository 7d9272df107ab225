//! Base types and error handling.
//!
//! - [`LookupError`]: failures reported by platform resolvers
//! - [`LookupResultExt`]: attaches the looked-up name to raw resolver errors

pub mod context;
pub mod lookuperror;

pub use context::LookupResultExt;
pub use lookuperror::LookupError;
