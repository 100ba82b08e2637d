//! Error definition model for errgen.
//!
//! An [`ErrorArgs`] is bound positionally from the command line; once the
//! target package is known it becomes an [`ErrorDefinition`], the single
//! record the code generators render.

mod args;
mod definition;
mod error;
mod locale;

pub use args::{ErrorArgs, USAGE};
pub use definition::ErrorDefinition;
pub use error::{Error, Result};
pub use locale::Locale;
