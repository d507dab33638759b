// ABOUTME: Public library API for coursepress Canvas publishing
// ABOUTME: Re-exports core modules for external use

pub mod api;
pub mod auth;
pub mod cli;
pub mod error;
pub mod extract;
pub mod format;
pub mod lookup;
pub mod model;
pub mod publish;
pub mod transform;
pub mod util;

pub use error::{Error, Result};
pub use model::{Module, ModuleItem, Page};
pub use publish::{PublishOutcome, PublishRequest};
