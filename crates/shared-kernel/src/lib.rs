// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, FixPathsError, InfraResult,
    InfrastructureError, PresentationError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::Depth;
