//! Domain layer for the upcase chat service.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod transformer;
pub mod value_object;

pub use transformer::{MessageTransformer, UppercaseTransformer};
pub use value_object::Message;
