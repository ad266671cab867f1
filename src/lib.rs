//! Natural-language search interpretation for the Gojo rental marketplace.
//!
//! A free-text query such as "2 bedroom apartment in Bole under 25,000 ETB"
//! becomes a validated [`SearchFilters`] value, either through a remote chat
//! completion endpoint or the deterministic local extractor.

pub mod error;
pub mod interpreters;
pub mod listings;
pub mod models;
pub mod session;
pub mod suggestions;

pub use error::InterpretError;
pub use interpreters::{extract_locally, validate, Interpreter, InterpreterConfig};
pub use models::{InterpretationResult, LocationData, Property, PropertyType, SearchFilters};
