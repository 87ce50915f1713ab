//! Prospect Domain Layer
//!
//! This crate contains the domain model for Prospect's market analysis.
//! It has ZERO external dependencies and defines the entity types produced by
//! the analyzer along with the trait interfaces that the other layers depend
//! upon.
//!
//! ## Key Concepts
//!
//! - **Competitor**: A company competing with the analyzed product
//! - **Application**: A market the product can be applied to
//! - **CustomerPersona**: A buyer archetype, enriched with potential customers
//!   and outreach templates
//! - **AnalysisResult**: The three entity lists plus the prompt and raw
//!   response they were extracted from
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Entities can only be built through validating constructors, so a
//!   partially populated entity is never observable
//! - Infrastructure (text generation, parsing, presentation) lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod application;
pub mod competitor;
pub mod error;
pub mod persona;
pub mod traits;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use application::Application;
pub use competitor::Competitor;
pub use error::MissingField;
pub use persona::{CustomerPersona, EmailTemplates};
