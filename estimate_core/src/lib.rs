//! # estimate_core - Construction Material Estimation Engine
//!
//! `estimate_core` is the computational heart of BuildCost. It turns
//! structure dimensions and a material selection into quantities and
//! costs, lets rates be edited, and keeps an in-memory registry of saved
//! projects and their bills/documents. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless math**: estimates are pure functions of their input
//! - **JSON-First**: all records implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::calculations::{calculate, Dimensions, EstimateInput};
//! use estimate_core::project::{Project, ProjectDetails, ProjectType};
//! use estimate_core::workspace::Workspace;
//!
//! let input = EstimateInput::new(Dimensions::new(20.0, 15.0, 3.0), ["Cement", "Steel"]);
//! let estimate = calculate(&input).unwrap();
//!
//! let details = ProjectDetails::new("Residential Building", ProjectType::Building, "Mumbai");
//! let mut workspace = Workspace::new();
//! workspace.save_project(Project::from_estimate(&details, &estimate));
//!
//! let json = serde_json::to_string_pretty(&workspace.projects()[0]).unwrap();
//! assert!(json.contains("Residential Building"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Dimensions, estimate formula, rate editing, cost shares
//! - [`materials`] - The fixed material reference table
//! - [`project`] - Saved estimate records
//! - [`documents`] - Bill/document metadata
//! - [`workspace`] - In-memory project and document registry
//! - [`session`] - Login/signup form validation
//! - [`settings`] - Theme, currency and environment preferences
//! - [`units`] - Unit wrappers and amount formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod documents;
pub mod errors;
pub mod materials;
pub mod project;
pub mod session;
pub mod settings;
pub mod units;
pub mod workspace;

// Re-export commonly used types at crate root for convenience
pub use errors::{EstimateError, EstimateResult};
pub use project::{Project, ProjectDetails, ProjectType};
pub use workspace::Workspace;
