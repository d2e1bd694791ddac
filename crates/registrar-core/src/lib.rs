//! registrar-core — Enrollment and academic-record engine.
//!
//! This crate defines the domain model (students, instructors, courses,
//! enrollments), the keyed stores, the enrollment policy with its
//! duplicate and credit-limit rules, and the GPA/transcript derivations
//! that the rest of the registrar system builds on.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod grade;
pub mod model;
pub mod registry;
pub mod transcript;

pub use catalog::CourseCatalog;
pub use directory::StudentDirectory;
pub use error::RegistryError;
pub use grade::Grade;
pub use registry::{Registry, MAX_CREDITS};
