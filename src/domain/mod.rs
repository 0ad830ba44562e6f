//! Domain models and types for the seeder.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`StudentId`], [`Branch`])
//! - **Domain models** ([`StudentRecord`])
//! - **Error types** ([`SeederError`], [`CosmosDbError`])
//! - **Result type alias** ([`Result`])
//!
//! # Builder Pattern
//!
//! ```rust
//! use student_seeder::domain::StudentRecordBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let student = StudentRecordBuilder::new()
//!     .name("Neha Gupta")
//!     .branch("CSE")?
//!     .roll_number("2024004")
//!     .email("neha.gupta@university.edu")
//!     .semester(4)
//!     .gpa(3.95)
//!     .phone("+91-9876543213")
//!     .address("Pune, India")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod student;

pub use errors::{CosmosDbError, SeederError};
pub use ids::{Branch, StudentId};
pub use result::Result;
pub use student::{StudentRecord, StudentRecordBuilder};
