//! Sample data seeding
//!
//! - [`roster`] - The fixed five-student roster
//! - [`seeder`] - Sequential insert-then-list procedure
//! - [`report`] - Per-record outcomes and console rendering

pub mod report;
pub mod roster;
pub mod seeder;

pub use report::{render_listing, render_seed_report, InsertOutcome, InsertStatus, SeedReport};
pub use roster::sample_students;
pub use seeder::{list_students, seed, seed_students, SELECT_ALL};
