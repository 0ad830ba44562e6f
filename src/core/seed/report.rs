//! Seeding report and console rendering
//!
//! The report is plain data; rendering writes the console listing to any
//! `io::Write` so the exact output can be checked in tests.

use crate::domain::{Branch, StudentId, StudentRecord};
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::time::Duration;

const RULE_WIDTH: usize = 60;

/// What happened to one insert attempt
#[derive(Debug, Clone, PartialEq)]
pub enum InsertStatus {
    /// The store accepted the document
    Inserted,

    /// The store rejected the document; carries the error message
    Failed(String),
}

/// Per-record insert outcome
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// Student name
    pub name: String,

    /// Student branch (partition key)
    pub branch: Branch,

    /// Document id that was sent
    pub id: StudentId,

    /// Result of the create call
    pub status: InsertStatus,
}

impl InsertOutcome {
    pub(crate) fn new(student: &StudentRecord, status: InsertStatus) -> Self {
        Self {
            name: student.name.clone(),
            branch: student.branch.clone(),
            id: student.id.clone(),
            status,
        }
    }

    /// Whether the insert succeeded
    pub fn is_inserted(&self) -> bool {
        self.status == InsertStatus::Inserted
    }
}

/// Result of one seeding run
#[derive(Debug, Clone)]
pub struct SeedReport {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// How long inserts and listing took
    pub duration: Duration,

    /// One entry per attempted insert, in attempt order
    pub outcomes: Vec<InsertOutcome>,

    /// Full container listing read after the inserts, or the query error
    pub listing: Result<Vec<StudentRecord>, String>,
}

impl SeedReport {
    /// Number of attempted inserts
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of successful inserts
    pub fn inserted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_inserted()).count()
    }

    /// Number of failed inserts
    pub fn failed(&self) -> usize {
        self.attempted() - self.inserted()
    }

    /// Failed outcomes only
    pub fn failures(&self) -> impl Iterator<Item = &InsertOutcome> {
        self.outcomes.iter().filter(|o| !o.is_inserted())
    }
}

/// Write the whole seeding run to `out`
///
/// ```text
/// 📝 Inserting sample student data...
///
/// ✔ Created: Raj Kumar (CSE) - ID: 5f0c...
/// ❌ Error creating Amit Patel: Conflict: ...
///
/// ✔ Successfully inserted 4 students!
/// ```
///
/// followed by the listing written by [`render_listing`].
pub fn render_seed_report(report: &SeedReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "📝 Inserting sample student data...")?;
    writeln!(out)?;

    for outcome in &report.outcomes {
        match &outcome.status {
            InsertStatus::Inserted => writeln!(
                out,
                "✔ Created: {} ({}) - ID: {}",
                outcome.name, outcome.branch, outcome.id
            )?,
            InsertStatus::Failed(message) => {
                writeln!(out, "❌ Error creating {}: {}", outcome.name, message)?
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "✔ Successfully inserted {} students!",
        report.inserted()
    )?;

    match &report.listing {
        Ok(students) => render_listing(students, out),
        Err(message) => {
            writeln!(out)?;
            writeln!(out, "❌ Error listing students: {message}")
        }
    }
}

/// Write the numbered student listing to `out`
pub fn render_listing(students: &[StudentRecord], out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "All Students in Database:")?;
    writeln!(out, "{rule}")?;

    for (i, student) in students.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. {}", i + 1, student.name)?;
        writeln!(out, "   ID: {}", student.id)?;
        writeln!(out, "   Branch: {}", student.branch)?;
        writeln!(out, "   Semester: {}", student.semester)?;
        writeln!(out, "   GPA: {}", student.gpa)?;
        writeln!(out, "   Email: {}", student.email)?;
    }

    Ok(())
}
