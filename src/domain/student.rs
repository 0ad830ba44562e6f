//! Student domain model
//!
//! This module defines the student document written to the container.

use super::ids::{Branch, StudentId};
use serde::{Deserialize, Serialize};

/// A student document as stored in the container
///
/// Serializes to a flat JSON object with exactly nine attributes. `branch` is
/// the partition key of the container.
///
/// # Examples
///
/// ```
/// use student_seeder::domain::student::StudentRecordBuilder;
///
/// let student = StudentRecordBuilder::new()
///     .name("Raj Kumar")
///     .branch("CSE").unwrap()
///     .roll_number("2024001")
///     .email("raj.kumar@university.edu")
///     .semester(4)
///     .gpa(3.8)
///     .phone("+91-9876543210")
///     .address("New Delhi, India")
///     .build()
///     .unwrap();
///
/// assert_eq!(student.branch.as_str(), "CSE");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Document id
    pub id: StudentId,

    /// Display name
    pub name: String,

    /// Department code (partition key)
    pub branch: Branch,

    /// Roll number, not checked for uniqueness
    pub roll_number: String,

    /// Contact email
    pub email: String,

    /// Current semester
    pub semester: u32,

    /// Grade point average
    pub gpa: f64,

    /// Contact phone number
    pub phone: String,

    /// Postal address
    pub address: String,
}

impl StudentRecord {
    /// Creates a new builder for constructing a StudentRecord
    pub fn builder() -> StudentRecordBuilder {
        StudentRecordBuilder::default()
    }
}

/// Builder for constructing StudentRecord instances
///
/// A fresh id is generated at `build()` unless one was set explicitly.
#[derive(Debug, Default)]
pub struct StudentRecordBuilder {
    id: Option<StudentId>,
    name: Option<String>,
    branch: Option<Branch>,
    roll_number: Option<String>,
    email: Option<String>,
    semester: Option<u32>,
    gpa: Option<f64>,
    phone: Option<String>,
    address: Option<String>,
}

impl StudentRecordBuilder {
    /// Creates a new StudentRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit document id
    pub fn id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the branch
    ///
    /// # Errors
    ///
    /// Returns an error if the branch code is empty
    pub fn branch(mut self, branch: impl Into<String>) -> Result<Self, String> {
        self.branch = Some(Branch::new(branch)?);
        Ok(self)
    }

    pub fn roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = Some(roll_number.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builds the StudentRecord
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<StudentRecord, String> {
        Ok(StudentRecord {
            id: self.id.unwrap_or_else(StudentId::generate),
            name: self.name.ok_or("name is required")?,
            branch: self.branch.ok_or("branch is required")?,
            roll_number: self.roll_number.ok_or("roll_number is required")?,
            email: self.email.ok_or("email is required")?,
            semester: self.semester.ok_or("semester is required")?,
            gpa: self.gpa.ok_or("gpa is required")?,
            phone: self.phone.ok_or("phone is required")?,
            address: self.address.ok_or("address is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StudentRecord {
        StudentRecordBuilder::new()
            .id(StudentId::new("0b5e7f3a-1111-4222-8333-944455556666").unwrap())
            .name("Priya Singh")
            .branch("ECE")
            .unwrap()
            .roll_number("2024002")
            .email("priya.singh@university.edu")
            .semester(3)
            .gpa(3.9)
            .phone("+91-9876543211")
            .address("Mumbai, India")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_missing_field() {
        let result = StudentRecordBuilder::new().name("Nobody").build();

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("branch is required"));
    }

    #[test]
    fn test_builder_generates_id() {
        let a = StudentRecord::builder()
            .name("A")
            .branch("CSE")
            .unwrap()
            .roll_number("1")
            .email("a@x")
            .semester(1)
            .gpa(3.0)
            .phone("0")
            .address("here")
            .build()
            .unwrap();

        assert!(!a.id.as_str().is_empty());
    }

    #[test]
    fn test_builder_rejects_empty_branch() {
        assert!(StudentRecordBuilder::new().branch("").is_err());
    }

    #[test]
    fn test_document_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "0b5e7f3a-1111-4222-8333-944455556666",
                "name": "Priya Singh",
                "branch": "ECE",
                "roll_number": "2024002",
                "email": "priya.singh@university.edu",
                "semester": 3,
                "gpa": 3.9,
                "phone": "+91-9876543211",
                "address": "Mumbai, India"
            })
        );
    }

    #[test]
    fn test_deserialize_ignores_system_properties() {
        // Documents read back from Cosmos DB carry _rid, _etag and friends
        let value = json!({
            "id": "abc",
            "name": "Amit Patel",
            "branch": "ME",
            "roll_number": "2024003",
            "email": "amit.patel@university.edu",
            "semester": 2,
            "gpa": 3.7,
            "phone": "+91-9876543212",
            "address": "Bangalore, India",
            "_rid": "xyz==",
            "_etag": "\"0000\"",
            "_ts": 1700000000
        });

        let student: StudentRecord = serde_json::from_value(value).unwrap();
        assert_eq!(student.name, "Amit Patel");
        assert_eq!(student.branch.as_str(), "ME");
    }
}
