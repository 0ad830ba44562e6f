//! The fixed sample roster
//!
//! Five students across three branches, always inserted in this order.

use crate::domain::{Result, SeederError, StudentRecord, StudentRecordBuilder};

struct SampleStudent {
    name: &'static str,
    branch: &'static str,
    roll_number: &'static str,
    email: &'static str,
    semester: u32,
    gpa: f64,
    phone: &'static str,
    address: &'static str,
}

const SAMPLE_STUDENTS: [SampleStudent; 5] = [
    SampleStudent {
        name: "Raj Kumar",
        branch: "CSE",
        roll_number: "2024001",
        email: "raj.kumar@university.edu",
        semester: 4,
        gpa: 3.8,
        phone: "+91-9876543210",
        address: "New Delhi, India",
    },
    SampleStudent {
        name: "Priya Singh",
        branch: "ECE",
        roll_number: "2024002",
        email: "priya.singh@university.edu",
        semester: 3,
        gpa: 3.9,
        phone: "+91-9876543211",
        address: "Mumbai, India",
    },
    SampleStudent {
        name: "Amit Patel",
        branch: "ME",
        roll_number: "2024003",
        email: "amit.patel@university.edu",
        semester: 2,
        gpa: 3.7,
        phone: "+91-9876543212",
        address: "Bangalore, India",
    },
    SampleStudent {
        name: "Neha Gupta",
        branch: "CSE",
        roll_number: "2024004",
        email: "neha.gupta@university.edu",
        semester: 4,
        gpa: 3.95,
        phone: "+91-9876543213",
        address: "Pune, India",
    },
    SampleStudent {
        name: "Vikram Sharma",
        branch: "ECE",
        roll_number: "2024005",
        email: "vikram.sharma@university.edu",
        semester: 3,
        gpa: 3.6,
        phone: "+91-9876543214",
        address: "Hyderabad, India",
    },
];

/// Build the sample roster, each student with a freshly generated id
///
/// Calling this twice yields the same students under different ids.
pub fn sample_students() -> Result<Vec<StudentRecord>> {
    SAMPLE_STUDENTS
        .iter()
        .map(|s| {
            StudentRecordBuilder::new()
                .name(s.name)
                .branch(s.branch)
                .and_then(|b| {
                    b.roll_number(s.roll_number)
                        .email(s.email)
                        .semester(s.semester)
                        .gpa(s.gpa)
                        .phone(s.phone)
                        .address(s.address)
                        .build()
                })
                .map_err(SeederError::Validation)
        })
        .collect()
}
