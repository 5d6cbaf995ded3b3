use super::{Document, course_line};
use crate::domain::student::Student;
use chrono::NaiveDate;

const COLLEGE: &str = "Sengunthar Engineering College";
const ADDRESS: &str = "Tiruchengode, Namakkal (Dt), Tamilnadu - 637205";

/// The no-dues certificate for a student who has paid everything.
pub struct AdminSlip<'a> {
    student: &'a Student,
    issued_on: NaiveDate,
}

impl<'a> AdminSlip<'a> {
    pub fn new(student: &'a Student, issued_on: NaiveDate) -> Self {
        Self { student, issued_on }
    }
}

impl Document for AdminSlip<'_> {
    fn file_stem(&self) -> String {
        format!("SEC-Admin-Slip-{}", self.student.id)
    }

    fn lines(&self) -> Vec<String> {
        let s = self.student;
        vec![
            COLLEGE.to_string(),
            ADDRESS.to_string(),
            "=".repeat(50),
            String::new(),
            "ADMIN SLIP / NO DUES CERTIFICATE".to_string(),
            String::new(),
            format!("Date of Issue: {}", self.issued_on.format("%d/%m/%Y")),
            String::new(),
            "Student Details".to_string(),
            format!("  Name: {}", s.name),
            format!("  Roll No: {}", s.id),
            format!("  Course: {}", course_line(s)),
            String::new(),
            "This is to certify that the student mentioned above has paid all the fees,".to_string(),
            "including tuition, hostel, and other miscellaneous charges for the academic period."
                .to_string(),
            String::new(),
            "All Dues Cleared.".to_string(),
            String::new(),
            String::new(),
            "Authorised Signature".to_string(),
            "Accounts Department".to_string(),
            String::new(),
            "This is a computer-generated slip and does not require a physical signature".to_string(),
            "for validation if downloaded from the official portal.".to_string(),
        ]
    }
}
