use serde::{Deserialize, Serialize};

/// Age at which a student counts as an adult.
pub const ADULT_AGE: u8 = 18;

/// A student on a class roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    first_name: String,
    last_name: String,
    age: u8,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u8) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

pub fn first_names(students: &[Student]) -> Vec<&str> {
    students.iter().map(Student::first_name).collect()
}

pub fn adults(students: &[Student]) -> Vec<&Student> {
    students.iter().filter(|s| s.is_adult()).collect()
}

pub fn sample_roster() -> Vec<Student> {
    vec![
        Student::new("Max", "Mustermann", 20),
        Student::new("Erika", "Musterfrau", 22),
        Student::new("Lukas", "Wagner", 17),
    ]
}
