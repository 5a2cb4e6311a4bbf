use serde::{Deserialize, Serialize};
use std::fmt;

/// A single roster entry. Only ever constructed from validated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

/// The four raw strings a form submits, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::StudentId => &self.student_id,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            student_id: student.student_id.clone(),
            email: student.email.clone(),
            contact: student.contact.clone(),
        }
    }
}

/// Form fields, ordered as they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    StudentId,
    Email,
    Contact,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::StudentId, Field::Email, Field::Contact];

    /// Key used in the stored JSON and in error mappings.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StudentId => "studentId",
            Field::Email => "email",
            Field::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::StudentId => "Student ID",
            Field::Email => "Email",
            Field::Contact => "Contact",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Add mode vs. the position of the record being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditCursor {
    #[default]
    None,
    Editing(usize),
}

impl EditCursor {
    pub fn index(self) -> Option<usize> {
        match self {
            EditCursor::None => None,
            EditCursor::Editing(index) => Some(index),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, EditCursor::Editing(_))
    }
}

/// In-memory roster state: the ordered records plus the edit cursor.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub students: Vec<Student>,
    pub cursor: EditCursor,
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students,
            cursor: EditCursor::None,
        }
    }

    /// Position of the record holding `student_id`, skipping `except`.
    pub fn position_of(&self, student_id: &str, except: Option<usize>) -> Option<usize> {
        self.students
            .iter()
            .enumerate()
            .find(|(idx, s)| Some(*idx) != except && s.student_id == student_id)
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str) -> Student {
        Student {
            name: "Ada".into(),
            student_id: id.into(),
            email: "ada@example.com".into(),
            contact: "0123456789".into(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(student("42")).unwrap();
        assert_eq!(json["studentId"], "42");
        assert!(json.get("student_id").is_none());
    }

    #[test]
    fn position_of_skips_excluded_index() {
        let roster = Roster::new(vec![student("1"), student("2")]);
        assert_eq!(roster.position_of("2", None), Some(1));
        assert_eq!(roster.position_of("2", Some(1)), None);
        assert_eq!(roster.position_of("3", None), None);
    }
}
