use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{FieldErrors, Result};
use crate::model::{Field, Roster, StudentForm};
use crate::store::BlobStore;
use crate::validation::validate;

pub const DUPLICATE_ID: &str = "A student with this ID already exists";

pub fn run<S: BlobStore>(
    store: &mut S,
    key: &str,
    roster: &mut Roster,
    form: &StudentForm,
) -> Result<CmdResult> {
    let student = validate(form)?;

    if roster.position_of(&student.student_id, None).is_some() {
        return Err(FieldErrors::single(Field::StudentId, DUPLICATE_ID).into());
    }

    let mut next = roster.students.clone();
    next.push(student.clone());
    persist::run(store, key, &next)?;
    roster.students = next;

    tracing::info!(student_id = %student.student_id, "student added");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added ({}): {}",
        roster.students.len(),
        student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}
