use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{FieldErrors, Result, RosterError};
use crate::model::{EditCursor, Field, Roster, StudentForm};
use crate::store::BlobStore;
use crate::validation::validate;

pub const DUPLICATE_OTHER_ID: &str = "Another student with this ID already exists";

/// Replaces the record under the cursor. The cursor survives any failure so
/// the form can be corrected and resubmitted.
pub fn run<S: BlobStore>(
    store: &mut S,
    key: &str,
    roster: &mut Roster,
    form: &StudentForm,
) -> Result<CmdResult> {
    let index = roster.cursor.index().ok_or(RosterError::NotEditing)?;
    if index >= roster.students.len() {
        return Err(RosterError::NoSuchStudent(index));
    }

    let student = validate(form)?;

    if roster
        .position_of(&student.student_id, Some(index))
        .is_some()
    {
        return Err(FieldErrors::single(Field::StudentId, DUPLICATE_OTHER_ID).into());
    }

    let mut next = roster.students.clone();
    next[index] = student.clone();
    persist::run(store, key, &next)?;
    roster.students = next;
    roster.cursor = EditCursor::None;

    tracing::info!(index, student_id = %student.student_id, "student updated");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student updated ({}): {}",
        index + 1,
        student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}
