use crate::error::{Result, RosterError};
use crate::model::{EditCursor, Roster, StudentForm};

/// Points the cursor at `index` and returns the form pre-filled from that record.
pub fn begin(roster: &mut Roster, index: usize) -> Result<StudentForm> {
    let student = roster
        .students
        .get(index)
        .ok_or(RosterError::NoSuchStudent(index))?;
    let form = StudentForm::from(student);
    roster.cursor = EditCursor::Editing(index);
    tracing::debug!(index, "editing student");
    Ok(form)
}

pub fn cancel(roster: &mut Roster) {
    if roster.cursor.is_editing() {
        tracing::debug!("edit cancelled");
    }
    roster.cursor = EditCursor::None;
}
