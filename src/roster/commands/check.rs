use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentForm;
use crate::validation::validate;

/// Validates a form without touching the roster.
pub fn run(form: &StudentForm) -> Result<CmdResult> {
    let student = validate(form)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} is valid", student.name)));
    Ok(result.with_affected_students(vec![student]))
}
