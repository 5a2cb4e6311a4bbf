use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{EditCursor, Roster};
use crate::store::BlobStore;

/// Removes the record at `index`. Nothing changes in memory unless the
/// shortened roster was stored.
pub fn run<S: BlobStore>(
    store: &mut S,
    key: &str,
    roster: &mut Roster,
    index: usize,
) -> Result<CmdResult> {
    if index >= roster.students.len() {
        return Err(RosterError::NoSuchStudent(index));
    }

    let mut next = roster.students.clone();
    let removed = next.remove(index);
    persist::run(store, key, &next)?;
    roster.students = next;

    roster.cursor = match roster.cursor {
        EditCursor::Editing(editing) if editing == index => EditCursor::None,
        EditCursor::Editing(editing) if editing > index => EditCursor::Editing(editing - 1),
        other => other,
    };

    tracing::info!(index, student_id = %removed.student_id, "student deleted");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student deleted ({}): {}",
        index + 1,
        removed.name
    )));
    Ok(result.with_affected_students(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{edit, load};
    use crate::store::memory::{fixtures, MemoryStore};
    use crate::store::DEFAULT_KEY;

    fn setup(count: usize) -> (MemoryStore, Roster) {
        let store = fixtures::store_with_students(count);
        let roster = Roster::new(load::run(&store, DEFAULT_KEY));
        (store, roster)
    }

    #[test]
    fn removes_and_persists() {
        let (mut store, mut roster) = setup(3);
        let result = run(&mut store, DEFAULT_KEY, &mut roster, 1).unwrap();

        assert_eq!(result.affected_students, vec![fixtures::student(2)]);
        assert_eq!(
            roster.students,
            vec![fixtures::student(1), fixtures::student(3)]
        );
        assert_eq!(load::run(&store, DEFAULT_KEY), roster.students);
    }

    #[test]
    fn deleting_edited_record_resets_cursor() {
        let (mut store, mut roster) = setup(2);
        edit::begin(&mut roster, 1).unwrap();
        run(&mut store, DEFAULT_KEY, &mut roster, 1).unwrap();
        assert_eq!(roster.cursor, EditCursor::None);
    }

    #[test]
    fn deleting_earlier_record_shifts_cursor() {
        let (mut store, mut roster) = setup(3);
        edit::begin(&mut roster, 2).unwrap();
        run(&mut store, DEFAULT_KEY, &mut roster, 0).unwrap();
        assert_eq!(roster.cursor, EditCursor::Editing(1));
        assert_eq!(roster.students[1], fixtures::student(3));
    }

    #[test]
    fn deleting_later_record_keeps_cursor() {
        let (mut store, mut roster) = setup(3);
        edit::begin(&mut roster, 0).unwrap();
        run(&mut store, DEFAULT_KEY, &mut roster, 2).unwrap();
        assert_eq!(roster.cursor, EditCursor::Editing(0));
    }

    #[test]
    fn out_of_range() {
        let (mut store, mut roster) = setup(1);
        assert!(matches!(
            run(&mut store, DEFAULT_KEY, &mut roster, 1),
            Err(RosterError::NoSuchStudent(1))
        ));
    }

    #[test]
    fn write_failure_is_transactional() {
        let (mut store, mut roster) = setup(2);
        edit::begin(&mut roster, 0).unwrap();
        store.set_simulate_write_error(true);

        let err = run(&mut store, DEFAULT_KEY, &mut roster, 0).unwrap_err();

        assert!(matches!(err, RosterError::Persistence(_)));
        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.cursor, EditCursor::Editing(0));
        store.set_simulate_write_error(false);
        assert_eq!(load::run(&store, DEFAULT_KEY).len(), 2);
    }
}
