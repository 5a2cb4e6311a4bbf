use crate::commands::{CmdResult, DisplayStudent};
use crate::model::Roster;

pub fn run(roster: &Roster) -> CmdResult {
    let listed = roster
        .students
        .iter()
        .enumerate()
        .map(|(idx, student)| DisplayStudent {
            index: idx + 1,
            student: student.clone(),
        })
        .collect();
    CmdResult::default().with_listed_students(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn display_indexes_start_at_one() {
        let roster = Roster::new(vec![fixtures::student(1), fixtures::student(2)]);
        let result = run(&roster);
        let indexes: Vec<usize> = result.listed_students.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert_eq!(result.listed_students[1].student, fixtures::student(2));
    }

    #[test]
    fn empty_roster_lists_nothing() {
        assert!(run(&Roster::default()).listed_students.is_empty());
    }
}
