//! Label composition for grid cells and flat rows.
//!
//! An entry may list several teachers or rooms; which one ends up in the
//! output is an explicit policy rather than a silent index-0 pick.

use crate::error::{Result, TimegridError};
use crate::model::{ScheduleEntry, Teacher, User};
use crate::tables::{ScheduleTables, NO_ROOM, NO_TEACHER};

/// Resolution strategy for multi-valued teacher/room lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickPolicy {
    /// Use the first listed element (the original export pipeline's behavior).
    #[default]
    First,
    /// Error out unless the list holds at most one element.
    RequireSingle,
}

impl PickPolicy {
    /// Select one element from `items`, or `None` when the list is empty.
    pub fn pick<'a, T>(self, items: &'a [T], what: &'static str) -> Result<Option<&'a T>> {
        match self {
            Self::First => Ok(items.first()),
            Self::RequireSingle => {
                if items.len() > 1 {
                    return Err(TimegridError::Ambiguous {
                        what,
                        count: items.len(),
                    });
                }
                Ok(items.first())
            }
        }
    }
}

/// `"Иванов П. С."` — last name plus first/middle initials. A missing middle
/// name simply drops its initial.
pub fn short_name(user: &User) -> String {
    let mut name = user.last_name.clone();
    if let Some(first) = user.first_name.chars().next() {
        name.push(' ');
        name.push(first);
        name.push('.');
    }
    if let Some(middle) = user
        .middle_name
        .as_deref()
        .and_then(|m| m.chars().next())
    {
        name.push(' ');
        name.push(middle);
        name.push('.');
    }
    name
}

/// `"Иванов П. С., Кафедра математики, доцент"` — the flat table's Name column
/// and the middle line of a lesson cell.
pub fn teacher_descriptor(teacher: &Teacher) -> String {
    format!(
        "{}, {}, {}",
        short_name(&teacher.user),
        teacher.department.title,
        teacher.position.title
    )
}

/// Compose the multi-line lesson cell label for one entry:
/// type + discipline, teacher descriptor, audience.
pub fn lesson_label(
    entry: &ScheduleEntry,
    tables: &ScheduleTables,
    policy: PickPolicy,
) -> Result<String> {
    let teacher_line = match policy.pick(&entry.teachers, "teachers")? {
        Some(link) => teacher_descriptor(&link.teacher),
        None => format!("{NO_TEACHER}, {NO_TEACHER}, {NO_TEACHER}"),
    };
    let audience = match policy.pick(&entry.rooms, "rooms")? {
        Some(link) => link.audience.title.as_str(),
        None => NO_ROOM,
    };

    Ok(format!(
        "{} {}\n{}\n{}",
        tables.type_abbrev(entry.assignment.kind),
        entry.assignment.discipline,
        teacher_line,
        audience,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::model::{Audience, Department, Position, RoomLink, TeacherLink};

    fn user(last: &str, first: &str, middle: Option<&str>) -> User {
        User {
            last_name: last.to_string(),
            first_name: first.to_string(),
            middle_name: middle.map(str::to_string),
        }
    }

    fn teacher(last: &str) -> TeacherLink {
        TeacherLink {
            teacher: Teacher {
                user: user(last, "Пётр", Some("Сергеевич")),
                department: Department {
                    title: "Кафедра математики".to_string(),
                },
                position: Position {
                    title: "доцент".to_string(),
                },
            },
        }
    }

    fn room(title: &str) -> RoomLink {
        RoomLink {
            audience: Audience {
                title: title.to_string(),
            },
        }
    }

    fn entry() -> ScheduleEntry {
        use crate::model::*;
        ScheduleEntry {
            day_of_week: DayOfWeek::Mon,
            time_slot_id: SlotId::Num(1),
            time_slot: TimeSlot {
                title: "08:30 — 10:00".to_string(),
            },
            week_type: Some(WeekType::Odd),
            assignment: Assignment {
                discipline: "Алгебра".to_string(),
                kind: DisciplineType::Lecture,
            },
            groups: Vec::new(),
            rooms: vec![room("А-301")],
            teachers: vec![teacher("Иванов")],
        }
    }

    #[test]
    fn short_name_with_both_initials() {
        assert_eq!(
            short_name(&user("Иванов", "Пётр", Some("Сергеевич"))),
            "Иванов П. С."
        );
    }

    #[test]
    fn short_name_without_middle_name() {
        assert_eq!(short_name(&user("Иванов", "Пётр", None)), "Иванов П.");
    }

    #[test]
    fn short_name_with_empty_first_name() {
        assert_eq!(short_name(&user("Иванов", "", None)), "Иванов");
    }

    #[test]
    fn lesson_label_three_lines() {
        let tables = ScheduleTables::default();
        let label = lesson_label(&entry(), &tables, PickPolicy::First).unwrap();
        assert_eq!(
            label,
            "лек. Алгебра\nИванов П. С., Кафедра математики, доцент\nА-301"
        );
    }

    #[test]
    fn lesson_label_placeholders_when_lists_empty() {
        let tables = ScheduleTables::default();
        let mut e = entry();
        e.teachers.clear();
        e.rooms.clear();
        let label = lesson_label(&e, &tables, PickPolicy::First).unwrap();
        assert_eq!(
            label,
            "лек. Алгебра\nНе указан, Не указан, Не указан\nНе указано"
        );
    }

    #[test]
    fn first_policy_takes_first_of_many() {
        let mut e = entry();
        e.teachers.push(teacher("Петров"));
        let tables = ScheduleTables::default();
        let label = lesson_label(&e, &tables, PickPolicy::First).unwrap();
        assert!(label.contains("Иванов"));
        assert!(!label.contains("Петров"));
    }

    #[test]
    fn require_single_rejects_many() {
        let mut e = entry();
        e.teachers.push(teacher("Петров"));
        let tables = ScheduleTables::default();
        let err = lesson_label(&e, &tables, PickPolicy::RequireSingle).unwrap_err();
        assert!(matches!(
            err,
            TimegridError::Ambiguous {
                what: "teachers",
                count: 2
            }
        ));
    }
}
