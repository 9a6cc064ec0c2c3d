//! Shared builders for integration tests.

#![allow(dead_code)]

use timegrid::model::{
    Assignment, Audience, DayOfWeek, Department, DisciplineType, Group, GroupLink, Position,
    RoomLink, ScheduleEntry, SlotId, Teacher, TeacherLink, TimeSlot, User, WeekType,
};

/// Fluent builder for one schedule entry.
pub struct EntryBuilder {
    entry: ScheduleEntry,
}

impl EntryBuilder {
    pub fn new(day: DayOfWeek, slot_id: i64, slot_title: &str) -> Self {
        Self {
            entry: ScheduleEntry {
                day_of_week: day,
                time_slot_id: SlotId::Num(slot_id),
                time_slot: TimeSlot {
                    title: slot_title.to_string(),
                },
                week_type: Some(WeekType::Odd),
                assignment: Assignment {
                    discipline: "Математический анализ".to_string(),
                    kind: DisciplineType::Lecture,
                },
                groups: Vec::new(),
                rooms: Vec::new(),
                teachers: Vec::new(),
            },
        }
    }

    pub fn week(mut self, week: Option<WeekType>) -> Self {
        self.entry.week_type = week;
        self
    }

    pub fn discipline(mut self, title: &str, kind: DisciplineType) -> Self {
        self.entry.assignment = Assignment {
            discipline: title.to_string(),
            kind,
        };
        self
    }

    pub fn group(mut self, title: &str, profile: &str, direction: &str) -> Self {
        self.entry.groups.push(GroupLink {
            group: Group {
                title: title.to_string(),
                profile: profile.to_string(),
                direction: direction.to_string(),
            },
        });
        self
    }

    pub fn room(mut self, title: &str) -> Self {
        self.entry.rooms.push(RoomLink {
            audience: Audience {
                title: title.to_string(),
            },
        });
        self
    }

    pub fn teacher(mut self, last: &str, first: &str, middle: &str) -> Self {
        self.entry.teachers.push(TeacherLink {
            teacher: Teacher {
                user: User {
                    last_name: last.to_string(),
                    first_name: first.to_string(),
                    middle_name: Some(middle.to_string()),
                },
                department: Department {
                    title: "Кафедра математики".to_string(),
                },
                position: Position {
                    title: "доцент".to_string(),
                },
            },
        });
        self
    }

    pub fn build(self) -> ScheduleEntry {
        self.entry
    }
}
