//! Resource availability predicates.
//!
//! Three independent checks over the committed-session log, all built on
//! the same-date interval overlap test `a.start < b.end && a.end > b.start`.
//! The trainer check is two-phase: declared availability must fully cover
//! the candidate range before any booking conflict is even considered.
//! An unavailable trainer is never free, whatever the log says.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{CurriculumModule, Room, ScheduledSession, Trainer};

/// Whether `room` is free for `[start, end)` on `date`.
pub fn room_is_free(
    room: &Room,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    committed: &[ScheduledSession],
) -> bool {
    !committed
        .iter()
        .any(|s| s.room_id == room.id && s.overlaps(date, start, end))
}

/// Whether the class is free for `[start, end)` on `date`.
///
/// A class cannot attend two sessions at once.
pub fn class_is_free(
    class_id: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    committed: &[ScheduledSession],
) -> bool {
    !committed
        .iter()
        .any(|s| s.class_id == class_id && s.overlaps(date, start, end))
}

/// Whether `trainer` can teach `[start, end)` on `date`.
///
/// Phase one: some declared window on that date must fully cover the
/// range. Only then, phase two: no committed session for the trainer may
/// overlap it.
pub fn trainer_is_free(
    trainer: &Trainer,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    committed: &[ScheduledSession],
) -> bool {
    if !trainer.covers(date, start, end) {
        return false;
    }
    !committed
        .iter()
        .any(|s| s.trainer_id == trainer.id && s.overlaps(date, start, end))
}

/// First free room compatible with the module, in input order.
pub fn find_room<'a>(
    rooms: &'a [Room],
    module: &CurriculumModule,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    committed: &[ScheduledSession],
) -> Option<&'a Room> {
    rooms.iter().find(|room| {
        module.allows_room_category(&room.category)
            && room_is_free(room, date, start, end, committed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn session(room: &str, trainer: &str, class: &str, day: u32, start: u32, end: u32) -> ScheduledSession {
        ScheduledSession::new(class, "M1", trainer, room, d(day), t(start), t(end))
    }

    #[test]
    fn test_room_free() {
        let room = Room::new("R1", "classroom");
        let committed = vec![session("R1", "T1", "C1", 6, 9, 12)];

        assert!(!room_is_free(&room, d(6), t(10), t(11), &committed));
        assert!(room_is_free(&room, d(6), t(12), t(13), &committed));
        assert!(room_is_free(&room, d(7), t(9), t(12), &committed));

        let other = Room::new("R2", "classroom");
        assert!(room_is_free(&other, d(6), t(9), t(12), &committed));
    }

    #[test]
    fn test_class_free() {
        let committed = vec![session("R1", "T1", "C1", 6, 9, 12)];

        assert!(!class_is_free("C1", d(6), t(11), t(13), &committed));
        assert!(class_is_free("C1", d(6), t(13), t(16), &committed));
        assert!(class_is_free("C2", d(6), t(9), t(12), &committed));
    }

    #[test]
    fn test_trainer_requires_declared_availability() {
        // No windows at all: never free, even with an empty log
        let trainer = Trainer::new("T1");
        assert!(!trainer_is_free(&trainer, d(6), t(9), t(12), &[]));
    }

    #[test]
    fn test_trainer_window_must_cover_whole_range() {
        let trainer = Trainer::new("T1").with_window(d(6), t(9), t(11));
        assert!(trainer_is_free(&trainer, d(6), t(9), t(11), &[]));
        // 9-12 extends past the declared window
        assert!(!trainer_is_free(&trainer, d(6), t(9), t(12), &[]));
    }

    #[test]
    fn test_trainer_booking_conflict() {
        let trainer = Trainer::new("T1").with_window(d(6), t(9), t(17));
        let committed = vec![session("R1", "T1", "C2", 6, 9, 12)];

        assert!(!trainer_is_free(&trainer, d(6), t(11), t(13), &committed));
        assert!(trainer_is_free(&trainer, d(6), t(13), t(16), &committed));
    }

    #[test]
    fn test_find_room_first_match_in_order() {
        let rooms = vec![Room::new("R1", "classroom"), Room::new("R2", "classroom")];
        let module = CurriculumModule::new("M1", 1, 10);

        let found = find_room(&rooms, &module, d(6), t(9), t(12), &[]);
        assert_eq!(found.map(|r| r.id.as_str()), Some("R1"));

        // R1 busy: falls through to R2
        let committed = vec![session("R1", "T1", "C2", 6, 9, 12)];
        let found = find_room(&rooms, &module, d(6), t(9), t(12), &committed);
        assert_eq!(found.map(|r| r.id.as_str()), Some("R2"));
    }

    #[test]
    fn test_find_room_category_filter() {
        let rooms = vec![Room::new("R1", "classroom")];
        let module = CurriculumModule::new("M1", 1, 10).with_room_categories(vec!["lab".into()]);

        assert!(find_room(&rooms, &module, d(6), t(9), t(12), &[]).is_none());
    }
}
