//! The conflict engine.
//!
//! A short-lived query object over a borrowed snapshot of the schedule.
//! Construction indexes the reference lists by id; every query after that
//! is a pure read. The engine mutates nothing and holds no state between
//! invocations — build it, run the checks, drop it.

use std::collections::{HashMap, HashSet};

use crate::models::{Exam, Module, Room, Teacher, TimeSlot};

use super::ConflictRecord;

/// Placeholder label for an exam whose module cannot be resolved.
const UNKNOWN_MODULE: &str = "Unknown Module";
/// Placeholder label for an unresolvable room reference.
const UNKNOWN_ROOM: &str = "Unknown Room";
/// Placeholder label for an unresolvable teacher reference.
const UNKNOWN_TEACHER: &str = "Unknown Teacher";

/// Conflict-detection queries over one schedule snapshot.
///
/// Borrows the full exam list plus the teacher/module/room reference
/// lists. Lookups never fail: a dangling reference resolves to a
/// placeholder label instead ([`validation`](crate::validation) is the
/// place to catch dangling references upstream).
pub struct ConflictEngine<'a> {
    exams: &'a [Exam],
    teachers: &'a [Teacher],
    modules_by_id: HashMap<&'a str, &'a Module>,
    teachers_by_id: HashMap<&'a str, &'a Teacher>,
    rooms_by_id: HashMap<&'a str, &'a Room>,
}

impl<'a> ConflictEngine<'a> {
    /// Creates an engine over a snapshot.
    pub fn new(
        exams: &'a [Exam],
        teachers: &'a [Teacher],
        modules: &'a [Module],
        rooms: &'a [Room],
    ) -> Self {
        Self {
            exams,
            teachers,
            modules_by_id: modules.iter().map(|m| (m.id.as_str(), m)).collect(),
            teachers_by_id: teachers.iter().map(|t| (t.id.as_str(), t)).collect(),
            rooms_by_id: rooms.iter().map(|r| (r.id.as_str(), r)).collect(),
        }
    }

    /// Finds existing exams occupying any of the requested rooms during
    /// the candidate slot.
    ///
    /// Pass the id of the exam being edited as `exclude` so it does not
    /// conflict with itself. Returns one record per colliding exam, in
    /// exam-list order, listing every shared room.
    pub fn room_conflicts(
        &self,
        slot: &TimeSlot,
        room_ids: &[String],
        exclude: Option<&str>,
    ) -> Vec<ConflictRecord> {
        let mut conflicts = Vec::new();
        for exam in self.exams {
            if exclude == Some(exam.id.as_str()) || !slot.overlaps(&exam.slot) {
                continue;
            }
            let shared: Vec<String> = room_ids
                .iter()
                .filter(|id| exam.room_ids.contains(*id))
                .map(|id| self.room_label(id))
                .collect();
            if !shared.is_empty() {
                conflicts.push(ConflictRecord::room(
                    &exam.id,
                    self.module_label(&exam.module_id),
                    exam.slot.label(),
                    shared,
                ));
            }
        }
        conflicts
    }

    /// Finds existing exams whose module owner is also the owner of the
    /// candidate module, during the candidate slot.
    ///
    /// One teacher cannot be responsible for two overlapping exams. If the
    /// candidate module cannot be resolved the owner is unknown and no
    /// conflicts are reported; existing exams with unresolvable modules
    /// are skipped for the same reason.
    pub fn teacher_conflicts(
        &self,
        slot: &TimeSlot,
        module_id: &str,
        exclude: Option<&str>,
    ) -> Vec<ConflictRecord> {
        let Some(candidate) = self.modules_by_id.get(module_id) else {
            return Vec::new();
        };
        let owner = candidate.teacher_id.as_str();

        let mut conflicts = Vec::new();
        for exam in self.exams {
            if exclude == Some(exam.id.as_str()) || !slot.overlaps(&exam.slot) {
                continue;
            }
            let Some(module) = self.modules_by_id.get(exam.module_id.as_str()) else {
                continue;
            };
            if module.teacher_id == owner {
                conflicts.push(ConflictRecord::teacher(
                    &exam.id,
                    module.name.clone(),
                    exam.slot.label(),
                    vec![self.teacher_label(owner)],
                ));
            }
        }
        conflicts
    }

    /// Finds existing exams already proctored by any of the requested
    /// surveillants during the candidate slot.
    pub fn surveillant_conflicts(
        &self,
        slot: &TimeSlot,
        surveillant_ids: &[String],
        exclude: Option<&str>,
    ) -> Vec<ConflictRecord> {
        let mut conflicts = Vec::new();
        for exam in self.exams {
            if exclude == Some(exam.id.as_str()) || !slot.overlaps(&exam.slot) {
                continue;
            }
            let shared: Vec<String> = surveillant_ids
                .iter()
                .filter(|id| exam.surveillant_ids.contains(*id))
                .map(|id| self.teacher_label(id))
                .collect();
            if !shared.is_empty() {
                conflicts.push(ConflictRecord::surveillant(
                    &exam.id,
                    self.module_label(&exam.module_id),
                    exam.slot.label(),
                    shared,
                ));
            }
        }
        conflicts
    }

    /// Teachers free to proctor during the candidate slot.
    ///
    /// A teacher is busy if they proctor any overlapping exam (excluding
    /// `exclude`). Module-owner duties do not make a teacher busy here —
    /// only proctoring assignments count. Roster order is preserved.
    pub fn available_surveillants(
        &self,
        slot: &TimeSlot,
        exclude: Option<&str>,
    ) -> Vec<&'a Teacher> {
        let mut busy: HashSet<&str> = HashSet::new();
        for exam in self.exams {
            if exclude == Some(exam.id.as_str()) || !slot.overlaps(&exam.slot) {
                continue;
            }
            busy.extend(exam.surveillant_ids.iter().map(String::as_str));
        }
        self.teachers
            .iter()
            .filter(|t| !busy.contains(t.id.as_str()))
            .collect()
    }

    /// Proposes up to `count` surveillants for an existing exam.
    ///
    /// Takes the first eligible teachers in roster order — greedy, with no
    /// load balancing across the session; this mirrors how schedulers
    /// actually fill the list and keeps the proposal deterministic. The
    /// exam's own module owner is never proposed (an owner may not proctor
    /// their own exam). Returns fewer than `count` ids when the pool runs
    /// dry, and an empty list for an unknown exam id or a zero count.
    ///
    /// The proposal is only consistent with the snapshot it was computed
    /// from; re-check before committing if the snapshot may have moved.
    pub fn auto_assign_surveillants(&self, exam_id: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }
        let Some(exam) = self.exams.iter().find(|e| e.id == exam_id) else {
            return Vec::new();
        };
        let owner = self
            .modules_by_id
            .get(exam.module_id.as_str())
            .map(|m| m.teacher_id.as_str());

        self.available_surveillants(&exam.slot, Some(exam_id))
            .into_iter()
            .filter(|t| Some(t.id.as_str()) != owner)
            .take(count)
            .map(|t| t.id.clone())
            .collect()
    }

    /// Module name, or a placeholder when the reference dangles.
    fn module_label(&self, module_id: &str) -> String {
        self.modules_by_id
            .get(module_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| UNKNOWN_MODULE.to_string())
    }

    /// Room name, or a placeholder when the reference dangles.
    fn room_label(&self, room_id: &str) -> String {
        self.rooms_by_id
            .get(room_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| UNKNOWN_ROOM.to_string())
    }

    /// Teacher name, or a placeholder when the reference dangles.
    fn teacher_label(&self, teacher_id: &str) -> String {
        self.teachers_by_id
            .get(teacher_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_TEACHER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflicts::ConflictKind;

    fn slot(date: &str, start: &str, duration_min: u32) -> TimeSlot {
        TimeSlot::parse(date, start, duration_min).unwrap()
    }

    fn sample_teachers() -> Vec<Teacher> {
        vec![
            Teacher::new("T1", "Dr. Alvarez"),
            Teacher::new("T2", "Dr. Benali"),
            Teacher::new("T3", "Dr. Cho"),
            Teacher::new("T7", "Dr. Amari"),
        ]
    }

    fn sample_modules() -> Vec<Module> {
        vec![
            Module::new("M5", "T7").with_name("Linear Algebra").with_code("MATH-201"),
            Module::new("M6", "T2").with_name("Mechanics").with_code("PHYS-102"),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new("R1").with_name("Amphi A").with_capacity(220),
            Room::new("R2").with_name("Room 102").with_capacity(40),
        ]
    }

    fn sample_exams() -> Vec<Exam> {
        vec![Exam::new("E1", "M5", slot("2024-05-10", "09:00", 60))
            .with_room("R1")
            .with_surveillant("T1")]
    }

    #[test]
    fn test_room_conflicts_empty_schedule() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams: Vec<Exam> = Vec::new();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.room_conflicts(&slot("2024-05-10", "09:00", 60), &["R1".into()], None);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_room_conflict_detected() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.room_conflicts(&slot("2024-05-10", "09:30", 60), &["R1".into()], None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Room);
        assert_eq!(conflicts[0].exam_id, "E1");
        assert_eq!(conflicts[0].exam_label, "Linear Algebra");
        assert_eq!(conflicts[0].time, "2024-05-10 at 09:00");
        assert_eq!(conflicts[0].resources, vec!["Amphi A"]);
    }

    #[test]
    fn test_room_conflict_self_exclusion() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts =
            engine.room_conflicts(&slot("2024-05-10", "09:30", 60), &["R1".into()], Some("E1"));
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_room_conflict_disjoint_rooms() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // Same slot, different room — no conflict.
        let conflicts = engine.room_conflicts(&slot("2024-05-10", "09:00", 60), &["R2".into()], None);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_room_conflict_one_record_for_multiple_shared_rooms() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = vec![Exam::new("E1", "M5", slot("2024-05-10", "09:00", 120))
            .with_room("R1")
            .with_room("R2")];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.room_conflicts(
            &slot("2024-05-10", "10:00", 60),
            &["R1".into(), "R2".into()],
            None,
        );
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].resources, vec!["Amphi A", "Room 102"]);
    }

    #[test]
    fn test_room_conflict_unknown_module_label() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = vec![Exam::new("E1", "M404", slot("2024-05-10", "09:00", 60)).with_room("R1")];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.room_conflicts(&slot("2024-05-10", "09:00", 30), &["R1".into()], None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].exam_label, "Unknown Module");
    }

    #[test]
    fn test_teacher_conflict_adjacent_slots() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams(); // E1 ends at 10:00
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // Candidate starts exactly when E1 ends — not a conflict.
        let conflicts = engine.teacher_conflicts(&slot("2024-05-10", "10:00", 30), "M5", None);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_teacher_conflict_detected() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // 09:45–10:15 overlaps E1 (09:00–10:00); both modules owned by T7.
        let conflicts = engine.teacher_conflicts(&slot("2024-05-10", "09:45", 30), "M5", None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Teacher);
        assert_eq!(conflicts[0].exam_id, "E1");
        assert_eq!(conflicts[0].exam_label, "Linear Algebra");
        assert_eq!(conflicts[0].resources, vec!["Dr. Amari"]);
    }

    #[test]
    fn test_teacher_conflict_different_owner() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams(); // E1 is M5, owned by T7
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // M6 is owned by T2 — overlapping time, different owner.
        let conflicts = engine.teacher_conflicts(&slot("2024-05-10", "09:30", 60), "M6", None);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_teacher_conflict_unresolvable_candidate_module() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.teacher_conflicts(&slot("2024-05-10", "09:30", 60), "M404", None);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_surveillant_conflict_detected() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams(); // T1 proctors E1
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.surveillant_conflicts(
            &slot("2024-05-10", "09:30", 60),
            &["T1".into(), "T2".into()],
            None,
        );
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Surveillant);
        assert_eq!(conflicts[0].resources, vec!["Dr. Alvarez"]);
    }

    #[test]
    fn test_surveillant_conflict_free_pool() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts =
            engine.surveillant_conflicts(&slot("2024-05-10", "09:30", 60), &["T2".into()], None);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_available_surveillants() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams(); // T1 busy 09:00–10:00
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let available = engine.available_surveillants(&slot("2024-05-10", "09:30", 30), None);
        let ids: Vec<&str> = available.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T2", "T3", "T7"]); // roster order, T1 busy
    }

    #[test]
    fn test_available_surveillants_partition() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = vec![
            Exam::new("E1", "M5", slot("2024-05-10", "09:00", 60)).with_surveillant("T1"),
            Exam::new("E2", "M6", slot("2024-05-10", "09:30", 60)).with_surveillant("T3"),
        ];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // Available ∪ busy must cover the whole roster for any fixed slot.
        let probe = slot("2024-05-10", "09:45", 15);
        let available: HashSet<&str> = engine
            .available_surveillants(&probe, None)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let busy: HashSet<&str> = exams
            .iter()
            .filter(|e| probe.overlaps(&e.slot))
            .flat_map(|e| e.surveillant_ids.iter().map(String::as_str))
            .collect();

        let roster: HashSet<&str> = teachers.iter().map(|t| t.id.as_str()).collect();
        let union: HashSet<&str> = available.union(&busy).copied().collect();
        assert_eq!(union, roster);
        assert!(available.is_disjoint(&busy));
    }

    #[test]
    fn test_available_surveillants_out_of_hours() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // Afternoon slot — nobody is busy.
        let available = engine.available_surveillants(&slot("2024-05-10", "14:00", 60), None);
        assert_eq!(available.len(), teachers.len());
    }

    #[test]
    fn test_auto_assign_skips_module_owner() {
        let teachers = vec![Teacher::new("T1", "Dr. Alvarez"), Teacher::new("T7", "Dr. Amari")];
        let (modules, rooms) = (sample_modules(), sample_rooms());
        // E9 examines M5, owned by T7 — T7 may not proctor it.
        let exams = vec![Exam::new("E9", "M5", slot("2024-05-10", "09:00", 60))];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let assigned = engine.auto_assign_surveillants("E9", 2);
        assert_eq!(assigned, vec!["T1"]); // one eligible even though count = 2
    }

    #[test]
    fn test_auto_assign_roster_order_and_count() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = vec![Exam::new("E9", "M6", slot("2024-05-10", "09:00", 60))];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // Owner of M6 is T2; first two eligible in roster order are T1, T3.
        let assigned = engine.auto_assign_surveillants("E9", 2);
        assert_eq!(assigned, vec!["T1", "T3"]);
    }

    #[test]
    fn test_auto_assign_excludes_busy_surveillants() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = vec![
            Exam::new("E1", "M5", slot("2024-05-10", "09:00", 60)).with_surveillant("T1"),
            Exam::new("E9", "M6", slot("2024-05-10", "09:30", 60)),
        ];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // T1 proctors the overlapping E1, T2 owns M6 — T3 and T7 remain.
        let assigned = engine.auto_assign_surveillants("E9", 4);
        assert_eq!(assigned, vec!["T3", "T7"]);
    }

    #[test]
    fn test_auto_assign_unknown_exam() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        assert!(engine.auto_assign_surveillants("E404", 1).is_empty());
    }

    #[test]
    fn test_auto_assign_zero_count() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = sample_exams();
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        assert!(engine.auto_assign_surveillants("E1", 0).is_empty());
    }

    #[test]
    fn test_auto_assign_never_proposes_owner() {
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let exams = vec![Exam::new("E9", "M5", slot("2024-05-10", "09:00", 60))];
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        // Even when asking for the whole roster, the owner never appears.
        let assigned = engine.auto_assign_surveillants("E9", teachers.len());
        assert!(!assigned.contains(&"T7".to_string()));
    }

    #[test]
    fn test_snapshot_from_json() {
        // Snapshots arrive from a client-side cache as JSON; exercise the
        // derives end to end on one realistic payload.
        let exams: Vec<Exam> = serde_json::from_value(serde_json::json!([
            {
                "id": "E1",
                "slot": { "date": "2024-05-10", "start": "09:00:00", "duration_min": 60 },
                "module_id": "M5",
                "room_ids": ["R1"],
                "surveillant_ids": ["T1"],
                "group_ids": ["G1"],
                "notes": "",
                "exam_type": "Written"
            }
        ]))
        .unwrap();
        let (teachers, modules, rooms) = (sample_teachers(), sample_modules(), sample_rooms());
        let engine = ConflictEngine::new(&exams, &teachers, &modules, &rooms);

        let conflicts = engine.room_conflicts(&slot("2024-05-10", "09:30", 60), &["R1".into()], None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].resources, vec!["Amphi A"]);
    }
}
