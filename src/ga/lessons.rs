//! Lesson block reconstruction.
//!
//! The slot-level representation stores one entry per occupied hour, so
//! multi-hour sessions must be reassembled before crossover can move them
//! as units and before repair can relocate them. A block is a run of
//! same-teacher/same-subject/same-day entries at strictly consecutive
//! hours.
//!
//! Block discovery follows entry order in the underlying list, not time
//! order. This decides which lessons the recombiner considers first and
//! is a deliberate tie-break policy.

use crate::models::ScheduleEntry;

/// A contiguous multi-hour session, derived from a flat entry list.
///
/// Never persisted; recomputed on demand. Carries both the positions in
/// the source list (for filtering during relocation) and cloned entries
/// (for insertion into another candidate).
#[derive(Debug, Clone)]
pub struct LessonBlock {
    /// Positions of the block's entries in the source list.
    pub indices: Vec<usize>,
    /// The block's entries, hour-ascending.
    pub entries: Vec<ScheduleEntry>,
}

impl LessonBlock {
    /// The teacher holding this lesson.
    pub fn teacher(&self) -> &str {
        &self.entries[0].teacher
    }

    /// Block duration in hours.
    pub fn duration(&self) -> u32 {
        self.entries.len() as u32
    }
}

/// Groups a flat entry list into lesson blocks.
///
/// For each not-yet-grouped entry, greedily absorbs the ungrouped entry
/// at the immediately following hour with matching teacher, subject, and
/// day, repeating until contiguity breaks.
pub fn group_lessons(entries: &[ScheduleEntry]) -> Vec<LessonBlock> {
    let mut blocks = Vec::new();
    let mut grouped = vec![false; entries.len()];

    for start in 0..entries.len() {
        if grouped[start] {
            continue;
        }
        grouped[start] = true;

        let seed = &entries[start];
        let mut indices = vec![start];
        let mut next_hour = seed.hour + 1;

        loop {
            let follower = entries.iter().enumerate().position(|(i, e)| {
                !grouped[i]
                    && e.teacher == seed.teacher
                    && e.subject == seed.subject
                    && e.day == seed.day
                    && e.hour == next_hour
            });
            match follower {
                Some(i) => {
                    grouped[i] = true;
                    indices.push(i);
                    next_hour += 1;
                }
                None => break,
            }
        }

        blocks.push(LessonBlock {
            entries: indices.iter().map(|&i| entries[i].clone()).collect(),
            indices,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: &str, hour: u32, teacher: &str, subject: &str) -> ScheduleEntry {
        ScheduleEntry::new(day, hour, teacher, subject, "R1")
    }

    #[test]
    fn test_contiguous_hours_form_one_block() {
        let entries = vec![
            entry("Monday", 9, "Ahmed", "Math"),
            entry("Monday", 10, "Ahmed", "Math"),
            entry("Monday", 11, "Ahmed", "Math"),
        ];
        let blocks = group_lessons(&entries);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].duration(), 3);
        assert_eq!(blocks[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_gap_splits_blocks() {
        let entries = vec![
            entry("Monday", 9, "Ahmed", "Math"),
            entry("Monday", 11, "Ahmed", "Math"), // Hour 10 missing
        ];
        let blocks = group_lessons(&entries);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_different_day_teacher_subject_split() {
        let entries = vec![
            entry("Monday", 9, "Ahmed", "Math"),
            entry("Tuesday", 10, "Ahmed", "Math"),
            entry("Monday", 10, "Sara", "Math"),
            entry("Monday", 10, "Ahmed", "Physics"),
        ];
        let blocks = group_lessons(&entries);
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn test_absorption_ignores_entry_order() {
        // The follower appears before the seed hour in list order
        let entries = vec![
            entry("Monday", 10, "Ahmed", "Math"),
            entry("Monday", 9, "Ahmed", "Math"),
            entry("Monday", 11, "Ahmed", "Math"),
        ];
        let blocks = group_lessons(&entries);

        // Entry order decides discovery: the hour-10 seed absorbs hour 11,
        // leaving hour 9 as its own block.
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].entries[0].hour, 10);
        assert_eq!(blocks[0].duration(), 2);
        assert_eq!(blocks[1].entries[0].hour, 9);
    }

    #[test]
    fn test_round_trip_preserves_block_membership() {
        let entries = vec![
            entry("Monday", 9, "Ahmed", "Math"),
            entry("Monday", 10, "Ahmed", "Math"),
            entry("Tuesday", 9, "Sara", "Physics"),
        ];
        let blocks = group_lessons(&entries);

        // Expand blocks back to flat entries and regroup
        let expanded: Vec<ScheduleEntry> = blocks
            .iter()
            .flat_map(|b| b.entries.iter().cloned())
            .collect();
        let regrouped = group_lessons(&expanded);

        assert_eq!(regrouped.len(), blocks.len());
        for (a, b) in blocks.iter().zip(&regrouped) {
            assert_eq!(a.entries, b.entries);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(group_lessons(&[]).is_empty());
    }
}
