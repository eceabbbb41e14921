/// PROPERTY-BASED TESTS: tile schedule invariants
///
/// Key invariants:
/// 1. Every phase is requested exactly once
/// 2. The first 4^r requests form an even 2^r x 2^r grid for every r
/// 3. Preview operations always describe a complete grid of delivered tiles

use std::collections::HashSet;

use proptest::prelude::*;
use vision_client::{RequestIdGenerator, Schedule};

fn frame_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..200, 1usize..200, 0usize..=4)
}

proptest! {
    #[test]
    fn prop_each_phase_once((width, height, level) in frame_strategy()) {
        let schedule = Schedule::new(width, height, level);
        let partitions = 1usize << level;

        prop_assert_eq!(schedule.request_count(), partitions * partitions);
        prop_assert_eq!(schedule.partition_count(), partitions * partitions);

        let phases: HashSet<(usize, usize)> = schedule
            .requests()
            .iter()
            .map(|r| (r.pixel_offset.x, r.pixel_offset.y))
            .collect();
        prop_assert_eq!(phases.len(), schedule.request_count());

        for request in schedule.requests() {
            prop_assert!(request.pixel_offset.x < partitions);
            prop_assert!(request.pixel_offset.y < partitions);
            prop_assert_eq!(request.pixel_stride.x, partitions);
            prop_assert_eq!(request.pixel_stride.y, partitions);
        }
    }

    #[test]
    fn prop_prefix_covering((width, height, level) in frame_strategy()) {
        let schedule = Schedule::new(width, height, level);

        for round in 0..=level {
            let grid = 1usize << round;
            let spacing = 1usize << (level - round);

            let prefix: HashSet<(usize, usize)> = schedule.requests()[..grid * grid]
                .iter()
                .map(|r| (r.pixel_offset.x, r.pixel_offset.y))
                .collect();
            let expected: HashSet<(usize, usize)> = (0..grid)
                .flat_map(|j| (0..grid).map(move |i| (i * spacing, j * spacing)))
                .collect();

            prop_assert_eq!(prefix, expected);
        }
    }

    #[test]
    fn prop_padding((width, height, level) in frame_strategy()) {
        let schedule = Schedule::new(width, height, level);
        let partitions = 1usize << level;

        prop_assert_eq!(schedule.padded_width() % partitions, 0);
        prop_assert!(schedule.padded_width() >= width);
        prop_assert!(schedule.padded_width() < width + partitions);
        prop_assert_eq!(schedule.padded_height() % partitions, 0);
        prop_assert!(schedule.padded_height() >= height);
    }

    #[test]
    fn prop_preview_matches_consumed(
        (width, height, level) in frame_strategy(),
        consumed in 0usize..300,
    ) {
        let mut schedule = Schedule::new(width, height, level);
        for _ in 0..consumed {
            schedule.advance();
        }

        let consumed = consumed.min(schedule.request_count());
        prop_assert_eq!(schedule.consumed_requests(), consumed);
        prop_assert_eq!(schedule.remaining_requests(), schedule.request_count() - consumed);

        let operations = schedule.preview_operations();
        if consumed == 0 {
            prop_assert!(operations.is_empty());
        } else {
            let divisions = schedule.preview_divisions();
            prop_assert_eq!(operations.len(), divisions * divisions);
            prop_assert!(operations.len() <= consumed);
            prop_assert!(consumed < 4 * operations.len());
        }
    }

    #[test]
    fn prop_ids_are_consecutive(
        (width, height, level) in frame_strategy(),
        first in 0u64..1_000_000,
    ) {
        let mut ids = RequestIdGenerator::starting_at(first);
        let schedule = Schedule::with_id_generator(width, height, level, &mut ids);

        for (index, request) in schedule.requests().iter().enumerate() {
            prop_assert_eq!(request.id, first + index as u64);
        }
        prop_assert_eq!(ids.peek(), first + schedule.request_count() as u64);
    }
}
