use chrono::{TimeDelta, TimeZone, Utc};
use cohort_core::{Batch, HrAssignment, Timestamp};
use proptest::prelude::*;

/// Epoch milliseconds between 1970 and 2100
pub fn epoch_millis_strategy() -> impl Strategy<Value = i64> {
    0i64..4_102_444_800_000
}

/// Strategy for generating absolute timestamps with sub-millisecond precision
pub fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (epoch_millis_strategy(), 0i64..1_000_000).prop_map(|(ms, ns)| {
        Utc.timestamp_millis_opt(ms).unwrap() + TimeDelta::nanoseconds(ns)
    })
}

/// Interval lengths from zero up to ~58 days, sub-millisecond ones included
pub fn interval_length_strategy() -> impl Strategy<Value = TimeDelta> {
    prop_oneof![
        (0i64..=5_000_000_000, 0i64..1_000_000).prop_map(|(ms, ns)| {
            TimeDelta::milliseconds(ms) + TimeDelta::nanoseconds(ns)
        }),
        (0i64..2_000_000).prop_map(TimeDelta::nanoseconds),
    ]
}

/// Strategy for generating well-formed `(start, end)` pairs, zero length included
pub fn interval_strategy() -> impl Strategy<Value = (Timestamp, Timestamp)> {
    (timestamp_strategy(), interval_length_strategy())
        .prop_map(|(start, length)| (start, start + length))
}

/// Strategy for generating HR identifiers from a small pool so that collisions happen
pub fn hr_id_strategy() -> impl Strategy<Value = String> {
    (0u8..8).prop_map(|n| format!("hr-{n}"))
}

/// Strategy for HR assignments, roughly one in ten malformed
pub fn hr_assignment_strategy() -> impl Strategy<Value = HrAssignment> {
    prop_oneof![
        9 => hr_id_strategy().prop_map(|id| HrAssignment::new(id)),
        1 => Just(HrAssignment::malformed()),
    ]
}

/// Strategy for generating Batch snapshots with well-formed intervals
pub fn batch_strategy() -> impl Strategy<Value = Batch> {
    (
        "[a-z0-9]{1,12}",
        interval_strategy(),
        0u32..500,
        0u32..20,
        prop::collection::vec(hr_assignment_strategy(), 0..5),
    )
        .prop_map(|(id, (start, end), interns, hr, assignments)| {
            let mut batch = Batch::new(id, start, end)
                .with_interns(interns)
                .with_hr_count(hr);
            batch.hr_assignments = assignments;
            batch
        })
}

/// Strategy for generating batch collections
pub fn batches_strategy() -> impl Strategy<Value = Vec<Batch>> {
    prop::collection::vec(batch_strategy(), 0..20)
}
