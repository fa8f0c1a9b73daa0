//! # HR Membership Resolution
//!
//! Resolves which batches an HR member is assigned to from the flat
//! batch-to-HR association lists carried on each [`Batch`].
//!
//! Two shapes are offered:
//! - [`membership_for`] scans the collection for a single HR id. This is the
//!   right tool for the dashboard's "my batches" view.
//! - [`HrMembershipIndex`] builds the whole relation in one pass, for callers
//!   that need many lookups against the same collection.
//!
//! Assignments without an identifier are skipped, never fatal. Both shapes
//! report how many were skipped.

use crate::logging;
use crate::models::batch::Batch;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Batches an HR member belongs to, plus the malformed-entry count seen
/// while resolving them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrMembership {
    pub batch_ids: HashSet<String>,
    pub skipped_entries: usize,
}

impl HrMembership {
    pub fn is_empty(&self) -> bool {
        self.batch_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.batch_ids.len()
    }

    pub fn contains(&self, batch_id: &str) -> bool {
        self.batch_ids.contains(batch_id)
    }

    /// Batch ids in lexical order, for callers that need a stable listing.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.batch_ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Batches whose assignments include `hr_id`.
///
/// A blank or unknown `hr_id` yields an empty membership, not an error.
pub fn membership_for(batches: &[Batch], hr_id: &str) -> HrMembership {
    let hr_id = hr_id.trim();
    let mut membership = HrMembership::default();

    for batch in batches {
        let mut matched = false;
        for assignment in &batch.hr_assignments {
            match assignment.identifier() {
                Some(id) => matched |= id == hr_id,
                None => membership.skipped_entries += 1,
            }
        }
        if matched {
            membership.batch_ids.insert(batch.id.clone());
        }
    }

    if membership.skipped_entries > 0 {
        logging::log_skipped_assignments(
            "membership_for",
            Some(hr_id),
            membership.skipped_entries,
        );
    }

    membership
}

/// Borrowed view of the batches assigned to `hr_id`, in input order.
pub fn batches_for_hr<'a>(batches: &'a [Batch], hr_id: &str) -> Vec<&'a Batch> {
    let hr_id = hr_id.trim();
    batches.iter().filter(|batch| batch.has_hr(hr_id)).collect()
}

/// Full HR id → batch ids relation, built in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrMembershipIndex {
    memberships: HashMap<String, HashSet<String>>,
    skipped_entries: usize,
}

impl HrMembershipIndex {
    pub fn build(batches: &[Batch]) -> Self {
        let mut index = Self::default();

        for batch in batches {
            for assignment in &batch.hr_assignments {
                match assignment.identifier() {
                    Some(hr_id) => {
                        index
                            .memberships
                            .entry(hr_id.to_string())
                            .or_default()
                            .insert(batch.id.clone());
                    }
                    None => index.skipped_entries += 1,
                }
            }
        }

        if index.skipped_entries > 0 {
            logging::log_skipped_assignments(
                "membership_index_build",
                None,
                index.skipped_entries,
            );
        }

        index
    }

    pub fn batches_for(&self, hr_id: &str) -> Option<&HashSet<String>> {
        self.memberships.get(hr_id.trim())
    }

    /// Same answer as [`membership_for`] over the indexed collection.
    pub fn membership_for(&self, hr_id: &str) -> HrMembership {
        HrMembership {
            batch_ids: self.batches_for(hr_id).cloned().unwrap_or_default(),
            skipped_entries: self.skipped_entries,
        }
    }

    pub fn hr_ids(&self) -> impl Iterator<Item = &str> {
        self.memberships.keys().map(String::as_str)
    }

    pub fn hr_count(&self) -> usize {
        self.memberships.len()
    }

    pub fn skipped_entries(&self) -> usize {
        self.skipped_entries
    }

    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}
