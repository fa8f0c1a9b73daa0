//! Per-batch derived views and status filtering for the rendering layer.

use crate::lifecycle::BatchStatus;
use crate::models::batch::Batch;
use crate::timestamps::{format_display_date, Timestamp};
use serde::Serialize;

/// Everything the dashboard card needs to render one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: BatchStatus,
    pub progress: u8,
    pub start_label: String,
    pub end_label: String,
    pub total_interns: u32,
    pub total_hr: u32,
}

impl BatchView {
    pub fn derive(batch: &Batch, now: Timestamp) -> Self {
        Self {
            id: batch.id.clone(),
            name: batch.name.clone(),
            status: batch.status_at(now),
            progress: batch.progress_at(now),
            start_label: format_display_date(batch.start_date),
            end_label: format_display_date(batch.end_date),
            total_interns: batch.total_interns,
            total_hr: batch.total_hr,
        }
    }
}

/// Derive a view for every batch, in input order.
pub fn describe_batches(batches: &[Batch], now: Timestamp) -> Vec<BatchView> {
    batches
        .iter()
        .map(|batch| BatchView::derive(batch, now))
        .collect()
}

/// Batches whose status at `now` equals `status`, in input order.
pub fn filter_by_status(batches: &[Batch], status: BatchStatus, now: Timestamp) -> Vec<&Batch> {
    batches
        .iter()
        .filter(|batch| batch.status_at(now) == status)
        .collect()
}
