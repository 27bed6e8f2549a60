//! Row view-models for the bucket and daily-tracker tables.

use crate::core::{
    format::{display_text, format_percent},
    snapshot::{Bucket, DayRecord},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BucketRow {
    pub range_label: String,
    /// 1-based position in the snapshot.
    pub scenario_ordinal: usize,
    pub percent_text: String,
    /// Width of the proportional fill bar, in `[0, 100]`.
    pub fill_width_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: String,
    pub date: String,
    pub end_today: String,
    pub shutdown_continues: String,
    pub watch: String,
}

pub fn project_buckets(buckets: &[Bucket]) -> Vec<BucketRow> {
    buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| BucketRow {
            range_label: display_text(&bucket.range),
            scenario_ordinal: index + 1,
            percent_text: format_percent(&bucket.prob),
            fill_width_percent: bucket.fill_percent(),
        })
        .collect()
}

pub fn project_daily(days: &[DayRecord]) -> Vec<DayRow> {
    days.iter()
        .map(|record| DayRow {
            day: display_text(&record.day),
            date: display_text(&record.date),
            end_today: format_percent(&record.end_today_prob),
            shutdown_continues: format_percent(&record.shutdown_continues_prob),
            watch: display_text(&record.watch),
        })
        .collect()
}
