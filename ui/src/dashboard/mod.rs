//! Refresh cycle: fetch a snapshot, derive every display artifact, then publish them
//! to the output surface in a single write.
//!
//! A failed cycle publishes [`Frame::unavailable`], so no region keeps content from an
//! earlier successful render. Overlapping refreshes are not cancelled; whichever
//! finishes last is what stays on screen.

mod view;

pub use view::Dashboard;

use dioxus::prelude::{Signal, Writable};
use time::OffsetDateTime;
use tracing::{error, info};

use crate::{
    core::{
        error::ErrorKind,
        format::{format_days, format_percent, format_updated},
        platform,
        snapshot::{Bucket, Snapshot},
        source::SnapshotSource,
    },
    tables::{project_buckets, project_daily, BucketRow, DayRow},
};

/// Element ids of the output regions shared with the host page.
pub mod regions {
    pub const SUBTITLE: &str = "subtitle";
    pub const MEDIAN: &str = "median";
    pub const MEAN: &str = "mean";
    pub const WITHIN_WEEK: &str = "withinWeek";
    pub const BUCKET_ROWS: &str = "bucket-rows";
    pub const DAILY_ROWS: &str = "daily-rows";
    pub const CHART: &str = "chart";
}

/// Content of one output region.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<T> {
    Loading,
    Ready(T),
    Unavailable,
}

impl<T> Region<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    #[cfg(test)]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Everything the dashboard shows, computed before any of it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub subtitle: Region<String>,
    pub median: Region<String>,
    pub mean: Region<String>,
    pub within_week: Region<String>,
    pub buckets: Region<Vec<BucketRow>>,
    pub daily: Region<Vec<DayRow>>,
    /// Chart input; the layout itself depends on the container size at draw time.
    pub chart: Region<Vec<Bucket>>,
}

impl Frame {
    pub fn loading() -> Self {
        Self {
            subtitle: Region::Loading,
            median: Region::Loading,
            mean: Region::Loading,
            within_week: Region::Loading,
            buckets: Region::Loading,
            daily: Region::Loading,
            chart: Region::Loading,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            subtitle: Region::Unavailable,
            median: Region::Unavailable,
            mean: Region::Unavailable,
            within_week: Region::Unavailable,
            buckets: Region::Unavailable,
            daily: Region::Unavailable,
            chart: Region::Unavailable,
        }
    }

    pub fn from_snapshot(snapshot: &Snapshot, now: OffsetDateTime) -> Self {
        let derived = &snapshot.derived;
        Self {
            subtitle: Region::Ready(format_updated(
                snapshot.metadata.last_updated_iso.as_deref(),
                now,
            )),
            median: Region::Ready(format_days(&derived.median_days)),
            mean: Region::Ready(format_days(&derived.mean_days)),
            within_week: Region::Ready(format_percent(&derived.chance_end_within_week_percent)),
            buckets: Region::Ready(project_buckets(&snapshot.buckets)),
            daily: Region::Ready(project_daily(&snapshot.daily_tracker)),
            chart: Region::Ready(snapshot.buckets.clone()),
        }
    }

    /// True when every region shows the unavailable state.
    pub fn is_unavailable(&self) -> bool {
        self.subtitle.is_unavailable()
            && self.median.is_unavailable()
            && self.mean.is_unavailable()
            && self.within_week.is_unavailable()
            && self.buckets.is_unavailable()
            && self.daily.is_unavailable()
            && self.chart.is_unavailable()
    }
}

/// Destination of a completed refresh. Receives exactly one frame per cycle.
pub trait Surface {
    fn present(&mut self, frame: Frame);
}

impl Surface for Signal<Frame> {
    fn present(&mut self, frame: Frame) {
        self.set(frame);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rendered,
    Unavailable(ErrorKind),
}

pub struct Renderer<S> {
    source: S,
}

impl<S: SnapshotSource> Renderer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn refresh(&self, surface: &mut impl Surface) -> RefreshOutcome {
        self.refresh_at(surface, platform::now_local()).await
    }

    /// Run one cycle with an explicit local clock reading.
    pub async fn refresh_at(&self, surface: &mut impl Surface, now: OffsetDateTime) -> RefreshOutcome {
        match self.source.fetch().await {
            Ok(snapshot) => {
                let frame = Frame::from_snapshot(&snapshot, now);
                info!(
                    buckets = snapshot.buckets.len(),
                    days = snapshot.daily_tracker.len(),
                    "snapshot rendered"
                );
                surface.present(frame);
                RefreshOutcome::Rendered
            }
            Err(err) => {
                error!(kind = ?err.kind(), "failed to load snapshot: {err}");
                surface.present(Frame::unavailable());
                RefreshOutcome::Unavailable(err.kind())
            }
        }
    }
}
