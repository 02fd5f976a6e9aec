//! model for the countdown panel: a fixed time window, per-tick display labels and the
//! panel geometry derived from them. Rendering and wall clock sampling live in the binary
//! so everything in here stays pure and testable

use chrono::NaiveDateTime;
use ratatui::layout::Rect;

use shed_common::datetime::{DurationBreakdown, DATETIME_FMT};
use shed_common::strings::max_len;

/// inner panel rows: elapsed, since, blank, now, blank, until, remaining
pub const PANEL_LINES: u16 = 7;

/// redraw interval
pub const TICK_SECS: u64 = 1;

/// the fixed (start,finish) window we count within
#[derive(Debug,Clone,Copy)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
}

/// the formatted display rows for one render tick. There is no state here - each tick
/// recomputes all labels from the sampled wall clock and the window constants
#[derive(Debug,Clone)]
pub struct PanelLabels {
    pub elapsed: String,
    pub since: String,
    pub now: String,
    pub until: String,
    pub remaining: String,
}

impl TimeWindow {
    pub fn new (start: NaiveDateTime, finish: NaiveDateTime) -> Self {
        TimeWindow { start, finish }
    }

    pub fn labels_at (&self, now: NaiveDateTime) -> PanelLabels {
        let elapsed = DurationBreakdown::of( &(now - self.start));
        let remaining = DurationBreakdown::of( &(self.finish - now));

        PanelLabels {
            elapsed: elapsed.to_string(),
            since: format!("Since: {}", self.start.format(DATETIME_FMT)),
            now: format!("      Now: {}", now.format(DATETIME_FMT)),
            until: format!("Until: {}", self.finish.format(DATETIME_FMT)),
            remaining: remaining.to_string(),
        }
    }

    /// inner panel width: the longest label we can encounter. Timestamp labels have fixed
    /// width so any sample tick works, the breakdown labels use a worst case example
    pub fn panel_width (&self) -> u16 {
        let ex_breakdown = DurationBreakdown { weeks: 999, days: 6, hours: 23, minutes: 59, seconds: 59 }.to_string();
        let ex_labels = self.labels_at(self.start);

        max_len([ ex_breakdown.as_str(),
                  ex_labels.since.as_str(),
                  ex_labels.now.as_str(),
                  ex_labels.until.as_str() ].into_iter()) as u16
    }
}

/// a width x height Rect centered in the given area, clipped to it if the area is smaller
pub fn centered_rect (area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;

    Rect { x, y, width: w, height: h }
}
