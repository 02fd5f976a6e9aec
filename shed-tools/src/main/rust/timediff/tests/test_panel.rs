#![allow(unused)]

use std::error::Error;

use chrono::TimeDelta;
use ratatui::layout::Rect;

use shed_common::datetime::parse_naive_datetime;
use timediff::{centered_rect, TimeWindow, PANEL_LINES};

fn test_window () -> Result<TimeWindow,Box<dyn Error>> {
    Ok( TimeWindow::new(
        parse_naive_datetime("2014-09-15 09:00:00")?,
        parse_naive_datetime("2016-08-22 17:00:00")?))
}

#[test]
fn test_labels_after_one_week_one_day () -> Result<(),Box<dyn Error>> {
    let window = test_window()?;
    let now = window.start + TimeDelta::days(8);

    let labels = window.labels_at(now);
    println!("{:?}", labels);

    assert_eq!( labels.elapsed, "1 weeks, 1 days, 0 hours, 0m0s");
    assert_eq!( labels.since, "Since: 2014-09-15 09:00:00");
    assert_eq!( labels.now, "      Now: 2014-09-23 09:00:00");
    assert_eq!( labels.until, "Until: 2016-08-22 17:00:00");
    Ok(())
}

#[test]
fn test_remaining_at_finish () -> Result<(),Box<dyn Error>> {
    let window = test_window()?;
    let labels = window.labels_at(window.finish);
    assert_eq!( labels.remaining, "0 weeks, 0 days, 0 hours, 0m0s");
    Ok(())
}

#[test]
fn test_remaining_past_finish_keeps_growing () -> Result<(),Box<dyn Error>> {
    // past the finish we keep rendering the (absolute) difference instead of underflowing
    let window = test_window()?;
    let labels = window.labels_at( window.finish + TimeDelta::seconds(1));
    assert_eq!( labels.remaining, "0 weeks, 0 days, 0 hours, 0m1s");
    Ok(())
}

#[test]
fn test_panel_width_is_longest_label () -> Result<(),Box<dyn Error>> {
    let window = test_window()?;
    // the worst case breakdown example ("999 weeks, 6 days, 23 hours, 59m59s") is longer
    // than any of the fixed width timestamp labels
    assert_eq!( window.panel_width(), 35);
    Ok(())
}

#[test]
fn test_centered_rect () {
    let area = Rect { x: 0, y: 0, width: 80, height: 24 };

    let panel = centered_rect( area, 37, PANEL_LINES + 2);
    assert_eq!( panel, Rect { x: 21, y: 7, width: 37, height: 9 });

    // panels never exceed a small terminal area
    let small = Rect { x: 0, y: 0, width: 20, height: 5 };
    let clipped = centered_rect( small, 37, PANEL_LINES + 2);
    assert_eq!( clipped, Rect { x: 0, y: 0, width: 20, height: 5 });
}
