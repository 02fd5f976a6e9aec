#[macro_use]
extern crate lazy_static;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use structopt::StructOpt;

use shed_common::datetime::try_parse_naive_datetime_arg;
use timediff::{centered_rect, PanelLabels, TimeWindow, PANEL_LINES, TICK_SECS};

/// timediff - full screen terminal countdown between two fixed timestamps. Shows the
/// elapsed time since start and the remaining time until finish in a centered panel that
/// is redrawn once per second. Terminate with ctrl-C (or 'q')
#[derive(StructOpt)]
pub struct CliOpts {

    /// start of the time window (yyyy-mm-dd HH:MM:SS, local)
    #[structopt(long,default_value="2014-09-15 09:00:00",parse(try_from_os_str = try_parse_naive_datetime_arg))]
    start: NaiveDateTime,

    /// finish of the time window (yyyy-mm-dd HH:MM:SS, local)
    #[structopt(long,default_value="2016-08-22 17:00:00",parse(try_from_os_str = try_parse_naive_datetime_arg))]
    finish: NaiveDateTime,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
    static ref WINDOW: TimeWindow = TimeWindow::new( ARGS.start, ARGS.finish);
}

fn main() -> Result<()> {
    enable_raw_mode()?; // fails right here if we are not attached to a capable terminal
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new( CrosstermBackend::new( stdout()))?;

    let result = run_render_loop( &mut terminal);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if result.is_ok() {
        println!("interrupted. exiting.");
    }
    result
}

/// redraw the panel with freshly sampled wall time about once per second, until the user
/// interrupts us. This is the only termination condition
fn run_render_loop (terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    loop {
        let labels = WINDOW.labels_at( Local::now().naive_local());
        terminal.draw( |frame| draw_panel(frame, &labels))?;

        if event::poll( Duration::from_secs(TICK_SECS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn draw_panel (frame: &mut Frame, labels: &PanelLabels) {
    let area = centered_rect( frame.area(), WINDOW.panel_width() + 2, PANEL_LINES + 2);

    let past_style = Style::default().fg(Color::Cyan);
    let now_style = Style::default().fg(Color::Green);
    let future_style = Style::default().fg(Color::Blue);

    let rows = vec![
        Line::styled( labels.elapsed.clone(), past_style),
        Line::styled( labels.since.clone(), past_style),
        Line::default(),
        Line::styled( labels.now.clone(), now_style),
        Line::default(),
        Line::styled( labels.until.clone(), future_style),
        Line::styled( labels.remaining.clone(), future_style),
    ];

    let panel = Paragraph::new(rows).block( Block::default().borders(Borders::ALL));
    frame.render_widget( panel, area);
}
