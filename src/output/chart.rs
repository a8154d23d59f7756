//! Full-screen bar chart of a simulation histogram

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
};
use std::io;

use crate::simulator::Histogram;

/// Show the histogram until a key is pressed, then restore the terminal
///
/// # Errors
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn show_histogram(histogram: &Histogram) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_chart(&mut terminal, histogram);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_chart<B: Backend>(terminal: &mut Terminal<B>, histogram: &Histogram) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, histogram))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
        {
            return Ok(());
        }
    }
}

fn render(f: &mut Frame, histogram: &Histogram) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Chart
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_chart(f, histogram, chunks[0]);

    let status = Paragraph::new(format!(
        "{} games, {} solved, {} failed  |  q / Esc to close",
        histogram.total(),
        histogram.solved(),
        histogram.failed()
    ))
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);
}

fn render_chart(f: &mut Frame, histogram: &Histogram, area: Rect) {
    let bars: Vec<Bar> = histogram
        .entries()
        .into_iter()
        .map(|(label, count)| {
            let color = if label == "failed" {
                Color::Red
            } else {
                Color::Green
            };
            Bar::default()
                .value(count as u64)
                .label(Line::from(label))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Guess distribution ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(chart, area);
}
