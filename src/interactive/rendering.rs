//! TUI rendering with ratatui
//!
//! Panels for the Letter Boxed solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LETTERS_PER_SIDE, SIDE_COUNT};
use crate::output::formatters::{format_box, format_chain, format_duration};
use crate::results::{most_efficient, most_elaborate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_solutions(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTER BOXED SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let pages = app.pages();
    let first = pages.first_item(app.page);

    let items: Vec<ListItem> = if app.solution.is_none() {
        vec![ListItem::new("Enter a puzzle to see solutions")]
    } else if app.filtered.is_empty() {
        vec![ListItem::new("No matching solutions").style(Style::default().fg(Color::Red))]
    } else {
        pages
            .page(app.page)
            .iter()
            .enumerate()
            .skip(app.scroll)
            .map(|(offset, chain)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>5}. ", first + offset + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format_chain(chain)),
                ]))
            })
            .collect()
    };

    let title = format!(" Solutions (page {}) ", pages.label(app.page));
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Box diagram
            Constraint::Length(6), // Best picks
            Constraint::Length(3), // Filter gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_picks(f, app, chunks[1]);
    render_filter_gauge(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let letter_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let content: Vec<Line> = if let Some(solution) = &app.solution {
        format_box(&solution.puzzle)
            .into_iter()
            .map(|row| Line::styled(row, letter_style))
            .collect()
    } else {
        app.side_inputs
            .iter()
            .enumerate()
            .map(|(i, side)| {
                let marker = if i == app.active_side { "▶" } else { " " };
                let padded = format!("{side:_<LETTERS_PER_SIDE$}").to_uppercase();
                Line::from(vec![
                    Span::raw(format!("{marker} Side {}: ", i + 1)),
                    Span::styled(padded, letter_style),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_picks(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.solution {
        Some(solution) => {
            let pick = |chain: Option<&Vec<String>>| {
                chain.map_or_else(|| "-".to_string(), |chain| format_chain(chain))
            };
            vec![
                Line::from(vec![
                    Span::raw("Efficient: "),
                    Span::styled(
                        pick(most_efficient(&app.filtered)),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Elaborate: "),
                    Span::styled(
                        pick(most_elaborate(&app.filtered)),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
                Line::from(format!(
                    "Words: {} | Steps: {}",
                    solution.words.len(),
                    solution.steps
                )),
                Line::from(format!("Time:  {}", format_duration(solution.elapsed))),
            ]
        }
        None => vec![Line::from("No puzzle solved yet")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Best Picks ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_filter_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solution.as_ref().map_or(0, |s| s.combos.len());
    let kept = app.filtered.len();
    let ratio = if total == 0 {
        0.0
    } else {
        kept as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Filter ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{kept}/{total} solutions shown"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let sides_text;
    let (title, content, color) = match app.input_mode {
        InputMode::Sides => {
            sides_text = app.side_inputs.join(" ");
            (
                " Type the sides | TAB: next side | ENTER: solve | ESC: quit ",
                sides_text.as_str(),
                Color::Yellow,
            )
        }
        InputMode::Solving => (
            " Searching for word chains | ESC: stop and keep partial results ",
            "Solving...",
            Color::Blue,
        ),
        InputMode::Results => (
            " ←/→: page | ↑/↓: scroll | i: include | x: exclude | c: clear | n: new ",
            "",
            Color::Green,
        ),
        InputMode::Include => (
            " Words every solution must use | ENTER: apply | ESC: cancel ",
            app.filter_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Exclude => (
            " Words no solution may use | ENTER: apply | ESC: cancel ",
            app.filter_buffer.as_str(),
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Sides => "Mode: Entry",
        InputMode::Solving => "Mode: Solving",
        InputMode::Results => "Mode: Results",
        InputMode::Include => "Mode: Include",
        InputMode::Exclude => "Mode: Exclude",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Solved: {} | Unsolved: {}",
        app.stats.puzzles_solved, app.stats.puzzles_unsolved
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let filled = app
        .side_inputs
        .iter()
        .filter(|side| side.len() == LETTERS_PER_SIDE)
        .count();
    let progress_text = if app.solution.is_some() {
        format!("Page {}", app.pages().label(app.page))
    } else {
        format!("Sides: {filled}/{SIDE_COUNT}")
    };
    f.render_widget(
        Paragraph::new(progress_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::WordIndex;
    use crate::solver::Solver;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_entry_screen() {
        let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);
        let app = App::new(Solver::with_defaults(&index));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Side 1"));
        assert!(text.contains("Sides: 0/4"));
    }

    #[test]
    fn renders_solutions() {
        let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);
        let mut app = App::new(Solver::with_defaults(&index));
        for c in "abcdefghijkl".chars() {
            assert!(
                app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                    .is_none()
            );
        }
        let job = app
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        let solution = job.run(|_| {});
        app.finish_solve(solution);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("ADGJ"));
        assert!(text.contains("JBEHKCFIL"));
        assert!(text.contains("1/1 solutions shown"));
    }

    #[test]
    fn renders_running_solve() {
        let index = WordIndex::from_lines(["adgj", "jbehkcfil"]);
        let mut app = App::new(Solver::with_defaults(&index));
        for c in "abcdefghijkl".chars() {
            assert!(
                app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                    .is_none()
            );
        }
        let job = app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(job.is_some());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Mode: Solving"));
        assert!(text.contains("ESC: stop"));
    }
}
