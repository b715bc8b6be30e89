//! TUI application state and logic

use crate::core::{LETTERS_PER_SIDE, Puzzle, SIDE_COUNT};
use crate::results::{Pages, SolutionFilter};
use crate::solver::{CancelToken, Progress, Solution, Solver, SolverConfig, WordChain};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Solutions shown per page in the TUI
pub const TUI_PAGE_SIZE: usize = 100;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// How long the event loop waits for a key before checking on a running solve
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub input_mode: InputMode,
    pub side_inputs: [String; SIDE_COUNT],
    pub active_side: usize,
    pub solution: Option<Solution>,
    pub filter: SolutionFilter,
    /// Ranked solutions that pass `filter`
    pub filtered: Vec<WordChain>,
    pub filter_buffer: String,
    pub page: usize,
    /// First row of the current page shown in the list
    pub scroll: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Stops the solve running in the background, if any
    solving: Option<CancelToken>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the four sides
    Sides,
    /// Waiting on a background solve
    Solving,
    /// Browsing solutions
    Results,
    /// Editing the words every solution must use
    Include,
    /// Editing the words no solution may use
    Exclude,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_solved: usize,
    pub puzzles_unsolved: usize,
}

/// A solve handed off to a worker thread
///
/// Owns everything the search needs, so it can run while the event loop
/// keeps reading keys.
pub struct SolveJob<'a> {
    solver: Solver<'a>,
    puzzle: Puzzle,
}

impl SolveJob<'_> {
    #[must_use]
    pub fn run<F: FnMut(Progress)>(self, on_progress: F) -> Solution {
        self.solver.solve_with_progress(&self.puzzle, on_progress)
    }
}

/// Updates sent from a worker thread to the event loop
enum SolveEvent {
    Progress(Progress),
    Finished(Solution),
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        let words = solver.index().len();
        Self {
            solver,
            input_mode: InputMode::Sides,
            side_inputs: Default::default(),
            active_side: 0,
            solution: None,
            filter: SolutionFilter::new(),
            filtered: Vec::new(),
            filter_buffer: String::new(),
            page: 0,
            scroll: 0,
            messages: vec![
                Message {
                    text: format!("Welcome! Dictionary has {words} words."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the four sides, three letters each (like 'wvs').".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            solving: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Paged view over the filtered solutions
    #[must_use]
    pub fn pages(&self) -> Pages<'_, WordChain> {
        Pages::new(&self.filtered, TUI_PAGE_SIZE)
    }

    /// Whether every side holds three letters
    #[must_use]
    pub fn sides_complete(&self) -> bool {
        self.side_inputs
            .iter()
            .all(|side| side.len() == LETTERS_PER_SIDE)
    }

    /// Whether a solve is running in the background
    #[must_use]
    pub const fn is_solving(&self) -> bool {
        self.solving.is_some()
    }

    /// Parse the typed sides and prepare a cancellable solve
    ///
    /// Returns `None` and logs the problem if the sides do not form a puzzle.
    pub fn start_solve(&mut self) -> Option<SolveJob<'a>> {
        let puzzle = match Puzzle::from_sides(self.side_inputs.clone()) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return None;
            }
        };

        let token = CancelToken::new();
        let config = SolverConfig {
            budget: self
                .solver
                .config()
                .budget
                .clone()
                .with_cancel_token(token.clone()),
            ..self.solver.config().clone()
        };
        self.solving = Some(token);
        self.input_mode = InputMode::Solving;
        self.add_message(
            &format!("Solving {puzzle}... (ESC to stop)"),
            MessageStyle::Info,
        );

        Some(SolveJob {
            solver: Solver::new(self.solver.index(), config),
            puzzle,
        })
    }

    /// Ask the running solve to stop; it still reports what it found
    pub fn cancel_solve(&mut self) {
        if let Some(token) = &self.solving
            && !token.is_cancelled()
        {
            token.cancel();
            self.add_message("Stopping search...", MessageStyle::Info);
        }
    }

    /// Log a checkpoint reported by the running solve
    pub fn record_progress(&mut self, progress: Progress) {
        if let Progress::WordsDiscovered { count } = progress {
            self.add_message(&format!("Found {count} possible words"), MessageStyle::Info);
        }
    }

    /// Show the result of a finished solve
    pub fn finish_solve(&mut self, solution: Solution) {
        self.solving = None;

        if let Some(reason) = solution.stop_reason() {
            self.add_message(
                &format!("Search stopped early ({reason}); results are partial"),
                MessageStyle::Error,
            );
        }
        if solution.combos.is_empty() {
            self.stats.puzzles_unsolved += 1;
            self.add_message("No solutions found", MessageStyle::Error);
        } else {
            self.stats.puzzles_solved += 1;
            self.add_message(
                &format!("Found {} solutions", solution.combos.len()),
                MessageStyle::Success,
            );
        }

        self.solution = Some(solution);
        self.refresh_filtered();
        self.input_mode = InputMode::Results;
    }

    fn refresh_filtered(&mut self) {
        self.filtered = self.solution.as_ref().map_or_else(Vec::new, |solution| {
            self.filter
                .apply(&solution.combos)
                .into_iter()
                .cloned()
                .collect()
        });
        self.page = 0;
        self.scroll = 0;
    }

    /// Start over with an empty puzzle
    pub fn new_puzzle(&mut self) {
        self.side_inputs = Default::default();
        self.active_side = 0;
        self.solution = None;
        self.filter = SolutionFilter::new();
        self.filtered.clear();
        self.filter_buffer.clear();
        self.page = 0;
        self.scroll = 0;
        self.input_mode = InputMode::Sides;
        self.add_message("New puzzle: enter the four sides.", MessageStyle::Info);
    }

    fn begin_filter_edit(&mut self, mode: InputMode) {
        self.filter_buffer = match mode {
            InputMode::Include => self.filter.included().join(" "),
            _ => self.filter.excluded().join(" "),
        };
        self.input_mode = mode;
    }

    fn apply_filter_edit(&mut self) {
        let text = std::mem::take(&mut self.filter_buffer);
        let current = std::mem::take(&mut self.filter);
        let included = current.included().join(" ");
        let excluded = current.excluded().join(" ");
        self.filter = match self.input_mode {
            InputMode::Include => SolutionFilter::new().include(&text).exclude(&excluded),
            _ => SolutionFilter::new().include(&included).exclude(&text),
        };
        self.refresh_filtered();
        self.input_mode = InputMode::Results;

        let total = self.solution.as_ref().map_or(0, |s| s.combos.len());
        self.add_message(
            &format!("{} of {total} solutions match", self.filtered.len()),
            MessageStyle::Info,
        );
    }

    pub fn clear_filter(&mut self) {
        self.filter = SolutionFilter::new();
        self.refresh_filtered();
        self.add_message("Filters cleared", MessageStyle::Info);
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.pages().page_count() {
            self.page += 1;
            self.scroll = 0;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.scroll = 0;
        }
    }

    fn scroll_down(&mut self) {
        let rows = self.pages().page(self.page).len();
        if self.scroll + 1 < rows {
            self.scroll += 1;
        }
    }

    fn handle_sides_key(&mut self, code: KeyCode) -> Option<SolveJob<'a>> {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let side = &mut self.side_inputs[self.active_side];
                if side.len() < LETTERS_PER_SIDE {
                    side.push(c.to_ascii_lowercase());
                }
                if side.len() == LETTERS_PER_SIDE && self.active_side + 1 < SIDE_COUNT {
                    self.active_side += 1;
                }
            }
            KeyCode::Backspace => {
                if self.side_inputs[self.active_side].is_empty() && self.active_side > 0 {
                    self.active_side -= 1;
                }
                self.side_inputs[self.active_side].pop();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.active_side = (self.active_side + 1) % SIDE_COUNT;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active_side = (self.active_side + SIDE_COUNT - 1) % SIDE_COUNT;
            }
            KeyCode::Enter => {
                if self.sides_complete() {
                    return self.start_solve();
                }
                self.add_message(
                    "Each side needs exactly 3 letters. Enter like this: 'wvs'",
                    MessageStyle::Error,
                );
            }
            _ => {}
        }
        None
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_puzzle(),
            KeyCode::Char('i') => self.begin_filter_edit(InputMode::Include),
            KeyCode::Char('x') => self.begin_filter_edit(InputMode::Exclude),
            KeyCode::Char('c') => self.clear_filter(),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char(']') => self.next_page(),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('[') => self.previous_page(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.filter_buffer.clear();
                self.input_mode = InputMode::Results;
                self.add_message("Cancelled filter edit", MessageStyle::Info);
            }
            KeyCode::Enter => self.apply_filter_edit(),
            KeyCode::Backspace => {
                self.filter_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() || c == ' ' => {
                self.filter_buffer.push(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    /// Apply one key press to the state
    ///
    /// Returns the solve to run when the key submits a puzzle.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SolveJob<'a>> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.cancel_solve();
            self.should_quit = true;
            return None;
        }

        match self.input_mode {
            InputMode::Sides => return self.handle_sides_key(key.code),
            InputMode::Solving => {
                if key.code == KeyCode::Esc {
                    self.cancel_solve();
                }
            }
            InputMode::Results => self.handle_results_key(key.code),
            InputMode::Include | InputMode::Exclude => self.handle_filter_key(key.code),
        }
        None
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let (sender, receiver) = mpsc::channel();

    // Workers borrow the dictionary, so they run in a scope that joins them
    thread::scope(|scope| {
        let mut outcome = Ok(());
        while !app.should_quit {
            match step(terminal, &mut app, &receiver) {
                Ok(Some(job)) => {
                    let sender = sender.clone();
                    scope.spawn(move || {
                        let solution = job.run(|progress| {
                            let _ = sender.send(SolveEvent::Progress(progress));
                        });
                        let _ = sender.send(SolveEvent::Finished(solution));
                    });
                }
                Ok(None) => {}
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }

        // The scope joins the worker on exit, so stop it first
        app.cancel_solve();
        outcome
    })
}

/// Apply finished work, redraw, and handle at most one key
fn step<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<'a>,
    receiver: &mpsc::Receiver<SolveEvent>,
) -> Result<Option<SolveJob<'a>>> {
    while let Ok(event) = receiver.try_recv() {
        match event {
            SolveEvent::Progress(progress) => app.record_progress(progress),
            SolveEvent::Finished(solution) => app.finish_solve(solution),
        }
    }

    terminal.draw(|f| super::rendering::ui(f, app))?;

    if event::poll(EVENT_POLL_INTERVAL)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(app.handle_key(key));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::WordIndex;
    use crate::solver::{SearchBudget, SearchStatus};

    fn press(app: &mut App, code: KeyCode) {
        if let Some(job) = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)) {
            let mut checkpoints = Vec::new();
            let solution = job.run(|progress| checkpoints.push(progress));
            for progress in checkpoints {
                app.record_progress(progress);
            }
            app.finish_solve(solution);
        }
    }

    fn ctrl_c() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn sample_index() -> WordIndex {
        WordIndex::from_lines(["adgj", "jbehkcfil", "adg", "gjbehkcfil"])
    }

    #[test]
    fn typing_fills_sides_in_order() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));

        type_text(&mut app, "ABCdef");
        assert_eq!(app.side_inputs[0], "abc");
        assert_eq!(app.side_inputs[1], "def");
        assert_eq!(app.active_side, 2);

        // Backspace on an empty side steps back and deletes there
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.side_inputs[1], "de");
        assert_eq!(app.active_side, 1);
    }

    #[test]
    fn enter_solves_complete_puzzle() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));

        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Results);
        assert_eq!(app.filtered.len(), 2);
        assert_eq!(app.stats.puzzles_solved, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Found 4 possible words")
        );
    }

    #[test]
    fn incomplete_sides_are_not_solved() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));

        type_text(&mut app, "abcde");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Sides);
        assert!(app.solution.is_none());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("Enter like this"));
    }

    #[test]
    fn filters_narrow_results() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, InputMode::Exclude);
        type_text(&mut app, "adgj");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Results);
        assert_eq!(app.filtered, vec![vec!["adg", "gjbehkcfil"]]);

        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "jbehkcfil");
        press(&mut app, KeyCode::Enter);
        assert!(app.filtered.is_empty());
        assert_eq!(app.filter.excluded(), &["adgj".to_string()]);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.filtered.len(), 2);
    }

    #[test]
    fn escape_cancels_filter_edit() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "adg");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Results);
        assert!(app.filter.is_empty());
        assert_eq!(app.filtered.len(), 2);
    }

    #[test]
    fn new_puzzle_resets_state() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Sides);
        assert!(app.side_inputs.iter().all(String::is_empty));
        assert!(app.solution.is_none());
        assert!(app.filtered.is_empty());
    }

    #[test]
    fn paging_stays_in_range() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.page, 0);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.page, 0);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 1);
    }

    #[test]
    fn quit_keys() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        // 'q' is a letter while typing sides
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.side_inputs[0], "q");

        assert!(app.handle_key(ctrl_c()).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn enter_hands_back_a_background_solve() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");

        let job = app
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(app.input_mode, InputMode::Solving);
        assert!(app.is_solving());

        // Keys other than ESC are ignored while the search runs
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Solving);

        let solution =
            std::thread::scope(|scope| scope.spawn(|| job.run(|_| {})).join().unwrap());
        app.finish_solve(solution);

        assert!(!app.is_solving());
        assert_eq!(app.input_mode, InputMode::Results);
        assert_eq!(app.filtered.len(), 2);
    }

    #[test]
    fn escape_stops_a_running_solve() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");
        let job = app
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();

        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        assert_eq!(app.messages.last().unwrap().text, "Stopping search...");

        let solution = job.run(|_| {});
        assert_eq!(solution.stop_reason(), Some(SearchStatus::Cancelled));
        app.finish_solve(solution);

        assert_eq!(app.input_mode, InputMode::Results);
        assert!(app.filtered.is_empty());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("results are partial"))
        );
    }

    #[test]
    fn ctrl_c_stops_the_solve_and_quits() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        type_text(&mut app, "abcdefghijkl");
        let job = app
            .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();

        assert!(app.handle_key(ctrl_c()).is_none());
        assert!(app.should_quit);
        assert_eq!(job.run(|_| {}).stop_reason(), Some(SearchStatus::Cancelled));
    }

    #[test]
    fn background_solve_keeps_the_configured_limits() {
        let index = sample_index();
        let config = SolverConfig {
            budget: SearchBudget::unlimited().with_max_solutions(1),
            ..SolverConfig::default()
        };
        let mut app = App::new(Solver::new(&index, config));
        type_text(&mut app, "abcdefghijkl");
        press(&mut app, KeyCode::Enter);

        let solution = app.solution.as_ref().unwrap();
        assert_eq!(solution.combo_status, SearchStatus::SolutionLimit);
        assert_eq!(app.filtered.len(), 1);
    }

    #[test]
    fn message_log_is_bounded() {
        let index = sample_index();
        let mut app = App::new(Solver::with_defaults(&index));
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
