//! Simple interactive CLI mode
//!
//! Line-prompt solver without TUI: enter four sides, then page through the
//! solutions a batch at a time.

use crate::core::{Puzzle, SIDE_COUNT, Side};
use crate::output::formatters::{format_box, format_chain, format_duration, plural};
use crate::results::{DEFAULT_PAGE_SIZE, Pages, most_efficient, most_elaborate};
use crate::solver::{Progress, Solution, Solver};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(solver: &Solver<'_>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), DEFAULT_PAGE_SIZE);
    session.run(solver)
}

/// Prompt loop over any reader/writer pair
pub struct Session<R, W> {
    input: R,
    output: W,
    page_size: usize,
}

fn io_err(e: io::Error) -> String {
    e.to_string()
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

fn is_yes(input: &str) -> bool {
    matches!(input, "yes" | "y")
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W, page_size: usize) -> Self {
        Self {
            input,
            output,
            page_size,
        }
    }

    /// Consume the session, handing back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the prompt loop until the user quits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    pub fn run(&mut self, solver: &Solver<'_>) -> Result<(), String> {
        writeln!(self.output, "\n╔══════════════════════════════════════════════════════════════╗")
            .map_err(io_err)?;
        writeln!(self.output, "║            Letter Boxed Solver - Interactive Mode            ║")
            .map_err(io_err)?;
        writeln!(self.output, "╚══════════════════════════════════════════════════════════════╝\n")
            .map_err(io_err)?;
        writeln!(
            self.output,
            "Enter the four sides of the box, three letters each (like 'wvs')."
        )
        .map_err(io_err)?;
        writeln!(self.output, "Commands: 'quit' to exit\n").map_err(io_err)?;

        loop {
            let Some(puzzle) = self.read_puzzle()? else {
                break;
            };

            let solution = self.solve(solver, &puzzle)?;
            if !self.show_solutions(&solution)? {
                break;
            }
            if !self.confirm("Solve another puzzle? (yes/no)")? {
                break;
            }
            writeln!(self.output).map_err(io_err)?;
        }

        writeln!(self.output, "\n👋 Thanks for playing!\n").map_err(io_err)?;
        Ok(())
    }

    /// Read one trimmed, lowercased line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.output, "{prompt}: ").map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut input = String::new();
        let read = self.input.read_line(&mut input).map_err(io_err)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_lowercase()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, String> {
        Ok(self.prompt(prompt)?.is_some_and(|answer| is_yes(&answer)))
    }

    /// Ask for each side until it parses; `None` if the user quits
    fn read_puzzle(&mut self) -> Result<Option<Puzzle>, String> {
        let mut sides = Vec::with_capacity(SIDE_COUNT);

        while sides.len() < SIDE_COUNT {
            let label = format!("Side {}", sides.len() + 1);
            let Some(input) = self.prompt(&label)? else {
                return Ok(None);
            };
            if is_quit(&input) {
                return Ok(None);
            }
            match Side::parse(&input) {
                Ok(side) => sides.push(side),
                Err(e) => {
                    writeln!(self.output, "❌ {e}. Enter like this: 'wvs'\n").map_err(io_err)?;
                }
            }
        }

        let mut array = [sides[0]; SIDE_COUNT];
        array.copy_from_slice(&sides);
        Ok(Some(Puzzle::new(array)))
    }

    fn solve(&mut self, solver: &Solver<'_>, puzzle: &Puzzle) -> Result<Solution, String> {
        writeln!(self.output).map_err(io_err)?;
        for row in format_box(puzzle) {
            writeln!(self.output, "{}", row.bright_white().bold()).map_err(io_err)?;
        }
        writeln!(self.output).map_err(io_err)?;

        let mut messages = Vec::new();
        let solution = solver.solve_with_progress(puzzle, |progress| {
            messages.push(match progress {
                Progress::IndexReady { words } => format!("Dictionary ready: {words} words"),
                Progress::WordsDiscovered { count } => {
                    format!("Found {}", plural(count, "possible word"))
                }
                Progress::CombosFound { count } => format!("Found {}", plural(count, "combo")),
            });
        });
        for message in messages {
            writeln!(self.output, "  {message}").map_err(io_err)?;
        }
        writeln!(
            self.output,
            "  Solved in {}",
            format_duration(solution.elapsed)
        )
        .map_err(io_err)?;
        if let Some(reason) = solution.stop_reason() {
            writeln!(
                self.output,
                "{}",
                format!("  ⚠ Search stopped early ({reason}); results are partial").yellow()
            )
            .map_err(io_err)?;
        }
        writeln!(self.output).map_err(io_err)?;

        Ok(solution)
    }

    /// Show solutions a page at a time; `false` if the user quit
    fn show_solutions(&mut self, solution: &Solution) -> Result<bool, String> {
        if solution.combos.is_empty() {
            writeln!(self.output, "{}", "No solutions found.".red()).map_err(io_err)?;
            return Ok(true);
        }

        if let Some(chain) = most_efficient(&solution.combos) {
            writeln!(self.output, "Most efficient: {}", format_chain(chain).green())
                .map_err(io_err)?;
        }
        if let Some(chain) = most_elaborate(&solution.combos) {
            writeln!(self.output, "Most elaborate: {}", format_chain(chain).cyan())
                .map_err(io_err)?;
        }
        writeln!(self.output).map_err(io_err)?;

        let pages = Pages::new(&solution.combos, self.page_size);
        for (index, page) in pages.iter().enumerate() {
            let first = pages.first_item(index);
            for (offset, chain) in page.iter().enumerate() {
                writeln!(
                    self.output,
                    "  {:>4}. {}",
                    first + offset + 1,
                    format_chain(chain)
                )
                .map_err(io_err)?;
            }

            if index + 1 == pages.page_count() {
                writeln!(self.output, "\nThat's all {}.", plural(solution.combos.len(), "solution"))
                    .map_err(io_err)?;
                break;
            }

            let Some(answer) = self.prompt(&format!("Show more? [{}] (yes/no)", pages.label(index)))?
            else {
                return Ok(false);
            };
            if is_quit(&answer) {
                return Ok(false);
            }
            if !is_yes(&answer) {
                break;
            }
        }

        Ok(true)
    }
}
