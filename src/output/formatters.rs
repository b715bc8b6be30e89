//! Formatting utilities for terminal output

use crate::core::Puzzle;
use std::time::Duration;

/// Separator placed between the words of a chain
pub const CHAIN_SEPARATOR: &str = " → ";

/// Format a word chain as uppercase words joined by arrows
#[must_use]
pub fn format_chain(chain: &[String]) -> String {
    chain
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// Draw the box as five text rows
///
/// Sides run clockwise from the top: the first side reads left to right
/// along the top, the second down the right edge, the third right to left
/// along the bottom and the fourth up the left edge.
#[must_use]
pub fn format_box(puzzle: &Puzzle) -> [String; 5] {
    let upper = |letter: u8| letter.to_ascii_uppercase() as char;
    let [top, right, bottom, left] = puzzle.sides().map(|side| *side.letters());

    let edge = |letters: [u8; 3]| {
        format!(
            "    {}   {}   {}",
            upper(letters[0]),
            upper(letters[1]),
            upper(letters[2])
        )
    };
    let row = |i: usize| format!("  {}           {}", upper(left[2 - i]), upper(right[i]));

    [
        edge(top),
        row(0),
        row(1),
        row(2),
        edge([bottom[2], bottom[1], bottom[0]]),
    ]
}

/// Create a bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width).div_ceil(max)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-friendly duration: milliseconds below one second
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_secs(1) {
        format!("{:.1}ms", duration.as_secs_f64() * 1000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// "1 word" / "3 words"
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn chain_is_uppercased_and_joined() {
        assert_eq!(format_chain(&chain(&["adgj", "jbehkcfil"])), "ADGJ → JBEHKCFIL");
        assert_eq!(format_chain(&chain(&["lad"])), "LAD");
        assert_eq!(format_chain(&[]), "");
    }

    #[test]
    fn box_runs_clockwise() {
        let puzzle = Puzzle::parse("abc-def-ghi-jkl").unwrap();
        let rows = format_box(&puzzle);
        assert_eq!(rows[0], "    A   B   C");
        assert_eq!(rows[1], "  L           D");
        assert_eq!(rows[2], "  K           E");
        assert_eq!(rows[3], "  J           F");
        assert_eq!(rows[4], "    I   H   G");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_tiny_value_shows_one_cell() {
        assert_eq!(create_progress_bar(1, 1000, 10), "█░░░░░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5, 0, 4), "░░░░");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250.0ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural(1, "word"), "1 word");
        assert_eq!(plural(0, "word"), "0 words");
        assert_eq!(plural(12, "combo"), "12 combos");
    }
}
