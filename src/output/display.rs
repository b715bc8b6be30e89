//! Display functions for command results

use super::formatters::{create_progress_bar, format_box, format_chain, format_duration, plural};
use crate::commands::{BatchResult, BenchmarkResult, SolveReport};
use crate::results::{Pages, most_efficient, most_elaborate};
use crate::solver::{MAX_CHAIN_LENGTH, Solution};
use colored::Colorize;

fn print_stop_reason(solution: &Solution) {
    if let Some(reason) = solution.stop_reason() {
        println!(
            "{}",
            format!("⚠ Search stopped early ({reason}); results are partial")
                .yellow()
                .bold()
        );
    }
}

/// Print the result of solving a puzzle
pub fn print_solve_report(report: &SolveReport) {
    let solution = &report.solution;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        solution.puzzle.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!();
    for row in format_box(&solution.puzzle) {
        println!("{}", row.bright_white().bold());
    }

    println!(
        "\n📖 {} in {} ({} steps)",
        plural(solution.words.len(), "possible word"),
        format_duration(solution.elapsed),
        solution.steps
    );
    if report.show_words {
        let mut words = solution.words.clone();
        words.sort();
        for line in words.chunks(8) {
            println!("   {}", line.join(" "));
        }
    }
    print_stop_reason(solution);

    if solution.combos.is_empty() {
        println!("\n{}", "❌ No solutions found".red().bold());
        return;
    }

    println!(
        "\n{}",
        format!("✅ {} found", plural(solution.combos.len(), "solution"))
            .green()
            .bold()
    );

    if !report.filter.is_empty() {
        if !report.filter.included().is_empty() {
            println!("   Including: {}", report.filter.included().join(" "));
        }
        if !report.filter.excluded().is_empty() {
            println!("   Excluding: {}", report.filter.excluded().join(" "));
        }
        println!("   {} match", plural(report.filtered.len(), "solution"));
        if report.filtered.is_empty() {
            return;
        }
    }

    if let Some(chain) = most_efficient(&report.filtered) {
        println!("\n✨ Most efficient: {}", format_chain(chain).bright_green().bold());
    }
    if let Some(chain) = most_elaborate(&report.filtered) {
        println!("🌀 Most elaborate: {}", format_chain(chain).bright_cyan());
    }

    let pages = Pages::new(&report.filtered, report.page_size);
    let page = pages.page(report.page);
    if page.is_empty() {
        println!(
            "\n{}",
            format!("Page {} is empty ({} pages)", report.page + 1, pages.page_count()).yellow()
        );
        return;
    }

    println!(
        "\n📜 {} {}",
        "Solutions".bright_cyan().bold(),
        format!("(page {})", pages.label(report.page)).bright_black()
    );
    let first = pages.first_item(report.page);
    for (offset, chain) in page.iter().enumerate() {
        println!(
            "   {:>4}. {}",
            (first + offset + 1).to_string().bright_black(),
            format_chain(chain)
        );
    }
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    for solution in &result.solutions {
        let puzzle = solution.puzzle.to_string().to_uppercase();
        match solution.best() {
            Some(best) => println!(
                "  {}  {} {}",
                puzzle.bright_white(),
                format_chain(best).green(),
                format!("({} total)", solution.combos.len()).bright_black()
            ),
            None => println!("  {}  {}", puzzle.bright_white(), "no solution".red()),
        }
        print_stop_reason(solution);
    }

    for rejected in &result.rejected {
        println!(
            "  {} line {}: {}",
            "skipped".yellow(),
            rejected.line,
            rejected.error
        );
    }

    let total = result.solutions.len();
    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Puzzles solved:   {}/{total}", result.solved());
    if result.incomplete() > 0 {
        println!(
            "  Stopped early:    {}",
            result.incomplete().to_string().yellow()
        );
    }
    println!("  Total time:       {}", format_duration(result.total_time));
    if total > 0 {
        println!(
            "  Time per puzzle:  {:.1}ms",
            result.total_time.as_secs_f64() * 1000.0 / total as f64
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles tested:   {} (seed {})", result.total_puzzles, result.seed);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_puzzles).green()
    );
    if result.incomplete > 0 {
        println!(
            "   Stopped early:    {}",
            result.incomplete.to_string().yellow()
        );
    }
    println!("   Avg words:        {:.1}", result.average_words);
    println!(
        "   Avg solutions:    {}",
        format!("{:.1}", result.average_combos).bright_yellow().bold()
    );
    if let (Some(min), Some(max)) = (result.min_best, result.max_best) {
        println!("   Shortest best:    {}", plural(min, "word").green());
        println!("   Longest best:     {}", plural(max, "word").yellow());
    }
    if let Some((puzzle, count)) = &result.richest {
        println!(
            "   Richest puzzle:   {} ({})",
            puzzle.to_string().to_uppercase(),
            plural(*count, "solution")
        );
    }
    println!("   Time taken:       {}", format_duration(result.duration));
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.solved == 0 {
        return;
    }
    println!("\n📈 {}", "Best chain length:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for length in 1..=MAX_CHAIN_LENGTH {
        if let Some(&count) = result.distribution.get(&length) {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(count, max_count, 40);
            println!("   {length} words: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
