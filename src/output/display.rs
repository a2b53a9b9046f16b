//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{Feedback, Word, compare};
use crate::solver::{SessionState, Turn};
use colored::Colorize;

/// Worked examples shown in the banner, as (target, guess)
const EXAMPLES: [(&str, &str); 4] = [
    ("sugar", "trace"),
    ("sugar", "samba"),
    ("whack", "trace"),
    ("whack", "shuln"),
];

/// Print the welcome banner with the result-entry legend
pub fn print_banner() {
    println!();
    println!("    {}", "Welcome to the Wordle Splitter!".bright_cyan().bold());
    println!("        guesses that split the answers the most");
    println!();
    println!("When Typing in the Result:");
    println!("    1) G - Letter in Correct Spot");
    println!("    2) W - Letter in Wrong Spot");
    println!("    3) _ - Letter not in word");
    println!("    Press Enter on an empty line if the game does not accept the word.");
    println!();
    println!("Examples:");
    for (target, guess) in EXAMPLES {
        let example = Word::new(target)
            .and_then(|t| Word::new(guess).map(|g| compare(&t, &g)))
            .map_or_else(|_| String::from("?????"), |feedback| feedback.to_string());
        println!("   - {target} : {guess} = {example}");
    }
    println!();
}

/// Print the result of a debug auto-play session
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        match &step.turn {
            Turn::Filtered {
                guess,
                feedback,
                before,
                after,
            } => {
                println!(
                    "\nTurn {turn}: {} {} {}",
                    colored_guess(guess, *feedback),
                    feedback,
                    feedback_to_emoji(*feedback)
                );
                if verbose {
                    println!("  Candidates: {before} → {after}");
                    println!("  Classes:    {}", step.classes);
                }
            }
            Turn::Rejected { guess } => {
                println!("\nTurn {turn}: {} rejected", guess.text().to_uppercase().yellow());
            }
        }
    }

    println!();
    match &result.outcome {
        SessionState::Solved(answer) => {
            println!("Answer - {}", colored_guess(answer, Feedback::SOLVED));
            if let Some(used) = result.guesses_used() {
                let line = format!("Solved in {used} guesses");
                if result.found_target() {
                    println!("{}", line.green().bold());
                } else {
                    let miss = format!("{line}, but the target was different");
                    println!("{}", miss.red().bold());
                }
            }
        }
        SessionState::Exhausted => {
            println!("{}", "There are no possible answers :(".red().bold());
            println!("The word you picked is likely not in the answer set.");
        }
        SessionState::Active => {
            let line = format!("Gave up after {} turns", result.steps.len());
            println!("{}", line.red().bold());
        }
    }

    println!();
    println!("Target - {}", result.target);
    println!("    - [In Answer Set? {}]", yes_no(result.in_answer_set));
    println!("    - [In Total Set?  {}]", yes_no(result.in_guess_set));
}

fn yes_no(flag: bool) -> String {
    if flag {
        "True".green().to_string()
    } else {
        "False".red().to_string()
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = create_progress_bar(
        metrics.classes as f64,
        result.total_candidates.min(Feedback::COUNT) as f64,
        30,
    );

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Classes:     [{}] {}",
        bar.green(),
        metrics.classes.to_string().bright_yellow()
    );
    println!("   Largest:     {} candidates", metrics.largest_class);
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Answer?      {}", yes_no(result.is_possible_answer));
    println!("   Guessable?   {}", yes_no(result.in_guess_pool));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved.to_string().green());
    if !result.unresolved.is_empty() {
        println!(
            "   Unresolved:       {}",
            result.unresolved.len().to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.unresolved.is_empty() {
        println!("\n😰 {}", "Unresolved targets:".yellow().bold());
        for word in result.unresolved.iter().take(10) {
            println!("   {}", word.text().to_uppercase().yellow());
        }
    }
}
