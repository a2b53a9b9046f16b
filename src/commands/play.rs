//! Interactive mode
//!
//! The solver proposes a guess, the human types the result the game showed,
//! and the loop repeats until the answer is pinned down.

use crate::core::Word;
use crate::output::formatters::thinking_bar;
use crate::output::print_banner;
use crate::solver::{
    FeedbackSource, GuessPool, Reply, Session, SessionState, SolverConfig, SolverError, Turn,
};
use colored::Colorize;
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};

/// Run the interactive prompt on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails for any reason other than the
/// input ending, which quits quietly.
pub fn run_play(
    config: &SolverConfig,
    answers: &[Word],
    guesses: &[Word],
) -> Result<(), SolverError> {
    print_banner();

    let mut session = Session::new(config, answers.to_vec(), GuessPool::new(guesses.to_vec()));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut ask = |guess: &Word| -> io::Result<Reply> {
        println!("Robot Guess - {}", guess.text().bright_cyan().bold());
        print!("     Result - ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(Reply::from_input(&line))
    };

    while session.guesser().chances() > 1 && !session.out_of_turns() {
        match play_turn(&mut session, &mut ask, &thinking_bar()) {
            Ok(Turn::Filtered { before, after, .. }) => {
                println!("# of Words: {before} -> {after}");
            }
            Ok(Turn::Rejected { guess }) => {
                println!("Removing Word: {}", guess.text().yellow());
            }
            Err(SolverError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!("\n\nBye!");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
        println!();
    }

    match session.state() {
        SessionState::Solved(answer) => {
            println!("Answer - {}", answer.text().bright_green().bold());
        }
        SessionState::Exhausted => {
            println!("{}", "There are no possible answers :(".red().bold());
            println!("The word you picked is likely not in the answer set.");
        }
        SessionState::Active => {
            println!(
                "Stopped after {} turns with {} words left.",
                session.turns().len(),
                session.guesser().chances()
            );
        }
    }

    Ok(())
}

/// Play one turn with `bar` showing the scoring scan
///
/// The bar is cleared even when no scan ran, as on the opening turn.
fn play_turn<S>(
    session: &mut Session,
    source: &mut S,
    bar: &ProgressBar,
) -> Result<Turn, SolverError>
where
    S: FeedbackSource + ?Sized,
{
    let turn = session.step(source, bar).cloned();
    bar.finish_and_clear();
    turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn session(config: &SolverConfig) -> Session {
        let answers = words_from_slice(&["abide", "abode", "above", "sugar"]);
        let pool = words_from_slice(&["abide", "abode", "above", "sugar", "trace"]);
        Session::new(config, answers, GuessPool::new(pool))
    }

    #[test]
    fn opening_turn_clears_thinking_bar() {
        let mut session = session(&SolverConfig::default());
        let bar = ProgressBar::hidden();
        let mut typed = |_: &Word| -> io::Result<Reply> { Ok(Reply::from_input("_____\n")) };

        let turn = play_turn(&mut session, &mut typed, &bar).unwrap();
        assert_eq!(turn.guess().text(), "trace");
        assert!(bar.is_finished());
    }

    #[test]
    fn scored_turn_clears_thinking_bar() {
        let mut session = session(&SolverConfig::without_opening());
        let bar = ProgressBar::hidden();
        let mut typed = |_: &Word| -> io::Result<Reply> { Ok(Reply::from_input("\n")) };

        let turn = play_turn(&mut session, &mut typed, &bar).unwrap();
        assert!(matches!(turn, Turn::Rejected { .. }));
        assert!(bar.is_finished());
    }
}
