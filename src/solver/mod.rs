//! Solving engine
//!
//! The guesser narrows the candidate answers and proposes guesses using the
//! partition heuristic; the session drives it turn by turn.

mod config;
mod error;
mod guesser;
pub mod partition;
mod pool;
pub mod progress;
mod session;

pub use config::{DEFAULT_OPENING, SolverConfig};
pub use error::SolverError;
pub use guesser::Guesser;
pub use pool::GuessPool;
pub use progress::ScanObserver;
pub use session::{FeedbackSource, Oracle, Reply, Session, SessionState, Turn};
