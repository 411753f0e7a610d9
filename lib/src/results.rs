use std::fmt;

/// The result of a given letter at a specific location.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// Indicates that an error occurred while running one of the games.
///
/// Every error is local and recoverable: the caller re-prompts the player and
/// tries again. No error leaves a session in a modified state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    /// Indicates that a guess and its objective have different lengths.
    ///
    /// [`DateSession`](crate::DateSession) validates lengths before
    /// evaluating, so this is only reachable by calling
    /// [`get_result_for_guess`](crate::get_result_for_guess) directly.
    MismatchedLength,
    /// Indicates that an attempt was submitted with unfilled slots, or on a
    /// round that was already resolved.
    IncompleteInput,
    /// Indicates that a group was submitted without exactly four items
    /// selected.
    InvalidSelectionSize,
    /// Indicates that a grouped-item catalog is malformed, e.g. a duplicate
    /// item label or a group without exactly four members.
    InvalidCatalog,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MismatchedLength => {
                write!(f, "the guess and the objective have different lengths")
            }
            GameError::IncompleteInput => {
                write!(f, "the attempt is incomplete or the round is already resolved")
            }
            GameError::InvalidSelectionSize => {
                write!(f, "exactly four items must be selected to submit a group")
            }
            GameError::InvalidCatalog => {
                write!(f, "the grouped-item catalog is malformed")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// The evaluated result of a single guess.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResult {
    /// The guess as evaluated, normalized to upper case.
    pub guess: String,
    /// The result of each letter, provided in the same letter order as in the
    /// guess.
    pub results: Vec<LetterResult>,
}

impl GuessResult {
    /// Returns `true` iff every letter was in the right location.
    pub fn is_full_match(&self) -> bool {
        self.results.iter().all(|lr| *lr == LetterResult::Correct)
    }
}

/// One submitted attempt at a round: the month and year guesses along with
/// their evaluated results.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttemptRecord {
    pub month: GuessResult,
    pub year: GuessResult,
}

impl AttemptRecord {
    /// Returns `true` iff both fields matched the challenge exactly.
    pub fn is_winning(&self) -> bool {
        self.month.is_full_match() && self.year.is_full_match()
    }
}

/// Whether the active round is still accepting attempts or has been resolved.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RoundPhase {
    AwaitingInput,
    Won,
    Lost,
}

/// The outcome of a single submitted attempt.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AttemptOutcome {
    /// Both fields matched exactly. The round is resolved as won.
    Won,
    /// The attempt budget is exhausted. The round is resolved as lost, and
    /// the true answers are provided for display.
    Lost { month: String, year: String },
    /// The attempt did not match and attempts remain; the round keeps
    /// accepting input.
    TryAgain,
}
