use crate::data::{Challenge, ChallengeList};
use crate::results::*;
use std::collections::HashMap;

/// Determines the result of the given `guess` when applied to the given
/// `objective`.
///
/// Letters are compared ASCII case-insensitively. Repeated letters are never
/// over-credited: letters in the right location are claimed first, and each
/// remaining letter of the objective backs at most one `PresentNotHere`
/// result. For example, guessing "AABB" against the objective "ABXX" yields
/// `Correct` in location 0 and `PresentNotHere` in location 1, because the
/// objective has no second A left once location 0 is claimed.
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, GameError> {
    let objective: Vec<char> = objective.chars().map(|c| c.to_ascii_uppercase()).collect();
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    if objective.len() != guess.len() {
        return Err(GameError::MismatchedLength);
    }

    let mut unclaimed: HashMap<char, u8> = HashMap::new();
    for letter in objective.iter() {
        *unclaimed.entry(*letter).or_insert(0) += 1;
    }

    let mut results = vec![LetterResult::NotPresent; guess.len()];
    for (index, letter) in guess.iter().enumerate() {
        if objective[index] == *letter {
            results[index] = LetterResult::Correct;
            if let Some(count) = unclaimed.get_mut(letter) {
                *count -= 1;
            }
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(letter) {
            if *count > 0 {
                *count -= 1;
                results[index] = LetterResult::PresentNotHere;
            }
        }
    }

    Ok(GuessResult {
        guess: guess.iter().collect(),
        results,
    })
}

/// Where the session stands after a call to [`DateSession::advance`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RoundState<'a> {
    /// The session has moved to, or remains on, the given round.
    Round {
        index: usize,
        challenge: &'a Challenge,
    },
    /// The final round has been resolved; no further rounds are accessible.
    Complete,
}

/// Plays the date-guessing game over an ordered list of challenges.
///
/// Each round accepts attempts until one matches both fields exactly or the
/// attempt budget runs out, then waits for [`advance`](DateSession::advance).
/// The session only ever sees complete, fixed-width guesses; collecting raw
/// keystrokes and rejecting out-of-alphabet characters is the caller's job.
/// All operations run to completion synchronously, so the caller may drive
/// the session immediately or after an arbitrary delay with identical
/// results.
pub struct DateSession<'a> {
    challenges: &'a ChallengeList,
    round: usize,
    history: Vec<AttemptRecord>,
    phase: RoundPhase,
    complete: bool,
}

impl<'a> DateSession<'a> {
    /// Starts a new session at round 0. A session over an empty challenge
    /// list is complete from the start.
    pub fn new(challenges: &'a ChallengeList) -> DateSession<'a> {
        DateSession {
            challenges,
            round: 0,
            history: Vec::new(),
            phase: RoundPhase::AwaitingInput,
            complete: challenges.is_empty(),
        }
    }

    /// The challenge currently being played, or `None` once the session is
    /// complete.
    pub fn current_challenge(&self) -> Option<&'a Challenge> {
        if self.complete {
            return None;
        }
        self.challenges.get(self.round)
    }

    /// The zero-based index of the round currently being played.
    pub fn round_index(&self) -> usize {
        self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The attempts submitted so far in the active round, oldest first.
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// The number of attempts still available in the active round.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempt_budget()
            .saturating_sub(self.history.len() as u32)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Evaluates a complete month/year attempt against the active round.
    ///
    /// Fails with [`GameError::IncompleteInput`] if either guess has unfilled
    /// slots or the round is already resolved; the session is unchanged in
    /// that case. Otherwise the attempt is appended to the round's history
    /// and the round resolves to won, lost, or keeps accepting input. A full
    /// match on the final allowed attempt still wins: the win check runs
    /// before the budget check.
    pub fn submit_attempt(
        &mut self,
        month_guess: &str,
        year_guess: &str,
    ) -> Result<AttemptOutcome, GameError> {
        if self.complete || self.phase != RoundPhase::AwaitingInput {
            return Err(GameError::IncompleteInput);
        }
        let challenge = match self.challenges.get(self.round) {
            Some(challenge) => challenge,
            None => return Err(GameError::IncompleteInput),
        };
        if !is_fully_specified(month_guess, challenge.month().chars().count())
            || !is_fully_specified(year_guess, challenge.year().chars().count())
        {
            return Err(GameError::IncompleteInput);
        }

        let month = get_result_for_guess(challenge.month(), month_guess)?;
        let year = get_result_for_guess(challenge.year(), year_guess)?;
        let record = AttemptRecord { month, year };
        let won = record.is_winning();
        self.history.push(record);

        if won {
            self.phase = RoundPhase::Won;
            return Ok(AttemptOutcome::Won);
        }
        // Reaching the budget on this submission ends the round.
        if self.history.len() as u32 >= self.attempt_budget() {
            self.phase = RoundPhase::Lost;
            return Ok(AttemptOutcome::Lost {
                month: challenge.month().to_string(),
                year: challenge.year().to_string(),
            });
        }
        Ok(AttemptOutcome::TryAgain)
    }

    /// Steps past a resolved round: on to the next challenge with a fresh
    /// history, or to [`RoundState::Complete`] if the final round was just
    /// resolved. Calling this while the round is still accepting input
    /// changes nothing and reports the current round.
    pub fn advance(&mut self) -> RoundState<'a> {
        if self.complete {
            return RoundState::Complete;
        }
        if self.phase != RoundPhase::AwaitingInput {
            if self.round + 1 < self.challenges.len() {
                self.round += 1;
                self.history.clear();
                self.phase = RoundPhase::AwaitingInput;
            } else {
                self.complete = true;
                return RoundState::Complete;
            }
        }
        match self.challenges.get(self.round) {
            Some(challenge) => RoundState::Round {
                index: self.round,
                challenge,
            },
            None => RoundState::Complete,
        }
    }

    /// Resets the session to round 0 with an empty history, discarding all
    /// prior progress.
    pub fn restart(&mut self) {
        *self = DateSession::new(self.challenges);
    }

    fn attempt_budget(&self) -> u32 {
        match self.current_challenge().and_then(|c| c.attempt_budget()) {
            Some(budget) => budget,
            None => self.challenges.default_attempt_budget(),
        }
    }
}

/// A guess is fully specified when every slot is filled: the length matches
/// the objective and no slot holds whitespace.
fn is_fully_specified(guess: &str, objective_len: usize) -> bool {
    guess.chars().count() == objective_len && !guess.chars().any(|c| c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_result_for_guess_all_correct() -> Result<(), GameError> {
        let result = get_result_for_guess("MAY", "MAY")?;

        assert_eq!(result.results, vec![LetterResult::Correct; 3]);
        assert!(result.is_full_match());
        Ok(())
    }

    #[test]
    fn get_result_for_guess_no_shared_letters() -> Result<(), GameError> {
        let result = get_result_for_guess("2015", "3648")?;

        assert_eq!(result.results, vec![LetterResult::NotPresent; 4]);
        assert!(!result.is_full_match());
        Ok(())
    }

    #[test]
    fn get_result_for_guess_duplicate_letters_not_over_credited() -> Result<(), GameError> {
        let result = get_result_for_guess("ABXX", "AABB")?;

        assert_eq!(
            result.results,
            vec![
                LetterResult::Correct,
                LetterResult::PresentNotHere,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ]
        );
        Ok(())
    }

    #[test]
    fn get_result_for_guess_exact_claim_beats_earlier_present() -> Result<(), GameError> {
        // The only B in the objective is claimed by the exact match in
        // location 2, so the B in location 0 scores nothing.
        let result = get_result_for_guess("XABY", "BABX")?;

        assert_eq!(
            result.results,
            vec![
                LetterResult::NotPresent,
                LetterResult::Correct,
                LetterResult::Correct,
                LetterResult::PresentNotHere,
            ]
        );
        Ok(())
    }

    #[test]
    fn get_result_for_guess_is_case_insensitive() -> Result<(), GameError> {
        let result = get_result_for_guess("May", "mAy")?;

        assert_eq!(result.guess, "MAY");
        assert!(result.is_full_match());
        Ok(())
    }

    #[test]
    fn get_result_for_guess_mismatched_length() {
        assert_eq!(
            get_result_for_guess("MAY", "JUNE"),
            Err(GameError::MismatchedLength)
        );
    }

    #[test]
    fn attempts_remaining_honors_per_round_budget() {
        let challenges = ChallengeList::from_vec(vec![
            Challenge::new("a.png", "MAY", "2015").with_attempt_budget(5)
        ]);
        let session = DateSession::new(&challenges);

        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn empty_challenge_list_is_complete_immediately() {
        let challenges = ChallengeList::from_vec(Vec::new());
        let mut session = DateSession::new(&challenges);

        assert!(session.is_complete());
        assert_eq!(session.current_challenge(), None);
        assert_eq!(session.advance(), RoundState::Complete);
        assert_eq!(
            session.submit_attempt("MAY", "2015"),
            Err(GameError::IncompleteInput)
        );
    }
}
