#[macro_use]
extern crate assert_matches;

use rs_milestone_games::*;

fn two_round_list() -> ChallengeList {
    ChallengeList::from_vec(vec![
        Challenge::new("memory1.png", "MAY", "2015"),
        Challenge::new("memory2.png", "AUG", "2019"),
    ])
}

#[test]
fn a_correct_attempt_wins_the_round() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);

    let outcome = session.submit_attempt("MAY", "2015");

    assert_eq!(outcome, Ok(AttemptOutcome::Won));
    assert_eq!(session.phase(), RoundPhase::Won);
    assert_eq!(session.history().len(), 1);
    assert!(session.history()[0].is_winning());
}

#[test]
fn an_incorrect_attempt_keeps_the_round_open() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);

    let outcome = session.submit_attempt("JUN", "2016");

    assert_eq!(outcome, Ok(AttemptOutcome::TryAgain));
    assert_eq!(session.phase(), RoundPhase::AwaitingInput);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.attempts_remaining(), DEFAULT_ATTEMPT_BUDGET - 1);
}

#[test]
fn exhausting_the_budget_loses_the_round_and_reveals_the_answer() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);

    assert_eq!(session.submit_attempt("JAN", "2010"), Ok(AttemptOutcome::TryAgain));
    assert_eq!(session.submit_attempt("FEB", "2011"), Ok(AttemptOutcome::TryAgain));
    let outcome = session.submit_attempt("MAR", "2012");

    assert_eq!(
        outcome,
        Ok(AttemptOutcome::Lost {
            month: "MAY".to_string(),
            year: "2015".to_string(),
        })
    );
    assert_eq!(session.phase(), RoundPhase::Lost);
    assert_eq!(session.attempts_remaining(), 0);
}

#[test]
fn a_full_match_on_the_final_attempt_still_wins() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);

    session.submit_attempt("JAN", "2010").unwrap();
    session.submit_attempt("FEB", "2011").unwrap();
    let outcome = session.submit_attempt("MAY", "2015");

    assert_eq!(outcome, Ok(AttemptOutcome::Won));
    assert_eq!(session.phase(), RoundPhase::Won);
}

#[test]
fn a_resolved_round_rejects_further_attempts_without_state_change() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);
    session.submit_attempt("MAY", "2015").unwrap();

    let result = session.submit_attempt("JUN", "2016");

    assert_eq!(result, Err(GameError::IncompleteInput));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.phase(), RoundPhase::Won);
}

#[test]
fn unfilled_slots_are_rejected_without_state_change() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);

    assert_eq!(session.submit_attempt("MA", "2015"), Err(GameError::IncompleteInput));
    assert_eq!(session.submit_attempt("MAY", "201"), Err(GameError::IncompleteInput));
    assert_eq!(session.submit_attempt("M Y", "2015"), Err(GameError::IncompleteInput));
    assert_eq!(session.submit_attempt("", ""), Err(GameError::IncompleteInput));

    assert!(session.history().is_empty());
    assert_eq!(session.attempts_remaining(), DEFAULT_ATTEMPT_BUDGET);
}

#[test]
fn advance_moves_to_the_next_round_with_a_fresh_history() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);
    session.submit_attempt("MAY", "2015").unwrap();

    let state = session.advance();

    assert_matches!(state, RoundState::Round { index: 1, challenge } if challenge.photo() == "memory2.png");
    assert_eq!(session.round_index(), 1);
    assert!(session.history().is_empty());
    assert_eq!(session.phase(), RoundPhase::AwaitingInput);
}

#[test]
fn advance_on_an_unresolved_round_changes_nothing() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);
    session.submit_attempt("JUN", "2016").unwrap();

    let state = session.advance();

    assert_matches!(state, RoundState::Round { index: 0, .. });
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.phase(), RoundPhase::AwaitingInput);
}

#[test]
fn advancing_past_the_final_round_completes_the_session() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);
    session.submit_attempt("MAY", "2015").unwrap();
    session.advance();
    session.submit_attempt("AUG", "2019").unwrap();

    let state = session.advance();

    assert_eq!(state, RoundState::Complete);
    assert!(session.is_complete());
    assert_eq!(session.current_challenge(), None);
    // Advancing again stays complete; completion is stable.
    assert_eq!(session.advance(), RoundState::Complete);
}

#[test]
fn a_lost_final_round_also_completes_the_session() {
    let challenges = ChallengeList::from_vec(vec![Challenge::new("memory1.png", "MAY", "2015")]);
    let mut session = DateSession::new(&challenges);
    session.submit_attempt("JAN", "2010").unwrap();
    session.submit_attempt("FEB", "2011").unwrap();
    assert_matches!(
        session.submit_attempt("MAR", "2012"),
        Ok(AttemptOutcome::Lost { .. })
    );

    assert_eq!(session.advance(), RoundState::Complete);
    assert!(session.is_complete());
}

#[test]
fn restart_discards_all_progress() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);
    session.submit_attempt("MAY", "2015").unwrap();
    session.advance();
    session.submit_attempt("AUG", "2019").unwrap();
    session.advance();
    assert!(session.is_complete());

    session.restart();

    assert!(!session.is_complete());
    assert_eq!(session.round_index(), 0);
    assert!(session.history().is_empty());
    assert_eq!(session.phase(), RoundPhase::AwaitingInput);
}

#[test]
fn a_per_round_budget_override_controls_exhaustion() {
    let challenges = ChallengeList::from_vec(vec![
        Challenge::new("memory1.png", "MAY", "2015").with_attempt_budget(1)
    ]);
    let mut session = DateSession::new(&challenges);

    assert_matches!(
        session.submit_attempt("JUN", "2016"),
        Ok(AttemptOutcome::Lost { .. })
    );
}

#[test]
fn guesses_are_case_insensitive() {
    let challenges = two_round_list();
    let mut session = DateSession::new(&challenges);

    assert_eq!(session.submit_attempt("may", "2015"), Ok(AttemptOutcome::Won));
}
