//! End-to-end tests driving the solver the way a caller would:
//! select a guess, obtain feedback, record it, repeat.

use std::time::Duration;
use wordle_engine::config::SolverConfig;
use wordle_engine::core::{Pattern, Word};
use wordle_engine::game::{GameError, GameState, MAX_TURNS};
use wordle_engine::lexicon::Lexicon;
use wordle_engine::solver::{FilterPolicy, GuessSelector};

fn selector(budget: Duration) -> GuessSelector {
    GuessSelector::new(&SolverConfig::with_time_budget(budget)).unwrap()
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

/// Play one full game against a known answer using local simulation.
fn play(answer: &str, lexicon: &Lexicon, selector: &GuessSelector) -> GameState {
    let answer = word(answer);
    let mut state = GameState::new(lexicon.answers().to_vec()).unwrap();

    while !state.is_over() {
        let guess = selector
            .select_guess(state.candidates(), state.turn(), lexicon.allowed())
            .unwrap();
        let pattern = Pattern::simulate(&guess, &answer);
        state
            .record_guess(guess, pattern, FilterPolicy::Strict)
            .unwrap();
    }

    state
}

#[test]
fn solves_answers_within_six_guesses() {
    let lexicon = Lexicon::embedded();
    let selector = selector(Duration::from_secs(2));

    for answer in ["CRANE", "SLATE", "ROBOT", "YOUTH"] {
        let state = play(answer, &lexicon, &selector);
        assert!(state.is_solved(), "{answer} was not solved");
        assert!(!state.is_failed());
        assert!(state.history().len() <= usize::from(MAX_TURNS));
        assert_eq!(state.history().last().unwrap().word.text(), answer);
    }
}

#[test]
fn first_guess_is_the_precomputed_constant() {
    let lexicon = Lexicon::embedded();
    let selector = selector(Duration::from_secs(1));

    let state = GameState::new(lexicon.answers().to_vec()).unwrap();
    let guess = selector
        .select_guess(state.candidates(), state.turn(), lexicon.allowed())
        .unwrap();

    assert_eq!(guess.text(), "SALET");
}

#[test]
fn candidates_shrink_monotonically_through_a_game() {
    let lexicon = Lexicon::embedded();
    let selector = selector(Duration::from_secs(2));
    let answer = word("GHOST");

    let mut state = GameState::new(lexicon.answers().to_vec()).unwrap();
    let mut previous = state.candidates().len();

    while !state.is_over() {
        let guess = selector
            .select_guess(state.candidates(), state.turn(), lexicon.allowed())
            .unwrap();
        let pattern = Pattern::simulate(&guess, &answer);
        state
            .record_guess(guess, pattern, FilterPolicy::Strict)
            .unwrap();

        if !state.is_over() {
            assert!(state.candidates().len() <= previous);
            previous = state.candidates().len();
        }
    }

    assert!(state.is_solved());
}

#[test]
fn near_zero_budget_still_produces_guesses() {
    let lexicon = Lexicon::embedded();
    let selector = selector(Duration::ZERO);

    let state = GameState::new(lexicon.answers().to_vec()).unwrap();

    // Turn 2 forces the budgeted search path; with no budget the selector
    // must fall back rather than hang or error.
    let guess = selector
        .select_guess(state.candidates(), 2, lexicon.allowed())
        .unwrap();

    assert!(lexicon.allowed().contains(&guess));
}

#[test]
fn six_wrong_guesses_fail_the_game() {
    let lexicon = Lexicon::embedded();
    let answer = word("CRANE");

    let mut state = GameState::new(lexicon.answers().to_vec()).unwrap();

    // JUMPY shares no letters with CRANE, so every guess is wrong and the
    // all-absent feedback still leaves candidates alive each turn.
    for _ in 0..MAX_TURNS {
        let guess = word("JUMPY");
        let pattern = Pattern::simulate(&guess, &answer);
        assert!(!pattern.is_all_correct());
        state
            .record_guess(guess, pattern, FilterPolicy::Strict)
            .unwrap();
    }

    assert!(state.is_failed());
    assert!(!state.is_solved());
    assert_eq!(state.turn(), 7);
}

#[test]
fn permissive_recovers_where_strict_contradicts() {
    // A noisy source marks one E of GEESE present even though the answer
    // has only the green one. Strict filtering contradicts; permissive
    // keeps the true answer alive.
    let candidates: Vec<Word> = ["CRANE", "GRAPE", "SLATE"]
        .iter()
        .map(|s| word(s))
        .collect();
    let noisy: Pattern = "-o--+".parse().unwrap();

    let mut strict_state = GameState::new(candidates.clone()).unwrap();
    let err = strict_state
        .record_guess(word("GEESE"), noisy, FilterPolicy::Strict)
        .unwrap_err();
    assert!(matches!(err, GameError::Contradiction(_)));

    let mut permissive_state = GameState::new(candidates).unwrap();
    permissive_state
        .record_guess(word("GEESE"), noisy, FilterPolicy::Permissive)
        .unwrap();
    assert_eq!(permissive_state.candidates().len(), 1);
    assert_eq!(permissive_state.candidates()[0].text(), "CRANE");
}

#[test]
fn independent_games_run_in_parallel() {
    use std::sync::Arc;
    use std::thread;

    let lexicon = Arc::new(Lexicon::embedded());
    let mut handles = Vec::new();

    for answer in ["CRANE", "SLATE", "MUSIC", "PIANO"] {
        let lexicon = Arc::clone(&lexicon);
        handles.push(thread::spawn(move || {
            let selector =
                GuessSelector::new(&SolverConfig::with_time_budget(Duration::from_secs(2)))
                    .unwrap();
            play(answer, &lexicon, &selector).is_solved()
        }));
    }

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
