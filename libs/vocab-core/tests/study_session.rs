//! End-to-end study session tests through the public API.

use pretty_assertions::assert_eq;
use vocab_core::{
    current_view, quiz_view, AdvanceAction, DeckManager, Face, QuizEngine, QuizResult, Session,
    SessionError, SessionFlags,
};

fn vocabulary() -> Vec<&'static str> {
    vec![
        "cat\tfeline animal",
        "dog\tcanine\tloyal companion",
        "noise without tabs",
        "bird\tflying animal",
    ]
}

#[test]
fn add_then_review() {
    let mut session = Session::with_seed(11);
    let mut deck = DeckManager::new(&mut session);
    assert_eq!(deck.add_cards(vocabulary()), 3);
    deck.rewind();

    let view = deck.current_view();
    assert_eq!(view.display_text, "cat");
    assert_eq!(view.position_label, "1 / 3");
    assert!(!view.can_go_prev);
    assert!(view.can_go_next);

    deck.next();
    deck.flip();
    assert_eq!(deck.current_view().display_text, "canine | loyal companion");
}

#[test]
fn single_token_line_adds_nothing() {
    let mut session = Session::with_seed(1);
    assert_eq!(DeckManager::new(&mut session).add_cards(["onlyoneword"]), 0);
    assert!(session.is_empty());
}

#[test]
fn full_quiz_round() {
    let mut session = Session::with_seed(5);
    DeckManager::new(&mut session).add_cards(vocabulary());

    let mut quiz = QuizEngine::new(&mut session);
    quiz.enter_check_mode().unwrap();
    assert_eq!(current_view(&session).display_text, "feline animal");
    assert_eq!(current_view(&session).face, Some(Face::Definition));

    let mut quiz = QuizEngine::new(&mut session);
    let wrong = quiz.submit_guess("cot").unwrap();
    assert!(!wrong.is_correct());
    assert_eq!(quiz.advance(), None);

    assert!(quiz.submit_guess("Cat").unwrap().is_correct());
    assert_eq!(quiz.advance(), Some(AdvanceAction::Advanced));
    assert!(quiz.submit_guess(" DOG ").unwrap().is_correct());
    assert_eq!(quiz.advance(), Some(AdvanceAction::Advanced));
    assert!(quiz.submit_guess("bird").unwrap().is_correct());
    assert_eq!(quiz.advance(), Some(AdvanceAction::Exit));
    quiz.exit_check_mode();

    assert_eq!(session.flags(), SessionFlags::default());
    assert_eq!(session.current_index(), Some(0));
    assert_eq!(current_view(&session).display_text, "cat");
    assert!(!quiz_view(&session).active);
}

#[test]
fn quiz_on_empty_deck() {
    let mut session = Session::with_seed(5);
    let err = QuizEngine::new(&mut session).enter_check_mode().unwrap_err();
    assert!(matches!(err, SessionError::InvalidState(_)));
    assert_eq!(session.flags(), SessionFlags::default());
}

#[test]
fn incorrect_result_marks_mismatch() {
    let mut session = Session::with_seed(5);
    DeckManager::new(&mut session).add_cards(["cat\tfeline"]);
    let mut quiz = QuizEngine::new(&mut session);
    quiz.enter_check_mode().unwrap();

    let Some(QuizResult::Incorrect { per_character }) = quiz.submit_guess("cot") else {
        panic!("expected an incorrect result");
    };
    let matched: Vec<bool> = per_character.iter().map(|c| c.matched).collect();
    assert_eq!(matched, vec![true, false, true]);
}

#[test]
fn deleting_everything_resets_session() {
    let mut session = Session::with_seed(5);
    let mut deck = DeckManager::new(&mut session);
    deck.add_cards(["cat\tfeline", "dog\tcanine"]);
    deck.toggle_shuffle();
    deck.toggle_reverse();
    QuizEngine::new(&mut session).enter_check_mode().unwrap();

    let mut deck = DeckManager::new(&mut session);
    deck.delete_card("cat");
    assert!(session.flags().is_check_mode);
    DeckManager::new(&mut session).delete_card("dog");

    assert_eq!(session.flags(), SessionFlags::default());
    assert_eq!(session.current_index(), None);
    assert_eq!(current_view(&session).display_text, "No cards available");
}

#[test]
fn views_serialize_for_renderer() {
    let mut session = Session::with_seed(5);
    DeckManager::new(&mut session).add_cards(["cat\tfeline"]);
    let json = serde_json::to_value(current_view(&session)).unwrap();
    assert_eq!(json["display_text"], "cat");
    assert_eq!(json["face"], "word");
    assert_eq!(json["position_label"], "1 / 1");
    assert_eq!(json["flip_enabled"], true);
}
