//! Property tests for deck navigation and ordering.

use proptest::prelude::*;
use vocab_core::{current_view, DeckManager, Session};

fn session_with(count: usize, seed: u64) -> Session {
    let mut session = Session::with_seed(seed);
    let lines: Vec<String> = (0..count).map(|i| format!("word{i}\tdefinition {i}")).collect();
    DeckManager::new(&mut session).add_cards(&lines);
    session
}

fn move_to(session: &mut Session, target: usize) {
    let mut deck = DeckManager::new(session);
    for _ in 0..target {
        deck.next();
    }
}

fn words(session: &Session) -> Vec<String> {
    session.cards().iter().map(|c| c.word.clone()).collect()
}

proptest! {
    #[test]
    fn next_then_prev_restores_index(count in 2usize..30, pos in 0usize..30, seed in any::<u64>()) {
        let mut session = session_with(count, seed);
        let pos = pos % (count - 1);
        move_to(&mut session, pos);

        let mut deck = DeckManager::new(&mut session);
        prop_assert!(deck.next());
        prop_assert!(deck.prev());
        prop_assert_eq!(session.current_index(), Some(pos));
    }

    #[test]
    fn prev_then_next_restores_index(count in 2usize..30, pos in 1usize..30, seed in any::<u64>()) {
        let mut session = session_with(count, seed);
        let pos = 1 + pos % (count - 1);
        move_to(&mut session, pos);

        let mut deck = DeckManager::new(&mut session);
        prop_assert!(deck.prev());
        prop_assert!(deck.next());
        prop_assert_eq!(session.current_index(), Some(pos));
    }

    #[test]
    fn bounds_are_noops(count in 1usize..30, seed in any::<u64>()) {
        let mut session = session_with(count, seed);
        let before = session.flags();
        prop_assert!(!DeckManager::new(&mut session).prev());
        prop_assert_eq!(session.current_index(), Some(0));
        prop_assert_eq!(session.flags(), before);

        move_to(&mut session, count - 1);
        let before = session.flags();
        prop_assert!(!DeckManager::new(&mut session).next());
        prop_assert_eq!(session.current_index(), Some(count - 1));
        prop_assert_eq!(session.flags(), before);
    }

    #[test]
    fn shuffle_twice_restores_order(count in 0usize..40, seed in any::<u64>()) {
        let mut session = session_with(count, seed);
        let before = words(&session);

        DeckManager::new(&mut session).toggle_shuffle();
        let mut shuffled = words(&session);
        shuffled.sort();
        let mut sorted = before.clone();
        sorted.sort();
        prop_assert_eq!(shuffled, sorted);

        DeckManager::new(&mut session).toggle_shuffle();
        prop_assert_eq!(words(&session), before);
        prop_assert!(!session.flags().is_shuffled);
    }

    #[test]
    fn reverse_twice_restores_view(count in 1usize..20, flipped in any::<bool>(), seed in any::<u64>()) {
        let mut session = session_with(count, seed);
        if flipped {
            DeckManager::new(&mut session).flip();
        }
        let before_flags = session.flags();
        let before_view = current_view(&session);

        let mut deck = DeckManager::new(&mut session);
        deck.toggle_reverse();
        deck.toggle_reverse();

        // Reversing rewinds and unflips, so compare from an unflipped start.
        prop_assert_eq!(session.flags().is_reversed, before_flags.is_reversed);
        if !flipped {
            prop_assert_eq!(current_view(&session).display_text, before_view.display_text);
        }
    }

    #[test]
    fn index_stays_in_bounds(ops in proptest::collection::vec(0u8..6, 0..60), seed in any::<u64>()) {
        let mut session = session_with(5, seed);
        for op in ops {
            let mut deck = DeckManager::new(&mut session);
            match op {
                0 => { deck.next(); }
                1 => { deck.prev(); }
                2 => deck.flip(),
                3 => deck.toggle_shuffle(),
                4 => deck.toggle_reverse(),
                _ => { deck.delete_card("word2"); }
            }
            match session.current_index() {
                Some(idx) => prop_assert!(idx < session.len()),
                None => prop_assert!(session.is_empty()),
            }
        }
    }
}
