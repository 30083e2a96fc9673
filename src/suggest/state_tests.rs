use proptest::prelude::*;

use super::*;

fn state_with(count: usize) -> SuggestState {
    let mut state = SuggestState::new();
    let suggestions = (0..count)
        .map(|i| Suggestion::new(format!("SYM{i}"), format!("Company {i}"), "Technology"))
        .collect();
    state.update_suggestions(suggestions, false);
    state
}

#[test]
fn test_fresh_state_has_no_selection() {
    let state = SuggestState::new();
    assert_eq!(state.selected_index(), None);
    assert!(!state.is_visible());
}

#[test]
fn test_down_from_no_selection_lands_on_first() {
    let mut state = state_with(3);
    state.select_next();
    assert_eq!(state.selected_index(), Some(0));
}

#[test]
fn test_down_clamps_at_last_entry() {
    let mut state = state_with(3);
    for _ in 0..10 {
        state.select_next();
    }
    assert_eq!(state.selected_index(), Some(2));
}

#[test]
fn test_up_from_first_returns_to_no_selection() {
    let mut state = state_with(3);
    state.select_next();
    assert_eq!(state.selected_index(), Some(0));
    state.select_prev();
    assert_eq!(state.selected_index(), None);
    // And stays there
    state.select_prev();
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_navigation_on_empty_list_is_inert() {
    let mut state = SuggestState::new();
    state.select_next();
    assert_eq!(state.selected_index(), None);
    state.select_prev();
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_update_resets_selection() {
    let mut state = state_with(5);
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_index(), Some(1));

    state.update_suggestions(vec![Suggestion::new("NVDA", "NVIDIA", "Technology")], false);
    assert_eq!(state.selected_index(), None);
    assert!(state.is_visible());
}

#[test]
fn test_empty_update_hides_popup() {
    let mut state = state_with(2);
    assert!(state.is_visible());
    state.update_suggestions(Vec::new(), false);
    assert!(!state.is_visible());
}

#[test]
fn test_selected_suggestion_lookup() {
    let mut state = state_with(3);
    assert!(state.selected_suggestion().is_none());
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_suggestion().unwrap().symbol, "SYM1");
}

#[test]
fn test_stale_response_is_rejected() {
    let mut state = SuggestState::new();
    state.track_request(3);
    // The response for request 2 finished after request 3 was dispatched
    assert!(!state.accepts_response(2));
    assert!(state.accepts_response(3));
}

#[test]
fn test_clear_drops_everything() {
    let mut state = state_with(4);
    state.select_next();
    state.clear();
    assert!(!state.is_visible());
    assert!(state.suggestions().is_empty());
    assert_eq!(state.selected_index(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    // For any sequence of navigation and list updates, the selection never
    // leaves the bounds of the currently rendered list.
    #[test]
    fn prop_selection_stays_in_bounds(
        ops in prop::collection::vec(0u8..4, 0..60),
        sizes in prop::collection::vec(0usize..10, 1..10),
    ) {
        let mut state = SuggestState::new();
        let mut size_iter = sizes.iter().cycle();

        for op in ops {
            match op {
                0 => state.select_next(),
                1 => state.select_prev(),
                2 => {
                    let count = *size_iter.next().unwrap();
                    let list = (0..count)
                        .map(|i| Suggestion::new(format!("S{i}"), "", ""))
                        .collect();
                    state.update_suggestions(list, false);
                }
                _ => state.hide(),
            }

            if let Some(i) = state.selected_index() {
                prop_assert!(i < state.suggestions().len());
            }
        }
    }
}
