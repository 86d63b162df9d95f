use super::*;

fn carousel(card_count: usize, cards_per_view: usize, index: usize) -> CarouselState {
    let mut state = CarouselState::new(card_count);
    state.cards_per_view = cards_per_view;
    state.current_index = index;
    state
}

// =============================================================
// Breakpoints
// =============================================================

#[test]
fn cards_per_view_follows_breakpoints() {
    assert_eq!(cards_per_view_for_width(1440.0), 3);
    assert_eq!(cards_per_view_for_width(1024.0), 3);
    assert_eq!(cards_per_view_for_width(1023.0), 2);
    assert_eq!(cards_per_view_for_width(640.0), 2);
    assert_eq!(cards_per_view_for_width(639.0), 1);
    assert_eq!(cards_per_view_for_width(0.0), 1);
}

#[test]
fn custom_breakpoints_apply_on_resize() {
    let mut state = CarouselState::new(7).with_breakpoints(Breakpoints { lg: 1200.0, md: 800.0 });
    state.on_resize(1100.0, 900.0);
    assert_eq!(state.cards_per_view, 2);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn max_index_for_seven_cards_three_per_view() {
    assert_eq!(carousel(7, 3, 0).max_index(), 4);
}

#[test]
fn next_wraps_from_max_to_zero() {
    let mut state = carousel(7, 3, 4);
    state.next();
    assert_eq!(state.current_index, 0);
}

#[test]
fn prev_wraps_from_zero_to_max() {
    let mut state = carousel(7, 3, 0);
    state.prev();
    assert_eq!(state.current_index, 4);
}

#[test]
fn next_without_wrap_increments() {
    let mut state = carousel(7, 3, 2);
    state.next();
    assert_eq!(state.current_index, 3);
}

#[test]
fn prev_without_wrap_decrements() {
    let mut state = carousel(7, 3, 3);
    state.prev();
    assert_eq!(state.current_index, 2);
}

#[test]
fn go_to_is_not_clamped() {
    let mut state = carousel(7, 3, 0);
    state.go_to(6);
    assert_eq!(state.current_index, 6);
    state.next();
    assert_eq!(state.current_index, 0);
}

#[test]
fn fewer_cards_than_view_stays_at_zero() {
    let mut state = carousel(2, 3, 0);
    state.next();
    assert_eq!(state.current_index, 0);
    state.prev();
    assert_eq!(state.current_index, 0);
}

// =============================================================
// Resize and render
// =============================================================

#[test]
fn resize_keeps_index_past_new_max() {
    let mut state = carousel(7, 1, 5);
    state.on_resize(1280.0, 1200.0);
    assert_eq!(state.cards_per_view, 3);
    assert_eq!(state.current_index, 5);
    assert_eq!(state.max_index(), 4);
    state.next();
    assert_eq!(state.current_index, 0);
}

#[test]
fn card_basis_follows_cards_per_view() {
    let mut state = CarouselState::new(7);
    state.on_resize(1280.0, 1200.0);
    assert_eq!(state.card_basis_percent(), 100.0 / 3.0);
    state.on_resize(800.0, 760.0);
    assert_eq!(state.card_basis_percent(), 50.0);
    state.on_resize(320.0, 300.0);
    assert_eq!(state.card_basis_percent(), 100.0);
}

#[test]
fn render_offsets_by_card_width() {
    let mut state = CarouselState::new(7);
    state.on_resize(1280.0, 1200.0);
    state.go_to(2);
    let frame = state.render().expect("cards exist");
    assert_eq!(frame.offset_px, 800.0);
    assert_eq!(frame.active_indicator, 2);
}

#[test]
fn render_indicator_wraps_modulo_count() {
    let mut state = CarouselState::new(4);
    state.go_to(9);
    assert_eq!(state.render().map(|f| f.active_indicator), Some(1));
}

#[test]
fn render_with_no_cards_is_noop() {
    let mut state = CarouselState::new(0);
    state.on_resize(800.0, 600.0);
    state.next();
    state.prev();
    assert_eq!(state.render(), None);
}
