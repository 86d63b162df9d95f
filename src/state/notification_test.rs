use super::*;

#[test]
fn show_makes_notice_visible() {
    let mut state = NotificationState::default();
    let id = state.show("Saved");
    let notice = state.current().expect("notice should be visible");
    assert_eq!(notice.id, id);
    assert_eq!(notice.message, "Saved");
    assert_eq!(notice.phase, NoticePhase::Visible);
}

#[test]
fn second_notice_replaces_first() {
    let mut state = NotificationState::default();
    let a = state.show("A");
    let b = state.show("B");
    assert_ne!(a, b);
    let notice = state.current().expect("notice should be visible");
    assert_eq!(notice.message, "B");
    assert_eq!(notice.phase, NoticePhase::Visible);
}

#[test]
fn stale_timers_do_not_touch_the_replacement() {
    let mut state = NotificationState::default();
    let a = state.show("A");
    let b = state.show("B");

    assert!(!state.begin_exit(a));
    assert!(!state.dismiss(a));
    assert_eq!(state.current().map(|n| n.id), Some(b));
    assert_eq!(state.current().map(|n| n.phase), Some(NoticePhase::Visible));
}

#[test]
fn full_timeline_removes_notice() {
    let mut state = NotificationState::default();
    let id = state.show("Bye");
    assert!(state.begin_exit(id));
    assert_eq!(state.current().map(|n| n.phase), Some(NoticePhase::Leaving));
    assert!(state.dismiss(id));
    assert!(state.current().is_none());
    assert!(!state.dismiss(id));
}

#[test]
fn timings_match_toast_animation() {
    assert_eq!(DISPLAY_MS, 3000);
    assert_eq!(EXIT_MS, 300);
}
