use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one");
    let second = state.push(NoticeKind::Error, "two");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one");
    let second = state.push(NoticeKind::Success, "two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn changes_raise_success_notices() {
    let mut state = NoticeState::default();
    state.push_outcome(Outcome::Added);
    state.push_outcome(Outcome::Removed);
    assert!(state.items.iter().all(|n| n.kind == NoticeKind::Success));
    assert_eq!(state.items[0].message, "Car added to wishlist");
    assert_eq!(state.items[1].message, "Car removed from wishlist");
}

#[test]
fn no_op_outcomes_raise_error_notices() {
    let mut state = NoticeState::default();
    state.push_outcome(Outcome::AlreadyPresent);
    state.push_outcome(Outcome::NotPresent);
    assert!(state.items.iter().all(|n| n.kind == NoticeKind::Error));
}

#[test]
fn failure_notice_is_generic() {
    let mut state = NoticeState::default();
    state.push_failure();
    assert_eq!(state.items[0].message, "Something went wrong!");
    assert_eq!(state.items[0].kind.class(), "notice--error");
}
