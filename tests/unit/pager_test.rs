//! Unit tests for step clamping and swipe-driven paging.

use revo::input::SwipeDirection;
use revo::settings::{AccessibilityStep, FlowPage, PagedFlow, Pager};

#[test]
fn test_step_stays_in_range_for_any_sequence() {
    let ops: [&dyn Fn(&mut Pager); 6] = [
        &|p| {
            p.apply_swipe(SwipeDirection::Left);
        },
        &|p| {
            p.apply_swipe(SwipeDirection::Right);
        },
        &|p| {
            p.jump_to(0);
        },
        &|p| {
            p.jump_to(4);
        },
        &|p| {
            p.jump_to(9);
        },
        &|p| {
            p.jump_to(usize::MAX);
        },
    ];

    // Every sequence of three operations
    for a in 0..ops.len() {
        for b in 0..ops.len() {
            for c in 0..ops.len() {
                let mut pager = Pager::new(5);
                for op in [a, b, c] {
                    ops[op](&mut pager);
                    assert!(pager.index() <= 4);
                }
            }
        }
    }
}

#[test]
fn test_swipe_at_bounds_is_a_no_op() {
    let mut pager = Pager::new(5);
    assert!(!pager.apply_swipe(SwipeDirection::Right));
    assert_eq!(pager.index(), 0);

    pager.jump_to(4);
    assert!(!pager.apply_swipe(SwipeDirection::Left));
    assert_eq!(pager.index(), 4);
}

#[test]
fn test_jump_past_end_clamps() {
    let mut pager = Pager::new(5);
    assert!(pager.jump_to(7));
    assert_eq!(pager.index(), 4);
}

#[test]
fn test_accessibility_flow_pages_in_order() {
    let mut flow: PagedFlow<AccessibilityStep> = PagedFlow::new();
    let mut seen = vec![flow.page()];
    while flow.apply_swipe(SwipeDirection::Left) {
        seen.push(flow.page());
    }

    assert_eq!(seen, AccessibilityStep::all().to_vec());
    assert_eq!(flow.page(), AccessibilityStep::Gesture);
    assert_eq!(flow.page().index(), 4);
}

#[test]
fn test_zero_page_pager_has_one_page() {
    let pager = Pager::new(0);
    assert_eq!(pager.count(), 1);
    assert_eq!(pager.last_index(), 0);
}
