//! Tests for draggable elements: anchoring, clamping, persistence, taps.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use erzy_common::{Point, Size, Viewport, WidgetId};
use erzy_platform::storage::{KeyValueStore, MemoryStore};
use erzy_platform::{PointerEvent, PointerPhase};

use super::*;

const PHONE: Viewport = Viewport::new(375.0, 667.0);
const GEAR: Size = Size::square(56.0);

fn gear(store: &dyn KeyValueStore) -> DraggableElement {
    DraggableElement::restore(
        WidgetId::new("erzyGearPos"),
        "gear",
        GEAR,
        Anchor::BottomRight {
            right: 30.0,
            bottom: 30.0,
        },
        store,
    )
}

fn touch(phase: PointerPhase, x: f64, y: f64, t: u64) -> PointerEvent {
    PointerEvent::touch(phase, vec![Point::new(x, y)], t).with_target("gear")
}

fn touch_end(t: u64) -> PointerEvent {
    PointerEvent::touch(PointerPhase::End, vec![], t)
}

// -- Anchors --

#[test]
fn bottom_right_anchor_resolves_from_far_edges() {
    let anchor = Anchor::BottomRight {
        right: 30.0,
        bottom: 30.0,
    };
    assert_eq!(anchor.resolve(PHONE, GEAR), Point::new(289.0, 581.0));
    assert!(anchor.is_edge_relative());
}

#[test]
fn centered_anchor_resolves_to_middle() {
    let anchor = Anchor::Centered;
    let p = anchor.resolve(Viewport::new(400.0, 800.0), Size::new(350.0, 500.0));
    assert_eq!(p, Point::new(25.0, 150.0));
}

#[test]
fn centered_anchor_never_resolves_negative() {
    let p = Anchor::Centered.resolve(PHONE, Size::new(500.0, 900.0));
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn gesture_start_converts_anchor_to_absolute() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    assert!(el.anchor().is_edge_relative());

    assert!(el.on_gesture_start(&touch(PointerPhase::Start, 300.0, 600.0, 0), PHONE));
    assert_eq!(el.anchor(), Anchor::Absolute(Point::new(289.0, 581.0)));
    assert!(el.is_tracking());
}

// -- Persistence --

#[test]
fn defaults_when_nothing_stored() {
    let store = MemoryStore::new();
    let el = gear(&store);
    assert_eq!(el.position(PHONE), Point::new(289.0, 581.0));
}

#[test]
fn restores_saved_position_exactly() {
    let store = MemoryStore::new();
    save_position(
        &store,
        &WidgetId::new("erzyGearPos"),
        ElementPosition::new(120.0, 340.0),
    )
    .unwrap();

    let el = gear(&store);
    assert_eq!(el.position(PHONE), Point::new(120.0, 340.0));
}

#[test]
fn stored_format_is_x_y_json() {
    let store = MemoryStore::new();
    save_position(
        &store,
        &WidgetId::new("erzyGearPos"),
        ElementPosition::new(120.0, 340.0),
    )
    .unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&store.get("erzyGearPos").unwrap()).unwrap();
    assert_eq!(raw["x"], 120.0);
    assert_eq!(raw["y"], 340.0);
}

#[test]
fn position_saved_on_larger_screen_is_pulled_on_screen() {
    let store = MemoryStore::new();
    save_position(
        &store,
        &WidgetId::new("erzyGearPos"),
        ElementPosition::new(1800.0, 1000.0),
    )
    .unwrap();

    let mut el = gear(&store);
    assert_eq!(el.position(PHONE), Point::new(319.0, 611.0));

    // The clamped position is where a drag picks up from.
    assert!(el.on_gesture_start(&touch(PointerPhase::Start, 340.0, 630.0, 0), PHONE));
    assert_eq!(el.anchor(), Anchor::Absolute(Point::new(319.0, 611.0)));
    let mv = el
        .on_gesture_move(&touch(PointerPhase::Move, 240.0, 530.0, 10), PHONE)
        .unwrap();
    assert_eq!(mv.position, Point::new(219.0, 511.0));
}

#[test]
fn malformed_saved_position_falls_back_to_default() {
    let store = MemoryStore::new();
    for raw in [
        "garbage",
        r#"{"x":"12px","y":4}"#,
        r#"{"x":12}"#,
        r#"[1,2]"#,
        "null",
    ] {
        store.set("erzyGearPos", raw).unwrap();
        let el = gear(&store);
        assert_eq!(
            el.position(PHONE),
            Point::new(289.0, 581.0),
            "stored {raw:?} should fall back to default"
        );
    }
}

// -- Tap --

#[test]
fn tap_runs_handler_and_writes_nothing() {
    let store = MemoryStore::new();
    let taps = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&taps);
    let mut el = gear(&store).with_tap_handler(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    el.on_gesture_start(&touch(PointerPhase::Start, 100.0, 100.0, 0), PHONE);
    let mv = el
        .on_gesture_move(&touch(PointerPhase::Move, 101.0, 100.0, 40), PHONE)
        .unwrap();
    assert!(!mv.suppress_default);
    assert_eq!(mv.position, Point::new(289.0, 581.0));

    let end = el.on_gesture_end(&touch_end(120), &store);
    assert_eq!(end, Some(GestureEnd::Tap));
    assert_eq!(taps.load(Ordering::SeqCst), 1);
    assert!(store.is_empty());
}

// -- Drag --

#[test]
fn drag_follows_pointer_and_persists() {
    let store = MemoryStore::new();
    save_position(
        &store,
        &WidgetId::new("erzyGearPos"),
        ElementPosition::new(100.0, 100.0),
    )
    .unwrap();
    let mut el = gear(&store);

    el.on_gesture_start(&touch(PointerPhase::Start, 100.0, 100.0, 0), PHONE);
    let first = el
        .on_gesture_move(&touch(PointerPhase::Move, 130.0, 100.0, 50), PHONE)
        .unwrap();
    assert!(first.started_drag);
    assert!(first.suppress_default);
    assert_eq!(first.position, Point::new(130.0, 100.0));

    let second = el
        .on_gesture_move(&touch(PointerPhase::Move, 140.0, 100.0, 80), PHONE)
        .unwrap();
    assert!(!second.started_drag);
    assert!(second.suppress_default);
    assert_eq!(second.position, Point::new(140.0, 100.0));

    let end = el.on_gesture_end(&touch_end(500), &store);
    assert_eq!(end, Some(GestureEnd::Drag(Point::new(140.0, 100.0))));

    let reloaded = gear(&store);
    assert_eq!(reloaded.position(PHONE), Point::new(140.0, 100.0));
}

#[test]
fn drag_does_not_run_tap_handler() {
    let store = MemoryStore::new();
    let taps = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&taps);
    let mut el = gear(&store).with_tap_handler(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    el.on_gesture_start(&touch(PointerPhase::Start, 100.0, 100.0, 0), PHONE);
    el.on_gesture_move(&touch(PointerPhase::Move, 100.0, 160.0, 10), PHONE);
    el.on_gesture_move(&touch(PointerPhase::Move, 100.0, 101.0, 20), PHONE);
    assert!(matches!(
        el.on_gesture_end(&touch_end(30), &store),
        Some(GestureEnd::Drag(_))
    ));
    assert_eq!(taps.load(Ordering::SeqCst), 0);
}

#[test]
fn drag_is_clamped_to_viewport() {
    let store = MemoryStore::new();
    save_position(
        &store,
        &WidgetId::new("erzyGearPos"),
        ElementPosition::new(100.0, 100.0),
    )
    .unwrap();
    let mut el = gear(&store);

    el.on_gesture_start(&touch(PointerPhase::Start, 128.0, 128.0, 0), PHONE);
    let mv = el
        .on_gesture_move(&touch(PointerPhase::Move, -50.0, 10_000.0, 10), PHONE)
        .unwrap();
    assert_eq!(mv.position, Point::new(0.0, 611.0));

    let end = el.on_gesture_end(&touch_end(20), &store);
    assert_eq!(end, Some(GestureEnd::Drag(Point::new(0.0, 611.0))));
    assert_eq!(gear(&store).position(PHONE), Point::new(0.0, 611.0));
}

#[test]
fn mouse_drag_works_like_touch() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    let start = PointerEvent::mouse(PointerPhase::Start, 310.0, 600.0, 0).with_target("gear");
    el.on_gesture_start(&start, PHONE);
    let mv = el
        .on_gesture_move(&PointerEvent::mouse(PointerPhase::Move, 210.0, 500.0, 5), PHONE)
        .unwrap();
    assert_eq!(mv.position, Point::new(189.0, 481.0));
    let end = el.on_gesture_end(&PointerEvent::mouse(PointerPhase::End, 210.0, 500.0, 9), &store);
    assert_eq!(end, Some(GestureEnd::Drag(Point::new(189.0, 481.0))));
}

// -- Missing or stray input --

#[test]
fn move_without_active_gesture_is_ignored() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    assert!(el
        .on_gesture_move(&touch(PointerPhase::Move, 0.0, 0.0, 0), PHONE)
        .is_none());
    assert_eq!(el.position(PHONE), Point::new(289.0, 581.0));
    assert!(el.anchor().is_edge_relative());
}

#[test]
fn move_with_empty_touch_list_is_a_no_op() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    el.on_gesture_start(&touch(PointerPhase::Start, 100.0, 100.0, 0), PHONE);
    let empty = PointerEvent::touch(PointerPhase::Move, vec![], 5);
    assert!(el.on_gesture_move(&empty, PHONE).is_none());
    assert!(el.is_tracking());
    assert_eq!(el.on_gesture_end(&touch_end(10), &store), Some(GestureEnd::Tap));
}

#[test]
fn start_without_coordinates_does_not_begin() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    let empty = PointerEvent::touch(PointerPhase::Start, vec![], 0).with_target("gear");
    assert!(!el.on_gesture_start(&empty, PHONE));
    assert!(!el.is_tracking());
}

#[test]
fn cancel_after_drag_still_persists() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    el.on_gesture_start(&touch(PointerPhase::Start, 300.0, 600.0, 0), PHONE);
    el.on_gesture_move(&touch(PointerPhase::Move, 250.0, 600.0, 10), PHONE);
    let cancel = PointerEvent::touch(PointerPhase::Cancel, vec![], 20);
    assert_eq!(
        el.on_gesture_end(&cancel, &store),
        Some(GestureEnd::Drag(Point::new(239.0, 581.0)))
    );
    assert!(store.get("erzyGearPos").is_some());
}

#[test]
fn end_without_gesture_returns_none() {
    let store = MemoryStore::new();
    let mut el = gear(&store);
    assert_eq!(el.on_gesture_end(&touch_end(0), &store), None);
}

#[test]
fn long_press_with_cutoff_is_ignored() {
    let store = MemoryStore::new();
    let mut el = gear(&store).with_tracker(
        crate::tracker::PointerTracker::new().with_tap_max_ms(Some(300)),
    );
    el.on_gesture_start(&touch(PointerPhase::Start, 100.0, 100.0, 0), PHONE);
    assert_eq!(
        el.on_gesture_end(&touch_end(900), &store),
        Some(GestureEnd::Ignored)
    );
    assert!(store.is_empty());
}
