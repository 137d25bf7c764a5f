// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_nav` crate.
//!
//! These walk whole inspection sessions through the public API: opening on a
//! grid item, moving along both axes from every input channel, filtering the
//! collection underneath an open session, and closing.

use vitrine_nav::input::{InputConfig, InputEvent, InputRouter, Key};
use vitrine_nav::motion::{Axis, Direction, Edge};
use vitrine_nav::swipe::SwipeConfig;
use vitrine_nav::{CloseReason, Item, MediaKind, NavError, NavigationConfig, Navigator, Transition};

fn catalog() -> Vec<Item<&'static str>> {
    vec![
        Item::new("tee", ["tee.mp4", "tee-1.png", "tee-2.png", "tee-3.png"]).unwrap(),
        Item::new("jeans", ["jeans.mp4", "jeans-1.png"]).unwrap(),
        Item::new("cap", ["cap.png"]).unwrap(),
        Item::new("scarf", ["scarf.webm", "scarf-1.png", "scarf-2.png"]).unwrap(),
    ]
}

#[test]
fn session_walkthrough() {
    let mut nav = Navigator::open(catalog(), &"jeans", NavigationConfig::default()).unwrap();
    let mut input = InputRouter::default();

    assert_eq!(nav.current_item().unwrap().media()[0].kind(), MediaKind::Video);

    let t = input
        .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowRight), 0)
        .unwrap();
    let snap = t.snapshot().unwrap();
    assert_eq!((snap.item_id, snap.image_index, snap.image_count), ("jeans", 1, 2));
    assert_eq!(snap.slide().enter_edge(), Some(Edge::Right));

    let t = input
        .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowUp), 10)
        .unwrap();
    let snap = t.snapshot().unwrap();
    assert_eq!((snap.item_id, snap.image_index), ("tee", 0));
    assert_eq!(snap.slide().enter_edge(), Some(Edge::Top));

    // First item: clamped even after the cooldown.
    assert!(
        input
            .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowUp), 1_000)
            .is_none()
    );

    let t = input
        .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowDown), 1_000)
        .unwrap();
    assert_eq!(t.snapshot().unwrap().image_index, 1);

    assert_eq!(
        input.dispatch(&mut nav, InputEvent::KeyDown(Key::Escape), 1_100),
        Some(Transition::Closed(CloseReason::Cancelled))
    );
    assert!(!nav.is_open());
}

#[test]
fn cooldown_paces_every_channel() {
    let mut nav = Navigator::open(catalog(), &"tee", NavigationConfig { cooldown_ms: 500 })
        .unwrap();
    let mut input = InputRouter::new(InputConfig {
        wheel_threshold: 30.0,
        swipe: SwipeConfig {
            min_distance: 20.0,
            max_duration_ms: 400,
        },
    });

    assert!(input.dispatch(&mut nav, InputEvent::Wheel { delta_y: 30.0 }, 0).is_some());
    assert_eq!(nav.lock_expiry(), Some(500));

    assert!(input.dispatch(&mut nav, InputEvent::Wheel { delta_y: 30.0 }, 100).is_none());
    input.dispatch(&mut nav, InputEvent::TouchStart { y: 200.0 }, 200);
    assert!(input.dispatch(&mut nav, InputEvent::TouchEnd { y: 170.0 }, 250).is_none());
    assert!(nav.is_locked(499));
    assert_eq!(nav.item_index(), Some(1));

    // Lateral moves go through while locked.
    assert!(
        input
            .dispatch(&mut nav, InputEvent::IndicatorClick { index: 1 }, 300)
            .is_some()
    );

    assert!(nav.tick(500));
    assert!(input.dispatch(&mut nav, InputEvent::Wheel { delta_y: -30.0 }, 500).is_some());
    assert_eq!(nav.item_index(), Some(0));
    assert_eq!(nav.direction(Axis::Longitudinal), Direction::Backward);
}

#[test]
fn media_memory_is_per_item() {
    let mut nav = Navigator::open(catalog(), &"tee", NavigationConfig::default()).unwrap();
    nav.select_image(3);
    nav.advance_item(0);
    nav.retreat_image();
    nav.advance_item(300);
    assert_eq!(nav.image_index(), Some(0));
    assert!(nav.advance_image().is_none());

    assert_eq!(nav.image_index_of(&"tee"), Some(3));
    assert_eq!(nav.image_index_of(&"jeans"), Some(1));
    assert_eq!(nav.image_index_of(&"scarf"), Some(0));
    assert_eq!(nav.image_index_of(&"socks"), None);

    let snap = nav.retreat_item(600).unwrap();
    assert_eq!((snap.item_id, snap.image_index), ("jeans", 1));
}

#[test]
fn filtering_under_an_open_session() {
    let mut nav = Navigator::open(catalog(), &"scarf", NavigationConfig::default()).unwrap();
    nav.advance_image();

    let hats_and_scarves: Vec<_> = catalog()
        .into_iter()
        .filter(|item| matches!(*item.id(), "cap" | "scarf"))
        .collect();
    let t = nav.reconcile(hats_and_scarves).unwrap();
    let snap = t.snapshot().unwrap();
    assert_eq!((snap.item_id, snap.item_index, snap.image_index), ("scarf", 1, 1));
    assert_eq!(nav.items().len(), 2);

    let only_tops: Vec<_> = catalog()
        .into_iter()
        .filter(|item| *item.id() == "tee")
        .collect();
    assert_eq!(
        nav.reconcile(only_tops),
        Some(Transition::Closed(CloseReason::ItemRemoved))
    );
    assert!(nav.snapshot().is_none());
}

#[test]
fn open_errors_are_classified() {
    let err = Navigator::open(catalog(), &"socks", NavigationConfig::default()).unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_invalid_argument());

    let err = Item::<u8>::new(1, Vec::<&str>::new()).unwrap_err();
    assert_eq!(err, NavError::EmptyMedia);
    assert!(err.is_invalid_argument());
}
