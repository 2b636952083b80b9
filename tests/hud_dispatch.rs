use keystroke_hud::hud::{HudLayout, InputCode, KeyOverlay, WidgetKind};

#[test]
fn unknown_code_leaves_all_widget_states_unchanged() {
    let mut overlay = KeyOverlay::new(HudLayout::default());
    overlay.handle_input(InputCode::Keyboard(340), true, 0);
    overlay.handle_input(InputCode::Mouse(7), true, 0);
    assert!(overlay.widgets().iter().all(|widget| !widget.is_pressed()));
}

#[test]
fn press_event_transitions_the_bound_widget_only() {
    let mut overlay = KeyOverlay::new(HudLayout::default());
    // W is the first widget of the default layout.
    overlay.handle_input(InputCode::Keyboard(87), true, 0);

    let pressed: Vec<bool> = overlay
        .widgets()
        .iter()
        .map(|widget| widget.is_pressed())
        .collect();
    assert_eq!(pressed, vec![true, false, false, false, false, false, false]);

    overlay.handle_input(InputCode::Keyboard(87), false, 50);
    assert!(overlay.widgets().iter().all(|widget| !widget.is_pressed()));
}

#[test]
fn mouse_press_feeds_the_cps_counter_of_its_widget() {
    let mut overlay = KeyOverlay::new(HudLayout::default());
    overlay.handle_input(InputCode::Mouse(0), true, 100);

    let lmb = overlay
        .widgets()
        .iter()
        .position(|widget| widget.code() == InputCode::Mouse(0))
        .expect("default layout tracks the left mouse button");
    assert_eq!(overlay.widgets()[lmb].spec().kind, WidgetKind::Cps);
    assert!(overlay.widgets()[lmb].is_pressed());
}

#[test]
fn keyboard_and_mouse_namespaces_never_collide() {
    let mut overlay = KeyOverlay::new(HudLayout::default());
    // Mouse id 87 must not press the W key widget (scancode 87).
    overlay.handle_input(InputCode::Mouse(87), true, 0);
    assert!(overlay.widgets().iter().all(|widget| !widget.is_pressed()));
}
