use glam::Vec2;
use treasure_hunter::input::*;

const SPEED: f32 = 5.0;

// -- InputBinding -------------------------------------------------------------

#[test]
fn binding_starts_idle() {
    let b = InputBinding::new();
    assert_eq!(b.state(), KeyState::Idle);
    assert!(!b.is_down());
}

#[test]
fn press_and_release_are_edge_triggered() {
    let mut b = InputBinding::new();
    assert!(b.press());
    assert!(!b.press(), "repeat press while held is not an edge");
    assert!(b.is_down());
    assert!(b.release());
    assert!(!b.release());
    assert_eq!(b.state(), KeyState::Idle);
}

// -- MovementControls: press --------------------------------------------------

fn key(c: &mut MovementControls, code: KeyCode, pressed: bool, v: &mut Vec2) -> bool {
    c.handle_key(code, pressed, v)
}

#[test]
fn press_sets_axis_and_zeroes_other() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::new(0.0, 3.0);
    assert!(key(&mut c, KeyCode::ArrowRight, true, &mut v));
    assert_eq!(v, Vec2::new(5.0, 0.0));

    assert!(key(&mut c, KeyCode::ArrowUp, true, &mut v));
    assert_eq!(v, Vec2::new(0.0, -5.0));

    assert!(key(&mut c, KeyCode::ArrowLeft, true, &mut v));
    assert_eq!(v, Vec2::new(-5.0, 0.0));

    assert!(key(&mut c, KeyCode::ArrowDown, true, &mut v));
    assert_eq!(v, Vec2::new(0.0, 5.0));
}

#[test]
fn held_key_repeat_does_not_change_velocity() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::ArrowRight, true, &mut v);
    key(&mut c, KeyCode::ArrowUp, true, &mut v);
    // OS repeat of the still-held Right key.
    assert!(!key(&mut c, KeyCode::ArrowRight, true, &mut v));
    assert_eq!(v, Vec2::new(0.0, -5.0));
}

// -- MovementControls: release ------------------------------------------------

#[test]
fn release_stops_axis() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::ArrowLeft, true, &mut v);
    assert!(key(&mut c, KeyCode::ArrowLeft, false, &mut v));
    assert_eq!(v, Vec2::ZERO);
    assert_eq!(c.key_state(KeyCode::ArrowLeft), KeyState::Idle);
}

#[test]
fn release_keeps_moving_while_opposite_held() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::ArrowLeft, true, &mut v);
    key(&mut c, KeyCode::ArrowRight, true, &mut v);
    key(&mut c, KeyCode::ArrowRight, false, &mut v);
    assert_eq!(v, Vec2::new(5.0, 0.0));
}

#[test]
fn release_ignored_while_moving_on_other_axis() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::ArrowLeft, true, &mut v);
    key(&mut c, KeyCode::ArrowUp, true, &mut v);
    key(&mut c, KeyCode::ArrowLeft, false, &mut v);
    assert_eq!(v, Vec2::new(0.0, -5.0));
}

#[test]
fn release_of_unpressed_key_is_ignored() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::new(5.0, 0.0);
    assert!(!key(&mut c, KeyCode::ArrowRight, false, &mut v));
    assert_eq!(v, Vec2::new(5.0, 0.0));
}

#[test]
fn vertical_release_stops_vertical_axis() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::KeyS, true, &mut v);
    key(&mut c, KeyCode::KeyS, false, &mut v);
    assert_eq!(v, Vec2::ZERO);
    assert!(!c.is_held(Direction::Down));
}

// -- MovementControls: several keys per direction -----------------------------

#[test]
fn tapping_second_key_keeps_direction_held() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::ArrowLeft, true, &mut v);
    assert!(key(&mut c, KeyCode::KeyA, true, &mut v));
    assert!(key(&mut c, KeyCode::KeyA, false, &mut v));

    assert_eq!(v, Vec2::new(-5.0, 0.0), "ArrowLeft is still down");
    assert!(c.is_held(Direction::Left));
    assert_eq!(c.key_state(KeyCode::ArrowLeft), KeyState::Pressed);
    assert_eq!(c.key_state(KeyCode::KeyA), KeyState::Idle);

    key(&mut c, KeyCode::ArrowLeft, false, &mut v);
    assert_eq!(v, Vec2::ZERO);
    assert!(!c.is_held(Direction::Left));
}

#[test]
fn opposite_held_through_alternate_key() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    key(&mut c, KeyCode::KeyD, true, &mut v);
    key(&mut c, KeyCode::ArrowLeft, true, &mut v);
    key(&mut c, KeyCode::ArrowLeft, false, &mut v);
    assert_eq!(v, Vec2::new(-5.0, 0.0));
}

// -- Key mapping --------------------------------------------------------------

#[test]
fn arrow_keys_and_wasd_are_bound() {
    let keys = KeyBindings::default();
    assert_eq!(keys.direction(KeyCode::ArrowLeft), Some(Direction::Left));
    assert_eq!(keys.direction(KeyCode::KeyW), Some(Direction::Up));
    assert_eq!(keys.direction(KeyCode::KeyD), Some(Direction::Right));
    assert_eq!(keys.direction(KeyCode::ArrowDown), Some(Direction::Down));
    assert_eq!(keys.direction(KeyCode::Space), None);
}

#[test]
fn handle_key_drives_velocity() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::ZERO;
    assert!(c.handle_key(KeyCode::ArrowRight, true, &mut v));
    assert_eq!(v, Vec2::new(5.0, 0.0));
    assert!(c.handle_key(KeyCode::ArrowRight, false, &mut v));
    assert_eq!(v, Vec2::ZERO);
}

#[test]
fn unbound_key_is_ignored() {
    let mut c = MovementControls::new(SPEED);
    let mut v = Vec2::new(1.0, 2.0);
    assert!(!c.handle_key(KeyCode::KeyQ, true, &mut v));
    assert_eq!(v, Vec2::new(1.0, 2.0));
}

#[test]
fn custom_bindings() {
    let mut keys = KeyBindings::empty();
    keys.bind(KeyCode::KeyJ, Direction::Left);
    let mut c = MovementControls::with_keys(2.0, keys);
    let mut v = Vec2::ZERO;
    assert!(c.handle_key(KeyCode::KeyJ, true, &mut v));
    assert_eq!(v, Vec2::new(-2.0, 0.0));
    assert!(!c.handle_key(KeyCode::ArrowLeft, true, &mut v));
}

#[test]
fn direction_helpers() {
    for d in Direction::ALL {
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.unit() + d.opposite().unit(), Vec2::ZERO);
        assert_eq!(d.is_horizontal(), d.unit().y == 0.0);
    }
}
