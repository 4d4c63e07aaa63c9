//! End-to-end entry scenarios driven through the public event API.

use std::time::Duration;

use digitpad_core::bounds::Bounds;
use digitpad_core::event::{Event, KeyCode, KeyEvent, PointerEvent, RotaryEvent};
use digitpad_core::geometry::Rect;
use digitpad_core::locale::Locale;
use digitpad_core::rotary::RotaryBinding;
use digitpad_core::session::KeypadMode;
use digitpad_render::buffer::Buffer;
use digitpad_widgets::{EntryField, FieldEvent, Widget};

const AREA: Rect = Rect::new(0, 0, 11, 13);

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

fn type_chars(field: &mut EntryField, chars: &str) {
    for c in chars.chars() {
        field.handle_event(AREA, &press(KeyCode::Char(c)));
    }
}

#[test]
fn decimal_entry_full_round_trip() {
    let mut field = EntryField::text(KeypadMode::Decimal).with_placeholder("Amount");
    assert_eq!(field.handle_event(AREA, &press(KeyCode::Enter)), Some(FieldEvent::Opened));

    type_chars(&mut field, "5.2");
    field.handle_event(AREA, &press(KeyCode::Backspace));
    field.handle_event(AREA, &press(KeyCode::Backspace));
    // "5.2" -> "5." -> "5"
    assert_eq!(field.handle_event(AREA, &press(KeyCode::Enter)), Some(FieldEvent::Committed));
    assert_eq!(field.text_value(), Some("5"));
}

#[test]
fn separator_first_auto_prefixes_zero() {
    let mut field = EntryField::text(KeypadMode::Decimal);
    field.open();
    type_chars(&mut field, ".");
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.text_value(), Some("0."));
}

#[test]
fn locale_separator_drives_the_pad() {
    let locale = Locale::new("de-DE");
    let mut field = EntryField::text(KeypadMode::Decimal).with_locale(&locale);
    field.open();
    type_chars(&mut field, "1,5");
    // A second comma is idempotent, and the point is not a separator here.
    type_chars(&mut field, ",.");
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.text_value(), Some("1,5"));
}

#[test]
fn bounded_numeric_entry_rejects_overflowing_digit() {
    let mut field = EntryField::number().with_bounds(Bounds::new(0, 100));
    field.open();
    type_chars(&mut field, "150");
    // 1 -> 15 -> (150 rejected)
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.number_value(), Some(15));
}

#[test]
fn cancelled_entry_never_touches_the_value() {
    let mut field = EntryField::text(KeypadMode::Decimal).with_text("7.5");
    field.open();
    for _ in 0..5 {
        field.handle_event(AREA, &press(KeyCode::Backspace));
    }
    type_chars(&mut field, "123");
    field.handle_event(AREA, &press(KeyCode::Escape));
    assert_eq!(field.text_value(), Some("7.5"));
}

#[test]
fn rotary_accumulator_steps_once_per_threshold() {
    let mut field = EntryField::number().with_bounds(Bounds::new(0, 10)).with_number(5);
    field.open();
    field.handle_event(AREA, &Event::Rotary(RotaryEvent::Delta(0.6)));
    field.handle_event(AREA, &press(KeyCode::Enter));
    // First tick stays below the threshold.
    assert_eq!(field.number_value(), Some(5));

    field.open();
    field.handle_event(AREA, &Event::Rotary(RotaryEvent::Delta(0.6)));
    field.handle_event(AREA, &Event::Rotary(RotaryEvent::Delta(0.6)));
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.number_value(), Some(6));
}

#[test]
fn absolute_dial_binding_sets_the_value() {
    let mut field = EntryField::number()
        .with_bounds(Bounds::new(0, 60))
        .with_rotary(RotaryBinding::Absolute)
        .with_number(15);
    field.open();
    field.handle_event(AREA, &Event::Rotary(RotaryEvent::Position(44.7)));
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.number_value(), Some(45));
}

#[test]
fn pointer_driven_entry_on_the_rendered_pad() {
    let mut field = EntryField::text(KeypadMode::Decimal);
    field.open();

    // Find the '5' key cap by scanning the rendered frame, then tap it.
    let mut buf = Buffer::new(AREA.width, AREA.height);
    field.render(AREA, &mut buf);
    let mut tapped = false;
    'scan: for y in 0..AREA.height {
        for x in 0..AREA.width {
            if buf.get(x, y).unwrap().ch == '5' {
                field.handle_event(AREA, &Event::Pointer(PointerEvent::down(x, y)));
                field.handle_event(AREA, &Event::Pointer(PointerEvent::up(x, y)));
                tapped = true;
                break 'scan;
            }
        }
    }
    assert!(tapped, "rendered pad should show a 5 key");

    field.handle_event(AREA, &Event::Tick(Duration::from_millis(100)));
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.text_value(), Some("5"));
}

#[test]
fn reopened_session_is_seeded_from_the_committed_value() {
    let mut field = EntryField::text(KeypadMode::Decimal);
    field.open();
    type_chars(&mut field, "12");
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.text_value(), Some("12"));

    field.open();
    type_chars(&mut field, ".5");
    field.handle_event(AREA, &press(KeyCode::Enter));
    assert_eq!(field.text_value(), Some("12.5"));
}
