//! Translate baseview input events into the bridge's input state.
//!
//! The translator is a pure state-mutation relay: each host event mutates
//! the [`InputState`] and reports *how* the claim back to the host should
//! be decided. The actual claim is read from the toolkit's capture-want
//! flags by the handler after the mutation — never computed here.

use baseview::{MouseButton as BvMouseButton, MouseEvent, ScrollDelta, WindowEvent};
use keyboard_types::{Key, KeyState, KeyboardEvent};
use puente_core::{InputState, SpecialKey};

/// Scroll-wheel pixels per line, for hosts that report pixel deltas.
const PIXELS_PER_LINE: f32 = 24.0;

/// How an event's claim answer to the host is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Claim {
    /// Never claimed. Pointer motion must not block host dispatch —
    /// hovering a widget is not consuming the event.
    Never,
    /// Claimed when the toolkit currently wants mouse capture.
    WantsMouse,
    /// Claimed when the toolkit currently wants keyboard capture.
    WantsKeyboard,
}

/// Apply a baseview mouse event to the input state.
///
/// Baseview reports physical pixel coordinates; positions are divided by
/// `scale` into logical coordinates (and rounded to the nearest integer by
/// the input state).
pub(crate) fn translate_mouse(event: &MouseEvent, scale: f64, input: &mut InputState) -> Claim {
    let scale_recip = 1.0 / scale as f32;

    match event {
        MouseEvent::CursorMoved { position, .. } => {
            input.set_mouse_pos(
                position.x as f32 * scale_recip,
                position.y as f32 * scale_recip,
            );
            Claim::Never
        }

        MouseEvent::ButtonPressed { button, .. } => {
            if let Some(slot) = button_slot(*button) {
                input.mouse_button_event(slot, true);
            }
            Claim::WantsMouse
        }

        MouseEvent::ButtonReleased { button, .. } => {
            if let Some(slot) = button_slot(*button) {
                input.mouse_button_event(slot, false);
            }
            Claim::WantsMouse
        }

        MouseEvent::WheelScrolled { delta, .. } => {
            let (h, v) = match delta {
                ScrollDelta::Lines { x, y } => (*x, *y),
                ScrollDelta::Pixels { x, y } => (
                    x * scale_recip / PIXELS_PER_LINE,
                    y * scale_recip / PIXELS_PER_LINE,
                ),
            };
            input.add_scroll(h, v);
            Claim::WantsMouse
        }

        MouseEvent::CursorLeft => {
            input.clear_mouse_pos();
            Claim::Never
        }

        _ => Claim::Never,
    }
}

/// Apply a baseview keyboard event to the input state.
pub(crate) fn translate_keyboard(event: &KeyboardEvent, input: &mut InputState) -> Claim {
    let press = event.state == KeyState::Down;

    match &event.key {
        Key::Character(text) => {
            // Raw characters feed text input on press; the first character,
            // when ASCII, also drives the key-down slot.
            if press {
                for ch in text.chars() {
                    input.queue_char(ch);
                }
            }
            if let Some(ch) = text.chars().next() {
                if ch.is_ascii() {
                    input.key_event(ch as u32, press);
                }
            }
        }

        // Editing keys that live in the character/control range.
        Key::Tab => input.key_event(9, press),
        Key::Backspace => input.key_event(8, press),
        Key::Enter => input.key_event(13, press),
        Key::Escape => input.key_event(27, press),
        Key::Delete => input.key_event(127, press),

        // Navigation keys, mapped down from the top of the key array.
        Key::ArrowLeft => input.special_key_event(SpecialKey::Left, press),
        Key::ArrowUp => input.special_key_event(SpecialKey::Up, press),
        Key::ArrowRight => input.special_key_event(SpecialKey::Right, press),
        Key::ArrowDown => input.special_key_event(SpecialKey::Down, press),
        Key::PageUp => input.special_key_event(SpecialKey::PageUp, press),
        Key::PageDown => input.special_key_event(SpecialKey::PageDown, press),
        Key::Home => input.special_key_event(SpecialKey::Home, press),
        Key::End => input.special_key_event(SpecialKey::End, press),
        Key::Insert => input.special_key_event(SpecialKey::Insert, press),

        // Modifiers set a slot and a dedicated flag.
        Key::Shift => input.special_key_event(SpecialKey::Shift, press),
        Key::Control => input.special_key_event(SpecialKey::Control, press),
        Key::Alt => input.special_key_event(SpecialKey::Alt, press),
        Key::Meta => input.special_key_event(SpecialKey::Super, press),

        Key::F1 => input.special_key_event(SpecialKey::F1, press),
        Key::F2 => input.special_key_event(SpecialKey::F2, press),
        Key::F3 => input.special_key_event(SpecialKey::F3, press),
        Key::F4 => input.special_key_event(SpecialKey::F4, press),
        Key::F5 => input.special_key_event(SpecialKey::F5, press),
        Key::F6 => input.special_key_event(SpecialKey::F6, press),
        Key::F7 => input.special_key_event(SpecialKey::F7, press),
        Key::F8 => input.special_key_event(SpecialKey::F8, press),
        Key::F9 => input.special_key_event(SpecialKey::F9, press),
        Key::F10 => input.special_key_event(SpecialKey::F10, press),
        Key::F11 => input.special_key_event(SpecialKey::F11, press),
        Key::F12 => input.special_key_event(SpecialKey::F12, press),

        _ => {}
    }

    Claim::WantsKeyboard
}

/// Apply a baseview window event. Returns `true` when the window was
/// resized (the caller updates its stored physical dimensions).
pub(crate) fn translate_window(
    event: &WindowEvent,
    physical_width: &mut u32,
    physical_height: &mut u32,
) -> bool {
    match event {
        WindowEvent::Resized(info) => {
            *physical_width = info.physical_size().width;
            *physical_height = info.physical_size().height;
            true
        }
        _ => false,
    }
}

/// Map a host mouse button to its toolkit button slot.
///
/// Left, right, and middle land on slots {0, 1, 2}. Against the host's
/// native left/middle/right button numbering {1, 2, 3} that is {0, 2, 1} —
/// right and middle swap relative to naive ordering; a toolkit quirk, kept.
/// Any other button is ignored outright: no state mutated, claim unaffected.
pub(crate) fn button_slot(button: BvMouseButton) -> Option<usize> {
    match button {
        BvMouseButton::Left => Some(0),
        BvMouseButton::Right => Some(1),
        BvMouseButton::Middle => Some(2),
        _ => None,
    }
}
