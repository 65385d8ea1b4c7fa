//! The toolkit-facing input record and its mutation semantics.
//!
//! Host events mutate an [`InputState`]; once per frame build the bridge
//! flushes it into the toolkit's own input structure. Keys, buttons, and
//! pointer position are level state that persists across frames; wheel
//! deltas and queued text characters accumulate between builds and are
//! drained by the flush.

/// Number of key slots tracked. ASCII key codes occupy the low range;
/// [`SpecialKey`] slots are mapped down from the top of the array.
pub const KEY_SLOTS: usize = 512;

/// Number of mouse button slots tracked by the toolkit.
pub const MOUSE_BUTTONS: usize = 5;

/// Non-printable keys delivered by the host outside the character range.
///
/// Each maps to the slot `KEY_SLOTS - discriminant`, counting down from
/// the top of the key array so the scheme can never collide with ASCII
/// key codes in the low range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    /// Function key F1.
    F1 = 1,
    /// Function key F2.
    F2,
    /// Function key F3.
    F3,
    /// Function key F4.
    F4,
    /// Function key F5.
    F5,
    /// Function key F6.
    F6,
    /// Function key F7.
    F7,
    /// Function key F8.
    F8,
    /// Function key F9.
    F9,
    /// Function key F10.
    F10,
    /// Function key F11.
    F11,
    /// Function key F12.
    F12,
    /// Left arrow.
    Left,
    /// Up arrow.
    Up,
    /// Right arrow.
    Right,
    /// Down arrow.
    Down,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Insert.
    Insert,
    /// Shift modifier (either side).
    Shift,
    /// Control modifier (either side).
    Control,
    /// Alt modifier (either side).
    Alt,
    /// Super / platform-command modifier (either side).
    Super,
}

impl SpecialKey {
    /// The key-array slot this key occupies.
    pub fn slot(self) -> usize {
        KEY_SLOTS - self as usize
    }
}

/// Mutable record of the current input state, as the toolkit expects it.
#[derive(Debug, Clone)]
pub struct InputState {
    keys_down: [bool; KEY_SLOTS],
    mouse_down: [bool; MOUSE_BUTTONS],
    mouse_pos: [f32; 2],
    wheel: f32,
    wheel_h: f32,
    chars: Vec<char>,
    shift: bool,
    ctrl: bool,
    alt: bool,
    super_key: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a state with nothing pressed and the pointer parked
    /// off-window.
    pub fn new() -> Self {
        Self {
            keys_down: [false; KEY_SLOTS],
            mouse_down: [false; MOUSE_BUTTONS],
            mouse_pos: [-f32::MAX, -f32::MAX],
            wheel: 0.0,
            wheel_h: 0.0,
            chars: Vec::new(),
            shift: false,
            ctrl: false,
            alt: false,
            super_key: false,
        }
    }

    /// Record a character-range key transition.
    ///
    /// Codes at or above 128 are ignored. Lowercase ASCII letters fold to
    /// uppercase before the slot is written — the toolkit tracks shortcut
    /// keys case-insensitively, so 'a' and 'A' share a slot.
    pub fn key_event(&mut self, code: u32, press: bool) {
        if code >= 128 {
            return;
        }
        let mut slot = code as usize;
        if (b'a' as usize..=b'z' as usize).contains(&slot) {
            slot -= 0x20;
        }
        self.keys_down[slot] = press;
    }

    /// Queue a character for the toolkit's text input. Queued characters
    /// are drained by the per-frame flush.
    pub fn queue_char(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Record a special (non-printable) key transition. Modifier keys also
    /// set their dedicated flags.
    pub fn special_key_event(&mut self, key: SpecialKey, press: bool) {
        self.keys_down[key.slot()] = press;
        match key {
            SpecialKey::Shift => self.shift = press,
            SpecialKey::Control => self.ctrl = press,
            SpecialKey::Alt => self.alt = press,
            SpecialKey::Super => self.super_key = press,
            _ => {}
        }
    }

    /// Record a mouse button transition for a toolkit button slot.
    /// Slots outside the tracked range are ignored.
    pub fn mouse_button_event(&mut self, slot: usize, press: bool) {
        if let Some(flag) = self.mouse_down.get_mut(slot) {
            *flag = press;
        }
    }

    /// Set the pointer position, rounded to the nearest integer.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_pos = [x.round(), y.round()];
    }

    /// Park the pointer off-window (cursor left the window).
    pub fn clear_mouse_pos(&mut self) {
        self.mouse_pos = [-f32::MAX, -f32::MAX];
    }

    /// Accumulate scroll deltas. Multiple events between frame builds
    /// compound additively.
    pub fn add_scroll(&mut self, horizontal: f32, vertical: f32) {
        self.wheel_h += horizontal;
        self.wheel += vertical;
    }

    /// Whether the given key slot is currently down.
    pub fn is_key_down(&self, slot: usize) -> bool {
        self.keys_down.get(slot).copied().unwrap_or(false)
    }

    /// Current mouse button states, indexed by toolkit button slot.
    pub fn mouse_down(&self) -> [bool; MOUSE_BUTTONS] {
        self.mouse_down
    }

    /// Current pointer position.
    pub fn mouse_pos(&self) -> [f32; 2] {
        self.mouse_pos
    }

    /// Modifier flags as (shift, ctrl, alt, super).
    pub fn modifiers(&self) -> (bool, bool, bool, bool) {
        (self.shift, self.ctrl, self.alt, self.super_key)
    }

    /// Take the accumulated (horizontal, vertical) wheel deltas, resetting
    /// the accumulators to zero.
    pub fn take_wheel(&mut self) -> (f32, f32) {
        let deltas = (self.wheel_h, self.wheel);
        self.wheel_h = 0.0;
        self.wheel = 0.0;
        deltas
    }

    /// Drain the queued text characters in arrival order.
    pub fn drain_chars(&mut self) -> std::vec::Drain<'_, char> {
        self.chars.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_folds_to_uppercase_slot() {
        let mut input = InputState::new();
        input.key_event(u32::from('a'), true);
        assert!(input.is_key_down('A' as usize));
        assert!(!input.is_key_down('a' as usize));

        input.key_event(u32::from('A'), false);
        assert!(!input.is_key_down('A' as usize));
    }

    #[test]
    fn test_non_letter_codes_keep_their_slot() {
        let mut input = InputState::new();
        input.key_event(u32::from('3'), true);
        assert!(input.is_key_down('3' as usize));
        input.key_event(13, true);
        assert!(input.is_key_down(13));
    }

    #[test]
    fn test_codes_outside_ascii_range_ignored() {
        let mut input = InputState::new();
        input.key_event(128, true);
        input.key_event(100_000, true);
        assert!(!(0..KEY_SLOTS).any(|slot| input.is_key_down(slot)));
    }

    #[test]
    fn test_special_slots_are_disjoint_from_ascii() {
        for key in [
            SpecialKey::F1,
            SpecialKey::F12,
            SpecialKey::Left,
            SpecialKey::Insert,
            SpecialKey::Super,
        ] {
            assert!(key.slot() >= 128, "slot {} collides with ASCII", key.slot());
            assert!(key.slot() < KEY_SLOTS);
        }
    }

    #[test]
    fn test_modifier_sets_slot_and_flag() {
        let mut input = InputState::new();
        input.special_key_event(SpecialKey::Shift, true);
        assert!(input.is_key_down(SpecialKey::Shift.slot()));
        assert_eq!(input.modifiers(), (true, false, false, false));

        input.special_key_event(SpecialKey::Shift, false);
        assert_eq!(input.modifiers(), (false, false, false, false));
    }

    #[test]
    fn test_scroll_accumulates_until_taken() {
        let mut input = InputState::new();
        input.add_scroll(0.0, 1.0);
        input.add_scroll(0.0, 1.0);
        input.add_scroll(-0.5, 0.0);

        assert_eq!(input.take_wheel(), (-0.5, 2.0));
        assert_eq!(input.take_wheel(), (0.0, 0.0));
    }

    #[test]
    fn test_mouse_pos_rounds_to_nearest_integer() {
        let mut input = InputState::new();
        input.set_mouse_pos(10.4, 20.6);
        assert_eq!(input.mouse_pos(), [10.0, 21.0]);
    }

    #[test]
    fn test_out_of_range_button_slot_ignored() {
        let mut input = InputState::new();
        input.mouse_button_event(MOUSE_BUTTONS, true);
        assert_eq!(input.mouse_down(), [false; MOUSE_BUTTONS]);
    }

    #[test]
    fn test_chars_drain_in_order() {
        let mut input = InputState::new();
        input.queue_char('h');
        input.queue_char('i');
        assert_eq!(input.drain_chars().collect::<String>(), "hi");
        assert_eq!(input.drain_chars().count(), 0);
    }
}
