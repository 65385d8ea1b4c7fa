//! Toolkit context configuration, per-frame input flush, and draw-data
//! capture.
//!
//! Everything that touches `imgui::Io` or `imgui::DrawData` directly lives
//! here; the handler and translator deal only in `puente-core` types.

use imgui::{ConfigFlags, Context, DrawCmd, DrawData, Io, Key, MouseButton};
use puente_core::{DrawCommand, FrameSnapshot, InputState, SpecialKey, Vertex, KEY_SLOTS, MOUSE_BUTTONS};

/// Key slots the toolkit consumes, paired with their toolkit key.
///
/// Mirrors the classic bridge key map: the editing/navigation keys plus the
/// clipboard/undo shortcut letters. Letter slots are uppercase — the input
/// state folds lowercase presses onto them.
const KEY_MAP: &[(usize, Key)] = &[
    (b'\t' as usize, Key::Tab),
    (8, Key::Backspace),
    (b'\r' as usize, Key::Enter),
    (27, Key::Escape),
    (127, Key::Delete),
    (b' ' as usize, Key::Space),
    (b'A' as usize, Key::A),
    (b'C' as usize, Key::C),
    (b'V' as usize, Key::V),
    (b'X' as usize, Key::X),
    (b'Y' as usize, Key::Y),
    (b'Z' as usize, Key::Z),
    (KEY_SLOTS - SpecialKey::Left as usize, Key::LeftArrow),
    (KEY_SLOTS - SpecialKey::Up as usize, Key::UpArrow),
    (KEY_SLOTS - SpecialKey::Right as usize, Key::RightArrow),
    (KEY_SLOTS - SpecialKey::Down as usize, Key::DownArrow),
    (KEY_SLOTS - SpecialKey::PageUp as usize, Key::PageUp),
    (KEY_SLOTS - SpecialKey::PageDown as usize, Key::PageDown),
    (KEY_SLOTS - SpecialKey::Home as usize, Key::Home),
    (KEY_SLOTS - SpecialKey::End as usize, Key::End),
    (KEY_SLOTS - SpecialKey::Insert as usize, Key::Insert),
    (KEY_SLOTS - SpecialKey::Shift as usize, Key::ModShift),
    (KEY_SLOTS - SpecialKey::Control as usize, Key::ModCtrl),
    (KEY_SLOTS - SpecialKey::Alt as usize, Key::ModAlt),
    (KEY_SLOTS - SpecialKey::Super as usize, Key::ModSuper),
];

/// Toolkit button order for the tracked button slots.
const BUTTON_MAP: [MouseButton; MOUSE_BUTTONS] = [
    MouseButton::Left,
    MouseButton::Right,
    MouseButton::Middle,
    MouseButton::Extra1,
    MouseButton::Extra2,
];

/// Edge-detection shadow of the toolkit-facing input, so the flush only
/// queues transitions instead of re-sending level state every frame.
#[derive(Debug)]
pub(crate) struct IoShadow {
    keys: [bool; KEY_MAP.len()],
    buttons: [bool; MOUSE_BUTTONS],
    mouse_pos: [f32; 2],
}

impl IoShadow {
    pub(crate) fn new() -> Self {
        Self {
            keys: [false; KEY_MAP.len()],
            buttons: [false; MOUSE_BUTTONS],
            mouse_pos: [-f32::MAX, -f32::MAX],
        }
    }
}

/// One-time context configuration: keyboard navigation on, no ini
/// persistence, display geometry from the window.
pub(crate) fn configure(imgui: &mut Context, logical_width: f32, logical_height: f32, scale: f64) {
    imgui.set_ini_filename(None);

    let io = imgui.io_mut();
    io.config_flags |= ConfigFlags::NAV_ENABLE_KEYBOARD;
    io.display_size = [logical_width, logical_height];
    io.display_framebuffer_scale = [scale as f32, scale as f32];
}

/// Update the toolkit's display geometry from the current physical size.
pub(crate) fn sync_display(io: &mut Io, physical_width: u32, physical_height: u32, scale: f64) {
    let scale = scale as f32;
    io.display_size = [physical_width as f32 / scale, physical_height as f32 / scale];
    io.display_framebuffer_scale = [scale, scale];
}

/// Flush the accumulated input state into the toolkit.
///
/// Pointer position, buttons, and mapped keys are edge-detected against the
/// shadow so only transitions are queued; wheel deltas and queued text are
/// drained (the accumulators reset here, once per frame build).
pub(crate) fn flush_input(input: &mut InputState, shadow: &mut IoShadow, io: &mut Io) {
    let pos = input.mouse_pos();
    if pos != shadow.mouse_pos {
        io.add_mouse_pos_event(pos);
        shadow.mouse_pos = pos;
    }

    let buttons = input.mouse_down();
    for (slot, &down) in buttons.iter().enumerate() {
        if down != shadow.buttons[slot] {
            io.add_mouse_button_event(BUTTON_MAP[slot], down);
            shadow.buttons[slot] = down;
        }
    }

    let (wheel_h, wheel) = input.take_wheel();
    if wheel_h != 0.0 || wheel != 0.0 {
        io.add_mouse_wheel_event([wheel_h, wheel]);
    }

    for (i, &(slot, key)) in KEY_MAP.iter().enumerate() {
        let down = input.is_key_down(slot);
        if down != shadow.keys[i] {
            io.add_key_event(key, down);
            shadow.keys[i] = down;
        }
    }

    for ch in input.drain_chars() {
        io.add_input_character(ch);
    }
}

/// Deep-copy the toolkit's draw output into a frame snapshot.
pub(crate) fn capture_into(draw_data: &DrawData, frame: &mut FrameSnapshot) {
    for draw_list in draw_data.draw_lists() {
        let list = frame.push_list();

        for cmd in draw_list.commands() {
            list.push_command(match cmd {
                DrawCmd::Elements { count, cmd_params } => DrawCommand::Elements {
                    count: count as u32,
                    clip_rect: cmd_params.clip_rect,
                    texture: cmd_params.texture_id.id() as u64,
                    vtx_offset: cmd_params.vtx_offset as u32,
                    idx_offset: cmd_params.idx_offset as u32,
                },
                DrawCmd::ResetRenderState => DrawCommand::ResetState,
                DrawCmd::RawCallback { callback, .. } => DrawCommand::Callback {
                    id: callback as usize,
                },
            });
        }

        list.extend_indices(draw_list.idx_buffer());
        list.extend_vertices(draw_list.vtx_buffer().iter().map(|v| Vertex {
            pos: v.pos,
            uv: v.uv,
            color: v.col,
        }));
    }
}
