//! Core logic for the puente immediate-mode GUI bridge.
//!
//! Everything in this crate is independent of the windowing layer and the
//! GUI toolkit: plain data and pure decisions, fully unit-testable. The
//! `puente-imgui` crate wires these pieces to baseview, Dear ImGui, and
//! OpenGL.
//!
//! # Pieces
//!
//! - [`FrameSnapshot`] — deep, pooled copy of one frame's draw lists
//!   (commands + index/vertex buffers)
//! - [`frame_changed`] — positional, bit-exact comparison of two snapshots
//! - [`DrawCache`] — the last accepted frame plus a capture scratch,
//!   swapped in O(1) on change
//! - [`InputState`] — the toolkit-facing input record mutated by host
//!   events and drained once per frame build
//! - [`RepaintGate`] — interval throttle deciding whether an idle tick may
//!   build a new frame
//! - [`BridgeConfig`] — background color and repaint interval
//!
//! # Why byte-exact diffing
//!
//! An immediate-mode toolkit rebuilds its entire draw output every frame
//! whether or not anything visible changed. Comparing the new output
//! against the previous frame's buffers is the only cheap way to detect
//! "nothing actually changed" and skip the host repaint (window-system
//! composition, GPU swap). The comparison is deliberately *not* semantic:
//! the same visual result reached through differently-ordered commands
//! counts as changed.

pub mod cache;
pub mod config;
pub mod diff;
pub mod frame;
pub mod input;
pub mod repaint;

pub use cache::DrawCache;
pub use config::{BridgeConfig, DEFAULT_BACKGROUND};
pub use diff::frame_changed;
pub use frame::{DrawCommand, DrawIndex, DrawListSnapshot, FrameSnapshot, Vertex};
pub use input::{InputState, SpecialKey, KEY_SLOTS, MOUSE_BUTTONS};
pub use repaint::{RepaintGate, DEFAULT_REPAINT_INTERVAL};
