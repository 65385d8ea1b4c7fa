//! Dear ImGui in a baseview window, with frame-diffed repaints.
//!
//! Glue between a host-driven plugin window and the imgui-rs immediate-mode
//! toolkit. The piece that makes it worth a crate is the repaint scheduler:
//! imgui rebuilds its entire draw output every frame whether or not anything
//! visible changed, so the bridge snapshots each frame's draw lists and only
//! pays for a real paint (clear, GPU submission, buffer swap) when the new
//! frame differs byte-for-byte from the last painted one.
//!
//! # Architecture
//!
//! ```text
//! host parent window (RawWindowHandle)
//!     │
//!     ▼
//! baseview::Window (child window + GL context)
//!     │
//!     ▼
//! BridgeHandler (this crate)
//!     ├── translate: baseview events → InputState + claim answers
//!     ├── frame loop: repaint gate → input flush → new_frame → user UI
//!     │               → render → snapshot diff
//!     └── present (only on change): viewport → clear → glow submission
//!     │
//!     ▼
//! puente-core (snapshots, diff engine, cache, gate)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use puente_imgui::{BridgeConfig, open_parented};
//!
//! let handle = open_parented(
//!     &parent,                       // host's parent window handle
//!     "my plugin".to_owned(),
//!     480, 360,
//!     scale,                         // host-reported DPI scale factor
//!     BridgeConfig::new(),
//!     MyState::default(),
//!     |_imgui, _state| {},           // one-time setup (fonts, style)
//!     |ui, state| {                  // per-frame UI
//!         ui.window("panel").build(|| ui.text(format!("{}", state.value)));
//!     },
//! );
//! ```
//!
//! One bridge window per process at a time: imgui-rs allows a single active
//! toolkit context, and the handler owns it exclusively for the window's
//! lifetime.

mod context;
mod error;
mod handler;
mod translate;

pub use error::SetupError;
pub use handler::{open_blocking, open_parented};
pub use puente_core::{BridgeConfig, DEFAULT_BACKGROUND, DEFAULT_REPAINT_INTERVAL};

// Re-exported so downstream crates build their UI against the exact toolkit
// version the bridge was compiled with.
pub use imgui;
