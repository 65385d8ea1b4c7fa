//! Standalone bridge window.
//!
//! Opens a blocking window and draws a small control panel — enough to
//! watch the repaint scheduler at work: the frame counter only advances
//! while something actually changes on screen, and `RUST_LOG=trace` shows
//! the per-tick diff decisions.
//!
//! ```sh
//! cargo run -p puente-imgui --example standalone
//! ```

use puente_imgui::{BridgeConfig, imgui, open_blocking};

struct DemoState {
    volume: f32,
    muted: bool,
    builds: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    open_blocking(
        "puente demo".to_owned(),
        480,
        360,
        1.0,
        BridgeConfig::new().with_background_color([0.12, 0.12, 0.14, 1.0]),
        DemoState {
            volume: 0.5,
            muted: false,
            builds: 0,
        },
        |_imgui, _state| {},
        |ui, state| {
            // The counter stays out of the UI on purpose: drawing it would
            // make every frame differ and force a repaint per build.
            state.builds += 1;
            if state.builds % 256 == 0 {
                tracing::debug!(builds = state.builds, "frame builds so far");
            }

            ui.window("demo panel")
                .size([320.0, 200.0], imgui::Condition::FirstUseEver)
                .build(|| {
                    ui.slider("volume", 0.0, 1.0, &mut state.volume);
                    ui.checkbox("mute", &mut state.muted);
                    ui.separator();
                    ui.text_wrapped(
                        "Leave the mouse still: frame builds keep ticking at the \
                         repaint interval, but no repaint is issued while the \
                         draw output stays byte-identical. RUST_LOG=trace shows \
                         each diff decision.",
                    );
                });
        },
    );
}
