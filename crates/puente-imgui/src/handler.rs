//! Baseview [`WindowHandler`] driving the imgui frame loop.
//!
//! The handler owns the toolkit context, the GL renderer, and the
//! scheduling state. Each `on_frame()` call is one host idle tick:
//!
//! 1. Repaint gate: skip the tick unless the interval since the last
//!    completed paint has elapsed (first tick always passes)
//! 2. Flush accumulated input into the toolkit and build a frame (the
//!    user's `update` closure draws the UI)
//! 3. Snapshot the draw output and diff it against the last painted frame
//! 4. Only on a difference: clear to the background color, submit the draw
//!    data, swap buffers, and record the paint time
//!
//! Input events arrive through `on_event()` between ticks; the claim
//! answer returned to the host comes from the toolkit's capture-want
//! flags, read after the event has been applied.

use std::time::Instant;

use baseview::gl::GlConfig;
use baseview::{Event, EventStatus, Size, Window, WindowHandler, WindowOpenOptions, WindowScalePolicy};
use imgui_glow_renderer::AutoRenderer;
use raw_window_handle::HasRawWindowHandle;

use puente_core::{BridgeConfig, DrawCache, InputState, RepaintGate};

use crate::context::{self, IoShadow};
use crate::error::SetupError;
use crate::translate::{self, Claim};

/// Open the bridge inside a host-provided parent window.
///
/// This is the plugin path: the host hands over a raw parent handle (e.g.
/// from a CLAP/VST3 `set_parent` call) plus the DPI scale factor it wants
/// the UI rendered at. Returns a [`baseview::WindowHandle`] — dropping it
/// closes the window.
///
/// # Arguments
///
/// - `parent` — host parent window handle
/// - `title` — window title
/// - `width`, `height` — window size in logical pixels
/// - `scale` — host-reported DPI scale factor (1.0 = no scaling)
/// - `config` — background color and repaint interval
/// - `state` — user state threaded through both closures
/// - `build` — one-time setup before the first frame (fonts, style)
/// - `update` — per-frame UI content
#[allow(clippy::too_many_arguments)]
pub fn open_parented<P, S>(
    parent: &P,
    title: String,
    width: u32,
    height: u32,
    scale: f64,
    config: BridgeConfig,
    state: S,
    build: impl FnOnce(&mut imgui::Context, &mut S) + Send + 'static,
    update: impl FnMut(&imgui::Ui, &mut S) + Send + 'static,
) -> baseview::WindowHandle
where
    P: HasRawWindowHandle,
    S: Send + 'static,
{
    let options = window_options(title, width, height, scale);

    baseview::Window::open_parented(parent, options, move |window: &mut Window<'_>| {
        build_handler(window, width, height, scale, config, state, build, update)
    })
}

/// Open the bridge as a standalone window running its own event loop.
///
/// Blocks until the window closes. Meant for demos and manual testing of
/// plugin UIs outside a host.
#[allow(clippy::too_many_arguments)]
pub fn open_blocking<S>(
    title: String,
    width: u32,
    height: u32,
    scale: f64,
    config: BridgeConfig,
    state: S,
    build: impl FnOnce(&mut imgui::Context, &mut S) + Send + 'static,
    update: impl FnMut(&imgui::Ui, &mut S) + Send + 'static,
) where
    S: Send + 'static,
{
    let options = window_options(title, width, height, scale);

    baseview::Window::open_blocking(options, move |window: &mut Window<'_>| {
        build_handler(window, width, height, scale, config, state, build, update)
    });
}

fn window_options(title: String, width: u32, height: u32, scale: f64) -> WindowOpenOptions {
    WindowOpenOptions {
        title,
        size: Size::new(f64::from(width), f64::from(height)),
        scale: WindowScalePolicy::ScaleFactor(scale),
        gl_config: Some(GlConfig {
            version: (3, 2),
            ..GlConfig::default()
        }),
    }
}

/// Construct the handler inside baseview's window-open closure.
///
/// The closure signature is infallible, so setup failure is fatal here —
/// logged, then surfaced as a panic into the host's window machinery.
#[allow(clippy::too_many_arguments)]
fn build_handler<S: Send + 'static>(
    window: &mut Window<'_>,
    width: u32,
    height: u32,
    scale: f64,
    config: BridgeConfig,
    state: S,
    build: impl FnOnce(&mut imgui::Context, &mut S) + Send + 'static,
    update: impl FnMut(&imgui::Ui, &mut S) + Send + 'static,
) -> BridgeHandler<S> {
    BridgeHandler::new(window, width, height, scale, config, state, build, Box::new(update))
        .unwrap_or_else(|err| {
            tracing::error!(%err, "imgui bridge setup failed");
            panic!("imgui bridge setup failed: {err}");
        })
}

/// Baseview window handler owning the toolkit context and scheduler state.
///
/// Lives for the duration of the window. Single-threaded: every callback
/// runs on the host's window thread, and nothing here blocks.
struct BridgeHandler<S> {
    // Teardown is reverse-init by declaration order: the renderer releases
    // its GL objects before the toolkit context they were created for goes
    // away, and no toolkit call can outlive `imgui`.
    renderer: AutoRenderer,
    imgui: imgui::Context,

    input: InputState,
    shadow: IoShadow,
    cache: DrawCache,
    gate: RepaintGate,

    background: [f32; 4],
    physical_width: u32,
    physical_height: u32,
    scale: f64,
    last_frame: Instant,

    state: S,
    #[allow(clippy::type_complexity)]
    update_fn: Box<dyn FnMut(&imgui::Ui, &mut S) + Send>,
}

impl<S: Send + 'static> BridgeHandler<S> {
    #[allow(clippy::too_many_arguments)]
    fn new(
        window: &mut Window<'_>,
        width: u32,
        height: u32,
        scale: f64,
        config: BridgeConfig,
        mut state: S,
        build: impl FnOnce(&mut imgui::Context, &mut S),
        update_fn: Box<dyn FnMut(&imgui::Ui, &mut S) + Send>,
    ) -> Result<Self, SetupError> {
        let gl_context = window.gl_context().ok_or(SetupError::NoGlContext)?;

        #[allow(unsafe_code)]
        // SAFETY: make_current binds the GL context to this thread; all
        // subsequent calls (renderer init included) run on the same thread.
        unsafe {
            gl_context.make_current();
        }

        #[allow(unsafe_code)]
        // SAFETY: glow::Context wraps raw GL function pointers loaded from
        // the baseview GL context, which is valid for the window lifetime.
        let gl = unsafe {
            glow::Context::from_loader_function(|s| gl_context.get_proc_address(s))
        };

        let mut imgui = imgui::Context::create();
        context::configure(&mut imgui, width as f32, height as f32, scale);

        // One-time user setup runs before renderer init so any fonts it
        // registers land in the atlas texture the renderer uploads.
        build(&mut imgui, &mut state);

        let renderer = AutoRenderer::initialize(gl, &mut imgui)
            .map_err(|err| SetupError::RendererInit(err.to_string()))?;

        let physical_width = (f64::from(width) * scale) as u32;
        let physical_height = (f64::from(height) * scale) as u32;
        tracing::debug!(physical_width, physical_height, scale, "imgui bridge ready");

        Ok(Self {
            renderer,
            imgui,
            input: InputState::new(),
            shadow: IoShadow::new(),
            cache: DrawCache::new(),
            gate: RepaintGate::new(config.repaint_interval),
            background: config.background_color,
            physical_width,
            physical_height,
            scale,
            last_frame: Instant::now(),
            state,
            update_fn,
        })
    }

    fn claim_status(&self, claim: Claim) -> EventStatus {
        let io = self.imgui.io();
        let claimed = match claim {
            Claim::Never => false,
            Claim::WantsMouse => io.want_capture_mouse,
            Claim::WantsKeyboard => io.want_capture_keyboard,
        };
        if claimed {
            EventStatus::Captured
        } else {
            EventStatus::Ignored
        }
    }
}

impl<S: Send + 'static> WindowHandler for BridgeHandler<S> {
    fn on_frame(&mut self, window: &mut Window<'_>) {
        // Host idle tick: the host may call this arbitrarily often, so the
        // gate throttles frame builds to the configured interval.
        if !self.gate.should_build(Instant::now()) {
            return;
        }

        let gl_context = window.gl_context().unwrap();
        #[allow(unsafe_code)]
        // SAFETY: rebinds the GL context to this thread for the frame; the
        // handler only ever runs on the window thread.
        unsafe {
            gl_context.make_current();
        }

        // Feed the toolkit: elapsed time, display geometry, queued input.
        let now = Instant::now();
        let io = self.imgui.io_mut();
        io.update_delta_time(now - self.last_frame);
        self.last_frame = now;
        context::sync_display(io, self.physical_width, self.physical_height, self.scale);
        context::flush_input(&mut self.input, &mut self.shadow, io);

        // Build the frame: the user's update closure draws the UI.
        let ui = self.imgui.new_frame();
        (self.update_fn)(ui, &mut self.state);
        let draw_data = self.imgui.render();

        // Nothing to draw yet — not an error, just skip the tick.
        if !draw_data.valid {
            return;
        }

        // Diff against the last painted frame; a byte-identical frame
        // means the repaint (composition, GPU submission, swap) is skipped
        // entirely.
        if !self
            .cache
            .submit_with(|frame| context::capture_into(draw_data, frame))
        {
            return;
        }

        // Present: viewport, clear, submit, swap.
        #[allow(unsafe_code)]
        // SAFETY: plain GL state calls on the context made current above.
        unsafe {
            use glow::HasContext;
            let gl = self.renderer.gl_context();
            gl.viewport(0, 0, self.physical_width as i32, self.physical_height as i32);
            let [r, g, b, a] = self.background;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let Err(err) = self.renderer.render(draw_data) {
            tracing::error!(%err, "draw-data submission failed");
        }
        gl_context.swap_buffers();

        // The gate measures from completed paints, so the timestamp lands
        // here and not at the build decision.
        self.gate.mark_painted(Instant::now());
    }

    fn on_event(&mut self, _window: &mut Window<'_>, event: Event) -> EventStatus {
        match event {
            Event::Mouse(event) => {
                let claim = translate::translate_mouse(&event, self.scale, &mut self.input);
                self.claim_status(claim)
            }

            Event::Keyboard(event) => {
                let claim = translate::translate_keyboard(&event, &mut self.input);
                self.claim_status(claim)
            }

            Event::Window(event) => {
                if translate::translate_window(
                    &event,
                    &mut self.physical_width,
                    &mut self.physical_height,
                ) {
                    tracing::debug!(
                        width = self.physical_width,
                        height = self.physical_height,
                        "window reshaped"
                    );
                }
                EventStatus::Captured
            }
        }
    }
}
