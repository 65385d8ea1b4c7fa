//! Bridge configuration surface.

use std::time::Duration;

use crate::repaint::DEFAULT_REPAINT_INTERVAL;

/// Default window clear color: dark neutral grey, opaque.
pub const DEFAULT_BACKGROUND: [f32; 4] = [0.25, 0.25, 0.25, 1.0];

/// Configuration for one bridge window, fixed at open time.
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    /// RGBA clear color applied before each paint.
    pub background_color: [f32; 4],
    /// Minimum interval between repaints.
    pub repaint_interval: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND,
            repaint_interval: DEFAULT_REPAINT_INTERVAL,
        }
    }
}

impl BridgeConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window clear color.
    pub fn with_background_color(mut self, color: [f32; 4]) -> Self {
        self.background_color = color;
        self
    }

    /// Set the minimum repaint interval.
    pub fn with_repaint_interval(mut self, interval: Duration) -> Self {
        self.repaint_interval = interval;
        self
    }
}
