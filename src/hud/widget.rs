use serde::{Deserialize, Serialize};

use crate::hud::color::{self, Argb};
use crate::hud::cps::CpsCounter;
use crate::hud::geometry::{PixelRect, Rect};
use crate::hud::names::KeyNameResolver;

/// The overlay was designed against a 1920x1080 screen; text is scaled
/// relative to it on other viewports.
pub const BASE_SCREEN_WIDTH: f32 = 1920.0;
pub const BASE_SCREEN_HEIGHT: f32 = 1080.0;

/// Base multiplier applied to the drawn text to increase its font size.
pub const TEXT_BASE_SCALE: f32 = 4.0;

/// Shown when neither a fixed label nor the name resolver can name a key.
pub const UNKNOWN_KEY_LABEL: &str = "???";

/// External identifier of a tracked input. Keyboard scancodes and mouse
/// button ids live in distinct namespaces and never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCode {
    Keyboard(i32),
    Mouse(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Centered text label.
    Standard,
    /// Centered filled bar, ignores any label.
    FilledBar,
    /// Label line plus a clicks-per-second line.
    Cps,
}

/// Static description of one tracked input: where it sits, which code
/// it listens for, and how it renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySpec {
    pub bounds: Rect,
    pub code: InputCode,
    #[serde(default)]
    pub label: Option<String>,
    pub kind: WidgetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Vertically and horizontally centered on the given point.
    Center,
    /// Bottom of the line sits just above the given point.
    AboveCenter,
    /// Top of the line sits just below the given point.
    BelowCenter,
}

/// One host-side drawing primitive. Coordinates are pixels; text anchor
/// resolution against font metrics is the host's job.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: PixelRect,
        color: Argb,
    },
    Text {
        center_x: i32,
        center_y: i32,
        scale: f32,
        anchor: TextAnchor,
        text: String,
        color: Argb,
    },
}

/// Runtime state of one on-screen key indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyWidget {
    spec: KeySpec,
    pressed: bool,
    cps: Option<CpsCounter>,
}

impl KeyWidget {
    pub fn new(spec: KeySpec) -> Self {
        let cps = match spec.kind {
            WidgetKind::Cps => Some(CpsCounter::new()),
            _ => None,
        };
        Self {
            spec,
            pressed: false,
            cps,
        }
    }

    pub fn spec(&self) -> &KeySpec {
        &self.spec
    }

    pub fn code(&self) -> InputCode {
        self.spec.code
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Update the press state. Every `pressed == true` call records a
    /// click timestamp on CPS widgets, not only edge transitions; hosts
    /// that deliver repeat-while-held events therefore inflate the
    /// count, matching the overlay's historical behavior.
    pub fn set_pressed(&mut self, pressed: bool, now_ms: u64) {
        self.pressed = pressed;
        if pressed {
            if let Some(cps) = self.cps.as_mut() {
                cps.record(now_ms);
            }
        }
    }

    /// Current clicks-per-second reading. Zero for non-CPS widgets.
    pub fn current_cps(&mut self, now_ms: u64) -> usize {
        self.cps.as_mut().map_or(0, |cps| cps.count(now_ms))
    }

    /// Produce this widget's draw commands for the given viewport.
    /// Mutates nothing beyond the lazy purge inside the CPS query.
    pub fn render(
        &mut self,
        viewport_width: i32,
        viewport_height: i32,
        now_ms: u64,
        resolver: &dyn KeyNameResolver,
    ) -> Vec<DrawCommand> {
        let pixels = self.spec.bounds.to_pixels(viewport_width, viewport_height);
        let background = if self.pressed {
            color::BUTTON_DOWN
        } else {
            color::BUTTON_UP
        };

        // One pixel inset so neighboring keys visually separate.
        let mut commands = vec![DrawCommand::FillRect {
            rect: pixels.inset(1),
            color: background,
        }];

        let scale = text_scale(viewport_width, viewport_height);
        match self.spec.kind {
            WidgetKind::Standard => {
                commands.push(DrawCommand::Text {
                    center_x: pixels.center_x(),
                    center_y: pixels.center_y(),
                    scale,
                    anchor: TextAnchor::Center,
                    text: self.display_label(resolver),
                    color: color::TEXT,
                });
            }
            WidgetKind::FilledBar => {
                let offset_x = pixels.width / 4;
                let offset_y = pixels.height * 3 / 8;
                commands.push(DrawCommand::FillRect {
                    rect: PixelRect {
                        x: pixels.x + offset_x,
                        y: pixels.y + offset_y,
                        width: pixels.width - 2 * offset_x,
                        height: pixels.height - 2 * offset_y,
                    },
                    color: color::TEXT,
                });
            }
            WidgetKind::Cps => {
                // Two lines share the box, so the text is made smaller.
                let scale = scale * 0.75;
                let count = self.current_cps(now_ms);
                commands.push(DrawCommand::Text {
                    center_x: pixels.center_x(),
                    center_y: pixels.center_y(),
                    scale,
                    anchor: TextAnchor::AboveCenter,
                    text: self.display_label(resolver),
                    color: color::TEXT,
                });
                commands.push(DrawCommand::Text {
                    center_x: pixels.center_x(),
                    center_y: pixels.center_y(),
                    scale,
                    anchor: TextAnchor::BelowCenter,
                    text: format!("{count} CPS"),
                    color: color::TEXT,
                });
            }
        }

        commands
    }

    /// Fixed label if configured, otherwise the resolver's name for the
    /// code uppercased, otherwise a placeholder.
    fn display_label(&self, resolver: &dyn KeyNameResolver) -> String {
        match &self.spec.label {
            Some(label) => label.clone(),
            None => resolver
                .resolve(self.spec.code)
                .map(|name| name.to_uppercase())
                .unwrap_or_else(|| UNKNOWN_KEY_LABEL.to_string()),
        }
    }
}

/// Text scale for the current viewport relative to the design screen.
pub fn text_scale(viewport_width: i32, viewport_height: i32) -> f32 {
    (viewport_width as f32 / BASE_SCREEN_WIDTH).min(viewport_height as f32 / BASE_SCREEN_HEIGHT)
        * TEXT_BASE_SCALE
}
