use serde::{Deserialize, Serialize};

use crate::hud::geometry::Rect;
use crate::hud::widget::{InputCode, KeySpec, WidgetKind};

/// The layout was designed for a 1920x1080 screen; key heights are
/// derived from widths through this aspect factor so the boxes stay
/// square-ish on 16:9 viewports.
pub const SCREEN_1920_1080_RATIO: f64 = 1.777;

// GLFW scancodes for the default movement keys.
const KEY_W: i32 = 87;
const KEY_A: i32 = 65;
const KEY_S: i32 = 83;
const KEY_D: i32 = 68;

const MOUSE_LEFT: i32 = 0;
const MOUSE_RIGHT: i32 = 1;
const KEY_SPACE: i32 = 32;

/// Ordered set of tracked inputs, fixed for the process lifetime.
/// Declaration order is both dispatch priority and draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudLayout {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default = "default_keys")]
    pub keys: Vec<KeySpec>,
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            debug_logging: false,
            keys: default_keys(),
        }
    }
}

impl HudLayout {
    /// Load a layout from a JSON file. A missing or empty file yields
    /// the default layout; malformed JSON is an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// The reference arrangement: WASD movement keys, two CPS-counting
/// mouse buttons and a jump bar, laid out from a base origin in
/// percentage space.
fn default_keys() -> Vec<KeySpec> {
    let base_x = 75.0;
    let base_y = 25.0;
    let width = 5.0;
    let height = width * SCREEN_1920_1080_RATIO;

    vec![
        KeySpec {
            bounds: Rect::new(base_x, base_y, width, height),
            code: InputCode::Keyboard(KEY_W),
            label: None,
            kind: WidgetKind::Standard,
        },
        KeySpec {
            bounds: Rect::new(base_x, base_y + height, width, height),
            code: InputCode::Keyboard(KEY_S),
            label: None,
            kind: WidgetKind::Standard,
        },
        KeySpec {
            bounds: Rect::new(base_x - width, base_y + height, width, height),
            code: InputCode::Keyboard(KEY_A),
            label: None,
            kind: WidgetKind::Standard,
        },
        KeySpec {
            bounds: Rect::new(base_x + width, base_y + height, width, height),
            code: InputCode::Keyboard(KEY_D),
            label: None,
            kind: WidgetKind::Standard,
        },
        KeySpec {
            bounds: Rect::new(base_x - width, base_y + height * 2.0, width * 1.5, height),
            code: InputCode::Mouse(MOUSE_LEFT),
            label: Some("LMB".into()),
            kind: WidgetKind::Cps,
        },
        KeySpec {
            bounds: Rect::new(
                base_x + width * 0.5,
                base_y + height * 2.0,
                width * 1.5,
                height,
            ),
            code: InputCode::Mouse(MOUSE_RIGHT),
            label: Some("RMB".into()),
            kind: WidgetKind::Cps,
        },
        KeySpec {
            bounds: Rect::new(
                base_x - width,
                base_y + height * 3.0,
                width * 3.0,
                height / 2.0,
            ),
            code: InputCode::Keyboard(KEY_SPACE),
            label: Some("JUMP".into()),
            kind: WidgetKind::FilledBar,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_the_reference_seven_entries() {
        let layout = HudLayout::default();
        assert_eq!(layout.keys.len(), 7);

        let kinds: Vec<WidgetKind> = layout.keys.iter().map(|key| key.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WidgetKind::Standard,
                WidgetKind::Standard,
                WidgetKind::Standard,
                WidgetKind::Standard,
                WidgetKind::Cps,
                WidgetKind::Cps,
                WidgetKind::FilledBar,
            ]
        );
    }

    #[test]
    fn default_heights_follow_the_aspect_constant() {
        let layout = HudLayout::default();
        for key in &layout.keys[..6] {
            let expected = match key.kind {
                WidgetKind::Cps => 5.0 * SCREEN_1920_1080_RATIO,
                _ => key.bounds.width * SCREEN_1920_1080_RATIO,
            };
            assert!((key.bounds.height - expected).abs() < 1e-9);
        }
        // The jump bar is half a unit tall and three units wide.
        let jump = &layout.keys[6];
        assert!((jump.bounds.width - 15.0).abs() < 1e-9);
        assert!((jump.bounds.height - 5.0 * SCREEN_1920_1080_RATIO / 2.0).abs() < 1e-9);
    }

    #[test]
    fn mouse_buttons_are_the_only_cps_widgets() {
        let layout = HudLayout::default();
        for key in &layout.keys {
            match key.kind {
                WidgetKind::Cps => assert!(matches!(key.code, InputCode::Mouse(_))),
                _ => assert!(matches!(key.code, InputCode::Keyboard(_))),
            }
        }
    }

    #[test]
    fn layout_round_trips_through_json() {
        let layout = HudLayout::default();
        let json = serde_json::to_string(&layout).expect("serialize layout");
        let parsed: HudLayout = serde_json::from_str(&json).expect("parse layout");
        assert_eq!(parsed, layout);
    }

    #[test]
    fn empty_layout_file_falls_back_to_defaults() {
        let parsed: HudLayout = serde_json::from_str("{}").expect("parse empty object");
        assert_eq!(parsed, HudLayout::default());
    }
}
