use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::hud::widget::InputCode;

/// Host seam for turning an input code into a human-readable name when
/// a widget has no fixed label. Returning `None` makes the widget fall
/// back to a placeholder.
pub trait KeyNameResolver {
    fn resolve(&self, code: InputCode) -> Option<String>;
}

/// GLFW-style names for printable keyboard keys. Letter names come back
/// lowercase, like `glfwGetKeyName`; the widget uppercases them for
/// display. Mouse codes and non-printable keys resolve to `None`.
static PRINTABLE_KEY_NAMES: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    for (offset, name) in [
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z",
    ]
    .iter()
    .enumerate()
    {
        names.insert(65 + offset as i32, *name);
    }
    for (offset, name) in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]
        .iter()
        .enumerate()
    {
        names.insert(48 + offset as i32, *name);
    }
    names.insert(39, "'");
    names.insert(44, ",");
    names.insert(45, "-");
    names.insert(46, ".");
    names.insert(47, "/");
    names.insert(59, ";");
    names.insert(61, "=");
    names.insert(91, "[");
    names.insert(92, "\\");
    names.insert(93, "]");
    names.insert(96, "`");
    names
});

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticKeyNames;

impl KeyNameResolver for StaticKeyNames {
    fn resolve(&self, code: InputCode) -> Option<String> {
        match code {
            InputCode::Keyboard(scancode) => {
                PRINTABLE_KEY_NAMES.get(&scancode).map(|name| (*name).to_string())
            }
            InputCode::Mouse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_printable_keyboard_codes() {
        let names = StaticKeyNames;
        assert_eq!(names.resolve(InputCode::Keyboard(87)), Some("w".into()));
        assert_eq!(names.resolve(InputCode::Keyboard(48)), Some("0".into()));
        assert_eq!(names.resolve(InputCode::Keyboard(46)), Some(".".into()));
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        let names = StaticKeyNames;
        assert_eq!(names.resolve(InputCode::Keyboard(256)), None);
        assert_eq!(names.resolve(InputCode::Mouse(0)), None);
    }

    #[test]
    fn mouse_codes_never_borrow_keyboard_names() {
        // Mouse button 87 must not pick up the name of scancode 87.
        let names = StaticKeyNames;
        assert_eq!(names.resolve(InputCode::Mouse(87)), None);
    }
}
