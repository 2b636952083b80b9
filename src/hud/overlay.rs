use crate::hud::layout::HudLayout;
use crate::hud::names::KeyNameResolver;
use crate::hud::widget::{DrawCommand, InputCode, KeyWidget};

/// The overlay: owns every tracked widget, routes input events to them
/// and produces the per-frame draw command list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOverlay {
    widgets: Vec<KeyWidget>,
}

impl KeyOverlay {
    pub fn new(layout: HudLayout) -> Self {
        Self {
            widgets: layout.keys.into_iter().map(KeyWidget::new).collect(),
        }
    }

    pub fn widgets(&self) -> &[KeyWidget] {
        &self.widgets
    }

    /// Route one `(code, pressed)` event to the first widget bound to
    /// that code. Later widgets with a duplicate code never receive
    /// events. Unmatched codes are expected steady-state traffic, not
    /// errors.
    pub fn handle_input(&mut self, code: InputCode, pressed: bool, now_ms: u64) {
        match self.widgets.iter_mut().find(|widget| widget.code() == code) {
            Some(widget) => widget.set_pressed(pressed, now_ms),
            None => {
                tracing::trace!(?code, pressed, "input event matched no widget");
            }
        }
    }

    /// Draw commands for every widget in declared order.
    pub fn render(
        &mut self,
        viewport_width: i32,
        viewport_height: i32,
        now_ms: u64,
        resolver: &dyn KeyNameResolver,
    ) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.widgets.len() * 2);
        for widget in &mut self.widgets {
            commands.extend(widget.render(viewport_width, viewport_height, now_ms, resolver));
        }
        commands
    }
}
