use std::time::Instant;

use eframe::egui;

use crate::hud::layout::HudLayout;
use crate::hud::names::StaticKeyNames;
use crate::hud::overlay::KeyOverlay;
use crate::hud::paint::paint_commands;
use crate::hud::widget::InputCode;

/// eframe shell around the overlay: feeds egui input events into the
/// dispatcher and repaints the widgets every frame.
pub struct HudApp {
    overlay: KeyOverlay,
    names: StaticKeyNames,
    started: Instant,
}

impl HudApp {
    pub fn new(layout: HudLayout) -> Self {
        Self {
            overlay: KeyOverlay::new(layout),
            names: StaticKeyNames,
            started: Instant::now(),
        }
    }

    /// Milliseconds since app start. `Instant` is monotonic, which the
    /// CPS purge relies on.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = self.now_ms();

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::Key { key, pressed, .. } => {
                        // Repeat events pass through unchanged; the CPS
                        // policy is one record per press event.
                        if let Some(scancode) = keyboard_scancode(*key) {
                            self.overlay
                                .handle_input(InputCode::Keyboard(scancode), *pressed, now_ms);
                        }
                    }
                    egui::Event::PointerButton {
                        button, pressed, ..
                    } => {
                        if let Some(id) = mouse_button_id(*button) {
                            self.overlay
                                .handle_input(InputCode::Mouse(id), *pressed, now_ms);
                        }
                    }
                    _ => {}
                }
            }
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let viewport = ui.max_rect();
                let commands = self.overlay.render(
                    viewport.width() as i32,
                    viewport.height() as i32,
                    now_ms,
                    &self.names,
                );
                paint_commands(ui.painter(), &commands);
            });

        // The CPS readout decays without further input, so keep frames
        // coming even when the event queue is idle.
        ctx.request_repaint();
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

/// GLFW scancode for an egui key, covering the printable keys the
/// overlay can track. Everything else is not ours to report.
fn keyboard_scancode(key: egui::Key) -> Option<i32> {
    use egui::Key;
    let code = match key {
        Key::Space => 32,
        Key::Num0 => 48,
        Key::Num1 => 49,
        Key::Num2 => 50,
        Key::Num3 => 51,
        Key::Num4 => 52,
        Key::Num5 => 53,
        Key::Num6 => 54,
        Key::Num7 => 55,
        Key::Num8 => 56,
        Key::Num9 => 57,
        Key::A => 65,
        Key::B => 66,
        Key::C => 67,
        Key::D => 68,
        Key::E => 69,
        Key::F => 70,
        Key::G => 71,
        Key::H => 72,
        Key::I => 73,
        Key::J => 74,
        Key::K => 75,
        Key::L => 76,
        Key::M => 77,
        Key::N => 78,
        Key::O => 79,
        Key::P => 80,
        Key::Q => 81,
        Key::R => 82,
        Key::S => 83,
        Key::T => 84,
        Key::U => 85,
        Key::V => 86,
        Key::W => 87,
        Key::X => 88,
        Key::Y => 89,
        Key::Z => 90,
        _ => return None,
    };
    Some(code)
}

fn mouse_button_id(button: egui::PointerButton) -> Option<i32> {
    match button {
        egui::PointerButton::Primary => Some(0),
        egui::PointerButton::Secondary => Some(1),
        egui::PointerButton::Middle => Some(2),
        _ => None,
    }
}
