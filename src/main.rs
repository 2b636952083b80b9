use eframe::egui;

use keystroke_hud::app::HudApp;
use keystroke_hud::hud::layout::HudLayout;
use keystroke_hud::logging;

fn main() -> anyhow::Result<()> {
    let layout = HudLayout::load("hud_layout.json")?;
    logging::init(layout.debug_logging);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_transparent(true)
            .with_decorations(false)
            .with_maximized(true)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "Keystroke HUD",
        native_options,
        Box::new(move |_cc| Box::new(HudApp::new(layout))),
    )
    .map_err(|err| anyhow::anyhow!("overlay window failed: {err}"))?;

    Ok(())
}
