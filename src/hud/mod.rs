pub mod color;
pub mod cps;
pub mod geometry;
pub mod layout;
pub mod names;
pub mod overlay;
pub mod paint;
pub mod widget;

pub use cps::CpsCounter;
pub use layout::HudLayout;
pub use overlay::KeyOverlay;
pub use widget::{DrawCommand, InputCode, KeySpec, KeyWidget, WidgetKind};
