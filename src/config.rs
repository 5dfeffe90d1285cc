//! Compile-time settings: refresh cadence, canvas geometry and palette.

use std::time::Duration;

/// Delay between two samples, measured from the end of the previous tick.
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(500);

pub const WINDOW_TITLE: &str = "CPU Monitor";

/// Bar mode geometry (logical pixels)
pub mod bars {
    pub const BAR_WIDTH: f32 = 16.0;
    pub const BAR_SPACING: f32 = 4.0;
    pub const MAX_BAR_HEIGHT: f32 = 120.0;
    /// Distance from the canvas top to the top of every slot.
    pub const TOP_MARGIN: f32 = 10.0;
    /// Extra canvas height below the slots.
    pub const CANVAS_EXTRA_HEIGHT: f32 = 30.0;
    /// Inset of the foreground bar inside its slot.
    pub const BAR_INSET: f32 = 2.0;
}

/// Heatmap mode geometry (logical pixels)
pub mod heatmap {
    pub const CELL_SIZE: f32 = 40.0;
    pub const CELL_SPACING: f32 = 4.0;
    pub const CANVAS_EXTRA_HEIGHT: f32 = 10.0;
}

/// Window chrome around the canvas (logical pixels)
pub mod window {
    /// Height taken by the two control rows and the status line.
    pub const CONTROLS_HEIGHT: f32 = 84.0;
    /// Narrow canvases still leave room for the control rows.
    pub const MIN_WIDTH: f32 = 220.0;
    pub const PADDING: f32 = 8.0;
}

pub mod colors {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
    pub const TEXT: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);

    pub const BAR_SLOT: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
    pub const BAR_SLOT_OUTLINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    pub const BAR_FILL: Color32 = Color32::from_rgb(0x4A, 0x6B, 0xFF);

    pub const CELL_OUTLINE: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
    pub const CELL_PLACEHOLDER: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);

    pub const BUTTON: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(0x4A, 0x6B, 0xFF);
    pub const BUTTON_TEXT: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);
}
