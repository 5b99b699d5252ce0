// src/theme.rs
use eframe::egui::Color32;

// Shared colors for both screens.
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const SAVINGS_GREEN: Color32 = Color32::from_rgb(22, 163, 74);
pub const ACTION_ORANGE: Color32 = Color32::from_rgb(234, 88, 12);
pub const ALERT_RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const NOTE_BLUE: Color32 = Color32::from_rgb(30, 64, 175);

/// Color for an instance's average CPU figure. The endpoint flags instances
/// below 15% utilization and recommends termination under 5%.
pub fn cpu_color(avg_cpu: f64) -> Color32 {
    if avg_cpu < 5.0 {
        ALERT_RED
    } else if avg_cpu < 15.0 {
        ACTION_ORANGE
    } else {
        SAVINGS_GREEN
    }
}
