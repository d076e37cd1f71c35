pub mod hexagon_fill;
pub mod hexagon_progress;
