//! Pure geometry helpers. No state, no drawing.

pub mod hexagon;
