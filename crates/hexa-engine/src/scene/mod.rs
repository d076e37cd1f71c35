//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - define the [`DrawingSurface`] capability widgets paint through
//! - record surface calls as renderer-agnostic draw commands ([`DrawList`])
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod surface;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{FillCmd, Path, PathEl, StrokeCmd};
pub use surface::DrawingSurface;
