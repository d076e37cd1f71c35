//! Hexa UI — hexagon progress widgets on top of `hexa-engine`.
//!
//! Two widgets share one [`ProgressState`](style::ProgressState) model:
//!
//! - [`HexagonProgress`](widgets::hexagon_progress::HexagonProgress) reveals
//!   the six edges of a hexagon outline one after another.
//! - [`HexagonFill`](widgets::hexagon_fill::HexagonFill) fills a hexagon from
//!   the bottom up.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hexa_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let mut ring = HexagonProgress::new().on_redraw(|| println!("redraw"));
//!
//! ring.set_progress(42.0);
//! let draw_list = ui.frame(&ring, Rect::new(0.0, 0.0, 64.0, 64.0));
//! // Hand draw_list to a rasterizer.
//! ```

pub mod hit;
pub mod redraw;
pub mod scene;
pub mod style;
pub mod widget;
pub mod widgets;

/// Everything a host needs to drive the widgets.
pub mod prelude {
    pub use crate::hit::contains_hexagon;
    pub use crate::redraw::RedrawRequest;
    pub use crate::scene::UiScene;
    pub use crate::style::{ExternalStyle, ProgressState};
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        hexagon_fill::{FillBand, HexagonFill},
        hexagon_progress::HexagonProgress,
    };

    // Re-export the engine primitives everyone needs.
    pub use hexa_engine::coords::{Rect, Segment, Vec2};
    pub use hexa_engine::paint::{Color, ColorStop, Paint, StrokeGradient};
    pub use hexa_engine::scene::{DrawCmd, DrawList, DrawingSurface};
}
