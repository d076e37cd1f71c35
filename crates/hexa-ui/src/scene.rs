use hexa_engine::coords::{Rect, Vec2};
use hexa_engine::scene::DrawList;

use crate::widget::Widget;

/// Frame driver owned by the host.
///
/// Owns the `DrawList` that is refilled on every [`frame`](Self::frame)
/// call and routes pointer positions into widget-local hit tests.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let draw_list = ui.frame(&ring, Rect::new(0.0, 0.0, 64.0, 64.0));
/// svg.write(draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the draw list and paints `root` into `rect`.
    ///
    /// The returned list is valid until the next call to `frame`.
    #[must_use]
    pub fn frame(&mut self, root: &dyn Widget, rect: Rect) -> &DrawList {
        self.draw_list.clear();
        root.paint(&mut self.draw_list, rect);
        log::trace!("frame: {} draw commands", self.draw_list.items().len());
        &self.draw_list
    }

    /// Hit-tests `pos` (in the same space as `rect`) against `root`.
    pub fn hit_test(&self, root: &dyn Widget, rect: Rect, pos: Vec2) -> bool {
        root.hit_test(pos - rect.origin, rect.size)
    }
}
