use hexa_ui::prelude::*;

/// Both hexagon widgets side by side, each in a square cell.
#[derive(Debug)]
pub struct Panel {
    pub ring: HexagonProgress,
    pub gauge: HexagonFill,
    pub cell: f32,
    pub padding: f32,
}

impl Panel {
    /// Canvas size needed to show both cells with padding all around.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.cell * 2.0 + self.padding * 3.0, self.cell + self.padding * 2.0)
    }

    fn cells(&self, rect: Rect) -> [Rect; 2] {
        let y = rect.origin.y + self.padding;
        let left = rect.origin.x + self.padding;
        let right = left + self.cell + self.padding;
        [Rect::new(left, y, self.cell, self.cell), Rect::new(right, y, self.cell, self.cell)]
    }
}

impl Widget for Panel {
    fn paint(&self, surface: &mut dyn DrawingSurface, rect: Rect) {
        let [ring_rect, gauge_rect] = self.cells(rect);
        self.gauge.paint(surface, gauge_rect);
        self.ring.paint(surface, ring_rect);
    }

    fn hit_test(&self, local: Vec2, size: Vec2) -> bool {
        let [ring_rect, gauge_rect] = self.cells(Rect::from_origin_size(Vec2::zero(), size));
        self.ring.hit_test(local - ring_rect.origin, ring_rect.size)
            || self.gauge.hit_test(local - gauge_rect.origin, gauge_rect.size)
    }
}
