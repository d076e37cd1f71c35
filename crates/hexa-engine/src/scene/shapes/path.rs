use crate::coords::Vec2;

/// One path element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
}

impl PathEl {
    #[inline]
    pub fn point(self) -> Vec2 {
        match self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p,
        }
    }
}

/// Polyline path made of one or more subpaths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathEl>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    /// All points in order, regardless of subpath.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.elements.iter().map(|el| el.point())
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) {
        self.elements.push(PathEl::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) {
        if self.elements.is_empty() {
            self.move_to(p);
        } else {
            self.elements.push(PathEl::LineTo(p));
        }
    }

    /// Sum of the lengths of every line element.
    pub fn length(&self) -> f32 {
        let mut total = 0.0;
        let mut prev: Option<Vec2> = None;
        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) => prev = Some(p),
                PathEl::LineTo(p) => {
                    if let Some(q) = prev {
                        total += q.distance(p);
                    }
                    prev = Some(p);
                }
            }
        }
        total
    }
}
