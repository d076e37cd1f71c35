use std::fmt;

/// Host hook invoked whenever a widget's visible state changes.
///
/// Widgets call [`request`](Self::request) exactly once per discrete
/// mutation; the host decides when to actually repaint.
#[derive(Default)]
pub struct RedrawRequest {
    callback: Option<Box<dyn FnMut()>>,
}

impl RedrawRequest {
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Self { callback: Some(Box::new(f)) }
    }

    /// Replaces the host callback.
    pub fn set(&mut self, f: impl FnMut() + 'static) {
        self.callback = Some(Box::new(f));
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.callback.is_some()
    }

    pub fn request(&mut self) {
        match self.callback.as_mut() {
            Some(f) => f(),
            None => log::trace!("redraw requested with no host attached"),
        }
    }
}

impl fmt::Debug for RedrawRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawRequest")
            .field("connected", &self.is_connected())
            .finish()
    }
}
