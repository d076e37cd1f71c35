pub(crate) mod fill;
pub(crate) mod path;
pub(crate) mod stroke;

pub use fill::FillCmd;
pub use path::{Path, PathEl};
pub use stroke::StrokeCmd;
