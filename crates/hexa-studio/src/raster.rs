use std::path::Path;

use anyhow::{anyhow, Context, Result};
use resvg::{tiny_skia, usvg};

/// Rasterizes an SVG document and writes it as PNG.
pub fn write_png(svg: &str, path: &Path) -> Result<()> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("parsing generated SVG")?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("cannot allocate a {}x{} pixmap", size.width(), size.height()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .with_context(|| format!("writing {}", path.display()))
}
