//! Serializes a recorded `DrawList` into a standalone SVG document.

use hexa_engine::coords::{Rect, Vec2};
use hexa_engine::paint::{Color, Paint, StrokeGradient};
use hexa_engine::scene::{DrawCmd, DrawList, Path, PathEl};

/// Builds an SVG document of `width` x `height` containing every command of
/// `list` in paint order, on top of an optional solid background.
///
/// Stroke gradients become `linearGradient`s in user space running across
/// the diagonal of the stroked path's bounding box.
pub fn to_svg(list: &DrawList, width: u32, height: u32, background: Option<Color>) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    if let Some(bg) = background {
        body.push_str(&format!(
            "  <rect width=\"{width}\" height=\"{height}\" {}/>\n",
            paint_attrs("fill", "fill-opacity", bg)
        ));
    }

    for (i, item) in list.items().iter().enumerate() {
        match item {
            DrawCmd::Fill(fill) => {
                body.push_str(&format!(
                    "  <path d=\"{}\" {} stroke=\"none\"/>\n",
                    path_data(&fill.path, true),
                    paint_attrs("fill", "fill-opacity", fill.color)
                ));
            }
            DrawCmd::Stroke(stroke) => {
                let paint = match &stroke.paint {
                    Paint::Solid(c) => paint_attrs("stroke", "stroke-opacity", *c),
                    Paint::Gradient(g) => {
                        let id = format!("stroke-gradient-{i}");
                        match gradient_def(&id, g, &stroke.path) {
                            Some(def) => {
                                defs.push_str(&def);
                                format!("stroke=\"url(#{id})\"")
                            }
                            None => {
                                let first = g.stops.first().map(|s| s.color).unwrap_or_default();
                                paint_attrs("stroke", "stroke-opacity", first)
                            }
                        }
                    }
                };
                body.push_str(&format!(
                    "  <path d=\"{}\" {paint} stroke-width=\"{}\" fill=\"none\" \
                     stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
                    path_data(&stroke.path, false),
                    stroke.width
                ));
            }
        }
    }

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );
    if !defs.is_empty() {
        out.push_str(&format!("  <defs>\n{defs}  </defs>\n"));
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn path_data(path: &Path, close: bool) -> String {
    let mut d = String::new();
    for el in path.elements() {
        let (verb, p) = match *el {
            PathEl::MoveTo(p) => {
                if close && !d.is_empty() {
                    d.push_str("Z ");
                }
                ('M', p)
            }
            PathEl::LineTo(p) => ('L', p),
        };
        d.push_str(&format!("{verb}{:.3},{:.3} ", p.x, p.y));
    }
    if close && !d.is_empty() {
        d.push('Z');
    }
    d.trim_end().to_string()
}

fn gradient_def(id: &str, gradient: &StrokeGradient, path: &Path) -> Option<String> {
    if !gradient.is_valid() {
        return None;
    }
    let bounds = Rect::bounding(path.points())?;
    let (a, b): (Vec2, Vec2) = (bounds.origin, bounds.max());
    if a == b {
        return None;
    }

    let mut def = format!(
        "    <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
         x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\">\n",
        a.x, a.y, b.x, b.y
    );
    for stop in &gradient.stops {
        def.push_str(&format!(
            "      <stop offset=\"{}\" {}/>\n",
            stop.t,
            paint_attrs("stop-color", "stop-opacity", stop.color)
        ));
    }
    def.push_str("    </linearGradient>\n");
    Some(def)
}

/// `color_attr="rgb(..)" opacity_attr=".."` for a premultiplied color.
fn paint_attrs(color_attr: &str, opacity_attr: &str, color: Color) -> String {
    let (r, g, b, a) = color.to_straight();
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "{color_attr}=\"rgb({},{},{})\" {opacity_attr}=\"{a}\"",
        byte(r),
        byte(g),
        byte(b)
    )
}
