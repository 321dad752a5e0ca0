use kurbo::Shape as _;

use crate::{
    foundation::{
        core::{CanvasSize, Point, Rgb8},
        error::{DatapaintError, DatapaintResult},
    },
    render::mark::{Mark, MarkSink},
};

const PATH_TOLERANCE: f64 = 0.1;

/// The shared paint surface. Marks are recorded into one vello_cpu context in
/// push order and rasterized once, into a transparent premultiplied RGBA8 buffer.
pub struct PaintLayer {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    marks: usize,
}

impl PaintLayer {
    pub fn new(size: CanvasSize) -> DatapaintResult<Self> {
        let (width, height) = surface_dims(size)?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            marks: 0,
        })
    }

    pub fn marks_painted(&self) -> usize {
        self.marks
    }

    /// Rasterizes everything painted so far. Output is premultiplied RGBA8.
    pub fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    fn set_color(&mut self, color: Rgb8, alpha: u8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, alpha,
        ));
    }
}

impl MarkSink for PaintLayer {
    fn push(&mut self, mark: Mark) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match mark {
            Mark::Polygon {
                points,
                color,
                alpha,
            } => {
                if points.len() < 3 || alpha == 0 {
                    return;
                }
                self.set_color(color, alpha);
                self.ctx.fill_path(&polyline_to_cpu(&points, true));
            }
            Mark::Polyline {
                points,
                width,
                color,
                alpha,
            } => {
                if points.len() < 2 || alpha == 0 {
                    return;
                }
                self.set_color(color, alpha);
                self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width.max(1.0)));
                self.ctx.stroke_path(&polyline_to_cpu(&points, false));
            }
            Mark::Dot {
                center,
                radius,
                color,
                alpha,
            } => {
                if alpha == 0 {
                    return;
                }
                self.set_color(color, alpha);
                let circle = kurbo::Circle::new(center, radius.max(1.0));
                let mut p = vello_cpu::kurbo::BezPath::new();
                for el in circle.path_elements(PATH_TOLERANCE) {
                    p.push(el);
                }
                self.ctx.fill_path(&p);
            }
        }
        self.marks += 1;
    }
}

pub(crate) fn surface_dims(size: CanvasSize) -> DatapaintResult<(u16, u16)> {
    let width: u16 = size
        .width
        .try_into()
        .map_err(|_| DatapaintError::render("surface width exceeds u16"))?;
    let height: u16 = size
        .height
        .try_into()
        .map_err(|_| DatapaintError::render("surface height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(DatapaintError::render("surface dimensions must be > 0"));
    }
    Ok((width, height))
}

/// Fills an ellipse into a fresh transparent surface; returns premultiplied RGBA8.
pub(crate) fn rasterize_ellipse(
    size: CanvasSize,
    center: Point,
    radii: (f64, f64),
    alpha: u8,
) -> DatapaintResult<Vec<u8>> {
    let (width, height) = surface_dims(size)?;
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, alpha));

    let e = kurbo::Ellipse::new(center, radii, 0.0);
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in e.path_elements(PATH_TOLERANCE) {
        p.push(el);
    }
    ctx.fill_path(&p);

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap.data_as_u8_slice().to_vec())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn polyline_to_cpu(points: &[Point], close: bool) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut it = points.iter();
    if let Some(&first) = it.next() {
        out.move_to(point_to_cpu(first));
        for &p in it {
            out.line_to(point_to_cpu(p));
        }
        if close {
            out.close_path();
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
