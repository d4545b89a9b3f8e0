//! Decorative canvas drawings
//!
//! Each drawing is built as a [`Scene`] by a pure function of the canvas
//! size and a random source, then painted onto a 2D context. Keeping the
//! two steps apart means the randomized layout can be checked without a
//! browser.

pub mod sachet;
pub mod word_art;

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::dom;
use crate::error::{Result, SiteError};

/// Fill or stroke source
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Color(String),
    Linear(LinearGradient),
}

impl Paint {
    pub fn color(css: &str) -> Self {
        Self::Color(css.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// (offset in 0..=1, css color)
    pub stops: Vec<(f32, String)>,
}

/// Path segments, in canvas path-API terms
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// control point, end point
    QuadTo(f64, f64, f64, f64),
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Path(Vec<Segment>),
    Circle { x: f64, y: f64, radius: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextPass {
    Stroke,
    Fill,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Fill { shape: Shape, paint: Paint },
    FillAndStroke { shape: Shape, fill: Paint, stroke: Stroke },
    /// Centered text style (`textAlign = center`, `textBaseline = middle`)
    Font(String),
    Shadow { color: String, blur: f64 },
    Text {
        text: String,
        x: f64,
        y: f64,
        pass: TextPass,
        paint: Paint,
        line_width: f64,
    },
}

/// Ordered list of draw operations
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn fill(&mut self, shape: Shape, paint: Paint) {
        self.push(DrawOp::Fill { shape, paint });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Every filled circle with its paint
    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, &Paint)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill {
                shape: Shape::Circle { x, y, radius },
                paint,
            } => Some((*x, *y, *radius, paint)),
            _ => None,
        })
    }

    /// Draw every op in order onto `ctx`
    pub fn paint(&self, ctx: &CanvasRenderingContext2d) -> Result<()> {
        for op in &self.ops {
            paint_op(ctx, op)?;
        }
        Ok(())
    }
}

#[allow(deprecated)] // web-sys set_fill_style deprecation is overzealous
fn apply_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) -> Result<()> {
    match paint {
        Paint::Color(css) => ctx.set_fill_style(&css.into()),
        Paint::Linear(gradient) => {
            let canvas_gradient = build_gradient(ctx, gradient)?;
            ctx.set_fill_style(&canvas_gradient);
        }
    }
    Ok(())
}

#[allow(deprecated)]
fn apply_stroke(ctx: &CanvasRenderingContext2d, paint: &Paint) -> Result<()> {
    match paint {
        Paint::Color(css) => ctx.set_stroke_style(&css.into()),
        Paint::Linear(gradient) => {
            let canvas_gradient = build_gradient(ctx, gradient)?;
            ctx.set_stroke_style(&canvas_gradient);
        }
    }
    Ok(())
}

fn build_gradient(
    ctx: &CanvasRenderingContext2d,
    gradient: &LinearGradient,
) -> Result<web_sys::CanvasGradient> {
    let (x0, y0) = gradient.from;
    let (x1, y1) = gradient.to;
    let canvas_gradient = ctx.create_linear_gradient(x0, y0, x1, y1);
    for (offset, color) in &gradient.stops {
        canvas_gradient.add_color_stop(*offset, color)?;
    }
    Ok(canvas_gradient)
}

fn trace_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<()> {
    ctx.begin_path();
    match shape {
        Shape::Rect { x, y, w, h } => ctx.rect(*x, *y, *w, *h),
        Shape::Circle { x, y, radius } => ctx.arc(*x, *y, *radius, 0.0, 2.0 * PI)?,
        Shape::Path(segments) => {
            for segment in segments {
                match *segment {
                    Segment::MoveTo(x, y) => ctx.move_to(x, y),
                    Segment::LineTo(x, y) => ctx.line_to(x, y),
                    Segment::QuadTo(cx, cy, x, y) => ctx.quadratic_curve_to(cx, cy, x, y),
                    Segment::Close => ctx.close_path(),
                }
            }
        }
    }
    Ok(())
}

fn paint_op(ctx: &CanvasRenderingContext2d, op: &DrawOp) -> Result<()> {
    match op {
        DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
        DrawOp::Save => ctx.save(),
        DrawOp::Restore => ctx.restore(),
        DrawOp::Translate(x, y) => ctx.translate(*x, *y)?,
        DrawOp::Rotate(angle) => ctx.rotate(*angle)?,
        DrawOp::Fill { shape, paint } => {
            apply_fill(ctx, paint)?;
            trace_shape(ctx, shape)?;
            ctx.fill();
        }
        DrawOp::FillAndStroke {
            shape,
            fill,
            stroke,
        } => {
            apply_fill(ctx, fill)?;
            apply_stroke(ctx, &stroke.paint)?;
            ctx.set_line_width(stroke.width);
            trace_shape(ctx, shape)?;
            ctx.fill();
            ctx.stroke();
        }
        DrawOp::Font(font) => {
            ctx.set_font(font);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
        }
        DrawOp::Shadow { color, blur } => {
            ctx.set_shadow_color(color);
            ctx.set_shadow_blur(*blur);
        }
        DrawOp::Text {
            text,
            x,
            y,
            pass,
            paint,
            line_width,
        } => match pass {
            TextPass::Stroke => {
                apply_stroke(ctx, paint)?;
                ctx.set_line_width(*line_width);
                ctx.stroke_text(text, *x, *y)?;
            }
            TextPass::Fill => {
                apply_fill(ctx, paint)?;
                ctx.fill_text(text, *x, *y)?;
            }
        },
    }
    Ok(())
}

/// A canvas together with its 2D context
pub struct CanvasTarget {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    /// Find `#id` and its 2D context; either missing is an absent widget
    pub fn locate(doc: &Document, id: &str) -> Result<Self> {
        let canvas: HtmlCanvasElement = dom::by_id(doc, id)?;
        let ctx = canvas
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SiteError::NoContext(id.to_string()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }
}
