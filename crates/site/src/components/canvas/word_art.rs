//! Word art: the tagline in a pink-to-violet gradient with floating aroma
//! particles scattered over the whole canvas.

use rand::Rng;
use web_sys::Document;

use super::{CanvasTarget, DrawOp, LinearGradient, Paint, Scene, Shape, TextPass};
use crate::config::WordArtConfig;
use crate::error::Result;

pub const PARTICLE_COUNT: usize = 12;
pub const PARTICLE_MIN_ALPHA: f64 = 0.3;
pub const PARTICLE_ALPHA_JITTER: f64 = 0.4;
pub const PARTICLE_MIN_RADIUS: f64 = 4.0;
pub const PARTICLE_RADIUS_JITTER: f64 = 6.0;

const FONT: &str = "700 56px 'Segoe UI', 'Arial', sans-serif";
const GRADIENT_STOPS: [(f32, &str); 3] = [(0.0, "#ffadc6"), (0.5, "#f77bb6"), (1.0, "#c07dff")];
const OUTLINE: &str = "rgba(255, 255, 255, 0.85)";
const OUTLINE_WIDTH: f64 = 5.0;
const SHADOW: &str = "rgba(106, 59, 109, 0.35)";
const SHADOW_BLUR: f64 = 12.0;

/// Particle fill for a given opacity
pub fn particle_color(alpha: f64) -> String {
    format!("rgba(255, 191, 105, {alpha})")
}

/// Build the word art for a `width` x `height` canvas
pub fn word_art_scene<R: Rng + ?Sized>(width: f64, height: f64, text: &str, rng: &mut R) -> Scene {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let gradient = Paint::Linear(LinearGradient {
        from: (0.0, 0.0),
        to: (width, 0.0),
        stops: GRADIENT_STOPS
            .iter()
            .map(|(offset, color)| (*offset, (*color).to_string()))
            .collect(),
    });

    let mut scene = Scene::new();
    scene.push(DrawOp::Clear { width, height });
    scene.push(DrawOp::Font(FONT.to_string()));

    scene.push(DrawOp::Shadow {
        color: SHADOW.to_string(),
        blur: SHADOW_BLUR,
    });
    scene.push(DrawOp::Text {
        text: text.to_string(),
        x: cx,
        y: cy,
        pass: TextPass::Stroke,
        paint: Paint::color(OUTLINE),
        line_width: OUTLINE_WIDTH,
    });

    scene.push(DrawOp::Shadow {
        color: SHADOW.to_string(),
        blur: 0.0,
    });
    scene.push(DrawOp::Text {
        text: text.to_string(),
        x: cx,
        y: cy,
        pass: TextPass::Fill,
        paint: gradient,
        line_width: OUTLINE_WIDTH,
    });

    for _ in 0..PARTICLE_COUNT {
        let alpha = rng
            .gen::<f64>()
            .mul_add(PARTICLE_ALPHA_JITTER, PARTICLE_MIN_ALPHA);
        let radius = rng
            .gen::<f64>()
            .mul_add(PARTICLE_RADIUS_JITTER, PARTICLE_MIN_RADIUS);
        let x = rng.gen::<f64>() * width;
        let y = rng.gen::<f64>() * height;
        scene.fill(Shape::Circle { x, y, radius }, Paint::Color(particle_color(alpha)));
    }

    scene
}

pub fn render(doc: &Document, config: &WordArtConfig) -> Result<()> {
    let target = CanvasTarget::locate(doc, &config.canvas_id)?;
    let (width, height) = target.size();
    word_art_scene(width, height, &config.text, &mut rand::thread_rng()).paint(&target.ctx)
}
