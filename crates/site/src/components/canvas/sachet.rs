//! Sachet illustration: pastel background, tilted pouch, ribbon and a few
//! randomly placed aromatic notes.

use rand::Rng;
use web_sys::Document;

use super::{CanvasTarget, DrawOp, LinearGradient, Paint, Scene, Segment, Shape, Stroke};
use crate::config::SachetConfig;
use crate::error::Result;

pub const NOTE_COUNT: usize = 5;
/// Notes land within `[-40, 40)` horizontally and `[-20, 60)` vertically of
/// the center
pub const NOTE_SPREAD: f64 = 80.0;
pub const NOTE_OFFSET_X: f64 = -40.0;
pub const NOTE_OFFSET_Y: f64 = -20.0;
pub const NOTE_MIN_RADIUS: f64 = 8.0;
pub const NOTE_RADIUS_JITTER: f64 = 4.0;

const BACKGROUND_TOP: &str = "#fff7fb";
const BACKGROUND_BOTTOM: &str = "#f0c0d0";
const BODY_FILL: &str = "#ffffff";
const BODY_STROKE: &str = "#d9a5c0";
const RIBBON: &str = "#6a3b6d";
const NOTE: &str = "#ffbf69";
const TILT: f64 = -0.08;

fn body_outline() -> Shape {
    Shape::Path(vec![
        Segment::MoveTo(-60.0, -80.0),
        Segment::LineTo(60.0, -80.0),
        Segment::QuadTo(70.0, 0.0, 60.0, 80.0),
        Segment::LineTo(-60.0, 80.0),
        Segment::QuadTo(-70.0, 0.0, -60.0, -80.0),
        Segment::Close,
    ])
}

/// One ribbon tail; `side` is `1.0` for the right tail, `-1.0` for the left
fn ribbon_tail(cx: f64, cy: f64, side: f64) -> Shape {
    Shape::Path(vec![
        Segment::MoveTo(cx, cy - 95.0),
        Segment::LineTo(side.mul_add(25.0, cx), cy - 120.0),
        Segment::LineTo(side.mul_add(10.0, cx), cy - 95.0),
        Segment::Close,
    ])
}

/// Build the illustration for a `width` x `height` canvas
pub fn sachet_scene<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Scene {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let mut scene = Scene::new();

    scene.push(DrawOp::Clear { width, height });
    scene.fill(
        Shape::Rect {
            x: 0.0,
            y: 0.0,
            w: width,
            h: height,
        },
        Paint::Linear(LinearGradient {
            from: (0.0, 0.0),
            to: (0.0, height),
            stops: vec![
                (0.0, BACKGROUND_TOP.to_string()),
                (1.0, BACKGROUND_BOTTOM.to_string()),
            ],
        }),
    );

    scene.push(DrawOp::Save);
    scene.push(DrawOp::Translate(cx, cy));
    scene.push(DrawOp::Rotate(TILT));
    scene.push(DrawOp::FillAndStroke {
        shape: body_outline(),
        fill: Paint::color(BODY_FILL),
        stroke: Stroke {
            paint: Paint::color(BODY_STROKE),
            width: 3.0,
        },
    });
    scene.push(DrawOp::Restore);

    scene.fill(
        Shape::Rect {
            x: cx - 55.0,
            y: cy - 90.0,
            w: 110.0,
            h: 10.0,
        },
        Paint::color(RIBBON),
    );
    scene.fill(ribbon_tail(cx, cy, 1.0), Paint::color(RIBBON));
    scene.fill(ribbon_tail(cx, cy, -1.0), Paint::color(RIBBON));

    for _ in 0..NOTE_COUNT {
        let x = rng.gen::<f64>().mul_add(NOTE_SPREAD, NOTE_OFFSET_X) + cx;
        let y = rng.gen::<f64>().mul_add(NOTE_SPREAD, NOTE_OFFSET_Y) + cy;
        let radius = rng.gen::<f64>().mul_add(NOTE_RADIUS_JITTER, NOTE_MIN_RADIUS);
        scene.fill(Shape::Circle { x, y, radius }, Paint::color(NOTE));
    }

    scene
}

/// Paint the sachet onto its canvas; absent canvas or context is reported
/// as an absent widget
pub fn render(doc: &Document, config: &SachetConfig) -> Result<()> {
    let target = CanvasTarget::locate(doc, &config.canvas_id)?;
    let (width, height) = target.size();
    sachet_scene(width, height, &mut rand::thread_rng()).paint(&target.ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scene_starts_with_full_clear() {
        let scene = sachet_scene(320.0, 240.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            scene.ops().first(),
            Some(&DrawOp::Clear {
                width: 320.0,
                height: 240.0
            })
        );
    }

    #[test]
    fn test_five_notes_within_bounds() {
        let (w, h) = (320.0, 240.0);
        for seed in 0..50 {
            let scene = sachet_scene(w, h, &mut StdRng::seed_from_u64(seed));
            let notes: Vec<_> = scene.circles().collect();
            assert_eq!(notes.len(), NOTE_COUNT);
            for (x, y, radius, paint) in notes {
                assert!((w / 2.0 - 40.0..w / 2.0 + 40.0).contains(&x), "x = {x}");
                assert!((h / 2.0 - 20.0..h / 2.0 + 60.0).contains(&y), "y = {y}");
                assert!((8.0..12.0).contains(&radius), "radius = {radius}");
                assert_eq!(paint, &Paint::color(NOTE));
            }
        }
    }

    #[test]
    fn test_fixed_source_gives_fixed_layout() {
        let scene = sachet_scene(200.0, 200.0, &mut StepRng::new(0, 0));
        for (x, y, radius, _) in scene.circles() {
            assert_eq!((x, y, radius), (60.0, 80.0, 8.0));
        }
        let again = sachet_scene(200.0, 200.0, &mut StepRng::new(0, 0));
        assert_eq!(scene, again);
    }

    #[test]
    fn test_body_is_drawn_inside_save_restore() {
        let scene = sachet_scene(300.0, 300.0, &mut StepRng::new(0, 0));
        let ops = scene.ops();
        let save = ops.iter().position(|op| *op == DrawOp::Save).unwrap();
        assert_eq!(ops[save + 1], DrawOp::Translate(150.0, 150.0));
        assert_eq!(ops[save + 2], DrawOp::Rotate(TILT));
        assert!(matches!(ops[save + 3], DrawOp::FillAndStroke { .. }));
        assert_eq!(ops[save + 4], DrawOp::Restore);
    }

    #[test]
    fn test_ribbon_tails_mirror_each_other() {
        let Shape::Path(right) = ribbon_tail(100.0, 100.0, 1.0) else {
            panic!("tail should be a path");
        };
        let Shape::Path(left) = ribbon_tail(100.0, 100.0, -1.0) else {
            panic!("tail should be a path");
        };
        assert_eq!(right[1], Segment::LineTo(125.0, -20.0));
        assert_eq!(left[1], Segment::LineTo(75.0, -20.0));
        assert_eq!(right[2], Segment::LineTo(110.0, 5.0));
        assert_eq!(left[2], Segment::LineTo(90.0, 5.0));
    }
}
