//! Drawing-surface seam.
//!
//! The caller owns the surface (window, plot, raster, test recorder) and passes it in;
//! the diagram only walks its items and forwards polylines, discs and text. Scale,
//! aspect ratio and the mapping of `Stroke`/`Weight` to pen styles belong to the surface.

use crate::court::{Diagram, Shape};
use crate::geom::{Point, Stroke, Weight};

/// Sink for diagram primitives, in court units.
pub trait Surface {
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke, weight: Weight);
    fn fill_disc(&mut self, center: Point, radius: f64);
    fn text(&mut self, anchor: Point, text: &str);
}

impl Diagram {
    /// Forward every item to `surface` in emission order, sampling arcs with
    /// `samples_per_arc` points (before baseline clipping).
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, samples_per_arc: usize) {
        for it in self.items() {
            match &it.shape {
                Shape::Segment(s) => surface.stroke_polyline(&[s.a, s.b], s.stroke, s.weight),
                Shape::Arc(a) => {
                    let pts = a.polyline(samples_per_arc);
                    // A fully clipped arc leaves nothing worth stroking.
                    if pts.len() >= 2 {
                        surface.stroke_polyline(&pts, a.stroke, Weight::Regular);
                    }
                }
                Shape::Disc(d) => surface.fill_disc(d.center, d.radius),
                Shape::Label(l) => surface.text(l.anchor, &l.text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::{generate, MeasurementSet};

    #[derive(Default)]
    struct Recorder {
        polylines: Vec<(usize, Stroke, Weight)>,
        discs: Vec<(Point, f64)>,
        texts: Vec<String>,
    }

    impl Surface for Recorder {
        fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke, weight: Weight) {
            self.polylines.push((points.len(), stroke, weight));
        }
        fn fill_disc(&mut self, center: Point, radius: f64) {
            self.discs.push((center, radius));
        }
        fn text(&mut self, _anchor: Point, text: &str) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn draw_forwards_every_item() {
        let d = generate(&MeasurementSet::default()).unwrap();
        let mut rec = Recorder::default();
        d.draw(&mut rec, 200);
        // 4 boundary + goal + 6 m (3) + 9 m (3) + 7 m + 4 m + half line + centre circle
        assert_eq!(rec.polylines.len(), 15);
        assert_eq!(rec.discs.len(), 2);
        assert_eq!(
            rec.texts,
            vec!["7m", "Handball half-court (IHF standard, corrected geometry)"]
        );
        let dashed = rec
            .polylines
            .iter()
            .filter(|(_, s, _)| *s == Stroke::Dashed)
            .count();
        assert_eq!(dashed, 3);
        let heavy = rec
            .polylines
            .iter()
            .filter(|(_, _, w)| *w == Weight::Heavy)
            .count();
        assert_eq!(heavy, 1);
        assert!(rec.polylines.iter().any(|(n, _, _)| *n == 200));
    }

    #[test]
    fn draw_through_trait_object() {
        let d = generate(&MeasurementSet::default()).unwrap();
        let mut rec = Recorder::default();
        let surface: &mut dyn Surface = &mut rec;
        d.draw(surface, 3);
        assert_eq!(rec.discs[0], (Point::new(8500.0, 0.0), 100.0));
    }
}
