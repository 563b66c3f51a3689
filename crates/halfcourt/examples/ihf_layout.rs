//! Print the IHF half-court layout as a flat list of primitives.
//!
//! Usage:
//!   cargo run -p halfcourt --example ihf_layout -- [samples_per_arc]

use halfcourt::prelude::*;

/// Surface that prints what it receives.
struct Printer;

impl Surface for Printer {
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke, weight: Weight) {
        let (first, last) = (points[0], points[points.len() - 1]);
        println!(
            "line {:?}/{:?} n={} ({:.1},{:.1}) -> ({:.1},{:.1})",
            stroke,
            weight,
            points.len(),
            first.x,
            first.y,
            last.x,
            last.y
        );
    }
    fn fill_disc(&mut self, center: Point, radius: f64) {
        println!("disc ({:.1},{:.1}) r={radius}", center.x, center.y);
    }
    fn text(&mut self, anchor: Point, text: &str) {
        println!("text ({:.1},{:.1}) {text:?}", anchor.x, anchor.y);
    }
}

fn main() {
    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200usize);
    match generate(&MeasurementSet::default()) {
        Ok(diagram) => diagram.draw(&mut Printer, samples),
        Err(err) => eprintln!("{err}"),
    }
}
