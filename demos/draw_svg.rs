//! 2D-tree SVG visualizer
//! Renders random points with their splitting lines: red for vertical
//! dividers, blue for horizontal ones.

use std::fs::File;
use std::io::Write;

use kdtree2d::prelude::*;
use rand::{Rng, SeedableRng};

/// Canvas that accumulates SVG elements, mapping the unit square to pixels
struct SvgCanvas {
    size: f64,
    margin: f64,
    body: String,
}

impl SvgCanvas {
    fn new(size: f64, margin: f64) -> Self {
        Self { size, margin, body: String::new() }
    }

    /// Unit-square coordinates to pixels, y axis pointing up
    fn map(&self, point: Point) -> (f64, f64) {
        let span = self.size - 2.0 * self.margin;
        (self.margin + point.x() * span, self.size - self.margin - point.y() * span)
    }

    fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n{1}</svg>\n",
            self.size, self.body
        )
    }
}

impl Canvas for SvgCanvas {
    fn point(&mut self, point: Point) {
        let (x, y) = self.map(point);
        self.body
            .push_str(&format!("<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"black\"/>\n"));
    }

    fn segment(&mut self, from: Point, to: Point, orientation: Orientation) {
        let (x1, y1) = self.map(from);
        let (x2, y2) = self.map(to);
        let color = match orientation {
            Orientation::SplitOnX => "red",
            Orientation::SplitOnY => "blue",
        };
        self.body.push_str(&format!(
            "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" stroke=\"{color}\" stroke-width=\"1\"/>\n"
        ));
    }
}

fn main() -> std::io::Result<()> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2012);
    let tree: KdTree = (0..64)
        .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();

    let mut canvas = SvgCanvas::new(640.0, 20.0);
    tree.draw(&mut canvas);

    let path = "kdtree.svg";
    File::create(path)?.write_all(canvas.finish().as_bytes())?;
    println!("Wrote {} points and {} splitting lines to {}", tree.len(), tree.partitions().len(), path);
    Ok(())
}
