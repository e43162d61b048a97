//! Nearest-neighbor lookup over points read from a file.
//!
//! The input holds a point count followed by that many `x y` pairs,
//! whitespace separated:
//!
//! ```text
//! 3
//! 0.2 0.3
//! 0.4 0.7
//! 0.9 0.1
//! ```
//!
//! Run with `cargo run --example nearest -- points.txt 0.0 0.0`. Without a
//! file argument a small built-in set is used. Set `RUST_LOG=kdtree2d=trace`
//! to see query logging.

use std::env;
use std::fs;

use kdtree2d::prelude::*;
use tracing_subscriber::EnvFilter;

fn parse_points(input: &str) -> Result<Vec<Point>, Box<dyn std::error::Error>> {
    let mut tokens = input.split_whitespace();
    let count: usize = tokens.next().ok_or("missing point count")?.parse()?;

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x: f64 = tokens.next().ok_or("missing x coordinate")?.parse()?;
        let y: f64 = tokens.next().ok_or("missing y coordinate")?.parse()?;
        points.push(Point::try_new(x, y)?);
    }
    Ok(points)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let points = match args.first() {
        Some(path) => parse_points(&fs::read_to_string(path)?)?,
        None => parse_points("3\n0.2 0.3\n0.4 0.7\n0.9 0.1\n")?,
    };

    let query = match (args.get(1), args.get(2)) {
        (Some(x), Some(y)) => Point::try_new(x.parse()?, y.parse()?)?,
        _ => Point::new(0.0, 0.0),
    };

    let tree: KdTree = points.iter().copied().collect();
    let set: PointSet = points.iter().copied().collect();
    println!("Loaded {} distinct points (tree height {})", tree.len(), tree.height());

    match (tree.nearest_with_distance(&query), set.nearest_with_distance(&query)) {
        (Some((point, distance)), Some((_, baseline))) => {
            println!("Nearest to {}: {} at distance {:.6}", query, point, distance);
            println!("Brute-force distance: {:.6}", baseline);
        }
        _ => println!("No points loaded"),
    }
    Ok(())
}
