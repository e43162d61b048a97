//! Find all points inside a rectangle.
use kdtree2d::prelude::*;

fn main() {
    let tree: KdTree = [(0.2, 0.3), (0.4, 0.7), (0.9, 0.1)].into_iter().map(Point::from).collect();

    let left_half = Rect::new(0.0, 0.0, 0.5, 1.0);
    let mut results = Vec::new();
    tree.query_range(&left_half, &mut results);

    println!("Points in {}:", left_half);
    for point in &results {
        println!("  {}", point);
    }
}
