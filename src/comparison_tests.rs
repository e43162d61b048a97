//! Comparison tests between `KdTree` (pruned 2D-tree) and `PointSet` (linear scan)

#[cfg(test)]
mod tests {
    use crate::{KdTree, Point, PointSet, Rect};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Helper to add same points to both structures
    fn setup_both(points: &[Point]) -> (KdTree, PointSet) {
        let mut tree = KdTree::new();
        let mut set = PointSet::new();

        for &point in points {
            let inserted_tree = tree.insert(point);
            let inserted_set = set.insert(point);
            assert_eq!(inserted_tree, inserted_set, "insert({point}) disagrees");
        }

        (tree, set)
    }

    fn random_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
        (0..count)
            .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect()
    }

    fn random_rect(rng: &mut StdRng, max_size: f64) -> Rect {
        let xmin = rng.random_range(0.0..1.0);
        let ymin = rng.random_range(0.0..1.0);
        Rect::new(
            xmin,
            ymin,
            xmin + rng.random_range(0.0..max_size),
            ymin + rng.random_range(0.0..max_size),
        )
    }

    fn assert_same_range(tree: &KdTree, set: &PointSet, rect: &Rect) {
        let mut from_tree = tree.range(rect);
        let from_set = set.range(rect);
        from_tree.sort();
        assert_eq!(from_tree, from_set, "range {rect} differs");
    }

    fn assert_same_nearest_distance(tree: &KdTree, set: &PointSet, query: &Point) {
        let from_tree = tree.nearest(query).unwrap();
        let from_set = set.nearest(query).unwrap();
        assert_eq!(
            query.distance_squared_to(&from_tree),
            query.distance_squared_to(&from_set),
            "nearest to {query}: tree={from_tree}, set={from_set}"
        );
    }

    #[test]
    fn test_membership_consistency() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_points(&mut rng, 1000);
        let (tree, set) = setup_both(&points);

        assert_eq!(tree.len(), set.len());
        for point in &points {
            assert!(tree.contains(point));
        }
        for point in random_points(&mut rng, 1000) {
            assert_eq!(tree.contains(&point), set.contains(&point));
        }
    }

    #[test]
    fn test_duplicates_consistency() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut points = random_points(&mut rng, 300);
        // Every point twice, second copy interleaved later
        let copies = points.clone();
        points.extend(copies);

        let (tree, set) = setup_both(&points);
        assert_eq!(tree.len(), 300);
        assert_eq!(set.len(), 300);

        let mut stored: Vec<Point> = tree.iter().collect();
        stored.sort();
        assert_eq!(stored, set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_range_consistency() {
        let mut rng = StdRng::seed_from_u64(1234);
        let points = random_points(&mut rng, 2000);
        let (tree, set) = setup_both(&points);

        for _ in 0..200 {
            let rect = random_rect(&mut rng, 0.3);
            assert_same_range(&tree, &set, &rect);
        }
        assert_same_range(&tree, &set, &Rect::UNIT);
    }

    #[test]
    fn test_range_on_stored_coordinates() {
        // Query edges lying exactly on stored coordinates exercise the tie rules
        let mut rng = StdRng::seed_from_u64(99);
        let points = random_points(&mut rng, 500);
        let (tree, set) = setup_both(&points);

        for pair in points.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            let rect = Rect::new(a.x().min(b.x()), a.y().min(b.y()), a.x().max(b.x()), a.y().max(b.y()));
            assert_same_range(&tree, &set, &rect);
        }
    }

    #[test]
    fn test_nearest_consistency() {
        let mut rng = StdRng::seed_from_u64(2024);
        let points = random_points(&mut rng, 2000);
        let (tree, set) = setup_both(&points);

        for query in random_points(&mut rng, 500) {
            assert_same_nearest_distance(&tree, &set, &query);
        }
        // Queries outside the unit square
        for _ in 0..100 {
            let query = Point::new(rng.random_range(-2.0..3.0), rng.random_range(-2.0..3.0));
            assert_same_nearest_distance(&tree, &set, &query);
        }
    }

    #[test]
    fn test_collinear_points_consistency() {
        // All points on one vertical line: every root comparison is an x tie
        let points: Vec<Point> = (0..200).map(|i| Point::new(0.5, (i * 37 % 200) as f64 / 200.0)).collect();
        let (tree, set) = setup_both(&points);
        assert_eq!(tree.len(), 200);

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let rect = random_rect(&mut rng, 0.5);
            assert_same_range(&tree, &set, &rect);
            let query = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
            assert_same_nearest_distance(&tree, &set, &query);
        }
    }

    #[test]
    fn test_points_beyond_unit_square_consistency() {
        let mut rng = StdRng::seed_from_u64(77);
        let points: Vec<Point> = (0..1000)
            .map(|_| Point::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)))
            .collect();
        let (tree, set) = setup_both(&points);

        for _ in 0..300 {
            let query = Point::new(rng.random_range(-6.0..6.0), rng.random_range(-6.0..6.0));
            assert_same_nearest_distance(&tree, &set, &query);
        }
        for _ in 0..100 {
            let xmin = rng.random_range(-5.0..5.0);
            let ymin = rng.random_range(-5.0..5.0);
            let rect = Rect::new(xmin, ymin, xmin + rng.random_range(0.0..2.0), ymin + rng.random_range(0.0..2.0));
            assert_same_range(&tree, &set, &rect);
        }
    }

    #[test]
    fn test_empty_consistency() {
        let (tree, set) = setup_both(&[]);
        assert_eq!(tree.nearest(&Point::new(0.5, 0.5)), set.nearest(&Point::new(0.5, 0.5)));
        assert_eq!(tree.range(&Rect::UNIT), set.range(&Rect::UNIT));
        assert_eq!(tree.is_empty(), set.is_empty());
    }
}
