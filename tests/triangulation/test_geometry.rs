use pc_prographs::triangulation::geometry::*;

#[test]
fn test_orientation() {
    let (a, b) = (Point::new(0., 0.), Point::new(2., 0.));
    assert!(orientation(&a, &b, &Point::new(1., 1.)) > 0.);
    assert!(orientation(&a, &b, &Point::new(1., -1.)) < 0.);
    assert_eq!(orientation(&a, &b, &Point::new(5., 0.)), 0.);
}

#[test]
fn test_point_in_triangle_boundary() {
    let [a, b, c] = [Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.)];
    assert!(is_point_in_triangle(&Point::new(2., 0.), [&a, &b, &c]));
    assert!(is_point_in_triangle(&a, [&a, &b, &c]));
    assert!(!is_point_in_triangle(&Point::new(-1., 1.), [&a, &b, &c]));
}

#[test]
fn test_segment_distance() {
    let (a, b) = (Point::new(0., 0.), Point::new(2., 0.));
    assert_eq!(segment_distance(&Point::new(1., 0.), &a, &b), Some(0.5));
    assert_eq!(segment_distance(&Point::new(1., 1.), &a, &b), Some(1.));
    assert_eq!(segment_distance(&Point::new(1., 1.), &a, &a), None);
    assert_eq!(Point::new(3., 4.).squared_distance(&Point::default()), 25.);
}
