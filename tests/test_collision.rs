use galaga::collision::{overlapping_pairs, Bounds};
use galaga::entities::Position;

fn square(x: f32, y: f32, size: f32) -> Bounds {
    Bounds::new(Position::new(x, y), size, size)
}

#[test]
fn overlapping_boxes() {
    let a = square(100.0, 100.0, 70.0);
    let b = square(150.0, 130.0, 70.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn separated_boxes() {
    let a = square(100.0, 100.0, 70.0);
    let b = square(200.0, 100.0, 70.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = square(100.0, 100.0, 70.0);
    let b = square(170.0, 100.0, 70.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn small_box_inside_large_box() {
    let ship = square(550.0, 1200.0, 70.0);
    let shot = square(560.0, 1190.0, 4.0);
    assert!(ship.overlaps(&shot));
}

#[test]
fn pairs_are_listed_in_order() {
    let shots = [square(0.0, 0.0, 4.0), square(500.0, 500.0, 4.0)];
    let enemies = [
        square(500.0, 480.0, 70.0),
        square(1000.0, 1000.0, 70.0),
        square(20.0, 20.0, 70.0),
        square(510.0, 510.0, 70.0),
    ];
    assert_eq!(overlapping_pairs(&shots, &enemies), vec![(0, 2), (1, 0), (1, 3)]);
}

#[test]
fn no_pairs_for_empty_input() {
    assert!(overlapping_pairs(&[], &[square(0.0, 0.0, 1.0)]).is_empty());
}
