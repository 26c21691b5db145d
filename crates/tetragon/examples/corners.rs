//! Walkthrough of square construction, printing, translation, and swaps.
//!
//! Purpose
//! - Exercise the public surface end to end on the classic 3x3 square with
//!   corners D(4,4), A(1,4), B(1,1), C(4,1), plus the collapsed square.

use tetragon::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default().with_target(false).init();

    let a = Point::new("A", 1.0, 4.0);
    let b = Point::new("B", 1.0, 1.0);
    let c = Point::new("C", 4.0, 1.0);
    let d = Point::new("D", 4.0, 4.0);

    // Slot order is top-right, top-left, bottom-left, bottom-right.
    let sq = Square::new(&[&d, &a, &b, &c]).expect("corner order forms a square");
    print!("{}", sq);
    println!("center: {}", sq.center());

    let moved = sq
        .translate_by(3.0, 1.4597)
        .expect("translation keeps the layout");
    print!("{}", moved);

    let reflected = sq
        .swap_points(0, 3)
        .and_then(|s| s.swap_points(1, 2))
        .expect("indices are in range");
    print!("{}", reflected);

    let p = Point::new("P", 0.3, 0.3);
    let collapsed = Square::new(&[&p, &p, &p, &p]).expect("aliased corners collapse");
    print!("{}", collapsed);

    match sq.rotate_by(90) {
        Ok(_) => unreachable!("rotation has no implementation"),
        Err(err) => println!("rotate: {}", err),
    }
}
