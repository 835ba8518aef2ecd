//! Traces isocontours of three 2D scalar fields and prints the resulting
//! line segments, one `x0 y0 x1 y1` row per segment.
//!
//! Usage: `contours [stepsize] [min] [max] [isovalue]`

use isomarch::{PlaneField, PlanePoint, Region, Value, marching_squares};

fn f1(p: PlanePoint) -> Value {
    p.x * p.x + p.y * p.y
}

fn f2(p: PlanePoint) -> Value {
    (p.x * p.y).sin()
}

fn f3(p: PlanePoint) -> Value {
    p.x.sin() * p.y.cos()
}

fn main() -> isomarch::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut next = |default: Value| {
        args.next()
            .and_then(|a| a.parse().ok())
            .unwrap_or(default)
    };
    let stepsize = next(0.1);
    let min = next(-5.0);
    let max = next(5.0);
    let isovalue = next(1.0);

    let region = Region::square(min, max, stepsize)?;
    let fields: [(&str, &PlaneField); 3] = [
        ("x^2 + y^2", &f1),
        ("sin(xy)", &f2),
        ("sin(x) cos(y)", &f3),
    ];

    for (name, field) in fields {
        let segments = marching_squares(field, isovalue, &region);
        println!("# {name}: {} segments", segments.len() / 4);
        for seg in segments.chunks_exact(4) {
            println!("{} {} {} {}", seg[0], seg[1], seg[2], seg[3]);
        }
    }
    Ok(())
}
