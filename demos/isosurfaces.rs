//! Extracts the five classic implicit surfaces and exports each as a PLY
//! model (`F1.ply` … `F5.ply`) for an external viewer.
//!
//! Usage: `isosurfaces [stepsize] [min] [max] [isovalue]`

use isomarch::{GridBounds, Point, ScalarField, Value, compute_normals, export_ply, marching_cubes};

fn f1(p: Point) -> Value {
    p.x * p.x + p.y * p.y + p.z * p.z
}

fn f2(p: Point) -> Value {
    (p.x * p.y * p.z).sin()
}

fn f3(p: Point) -> Value {
    p.x.sin() * p.y.cos() * p.z.sin()
}

fn f4(p: Point) -> Value {
    p.y - p.x.sin() * p.z.cos()
}

fn f5(p: Point) -> Value {
    p.x * p.x - p.y * p.y - p.z * p.z - p.z
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

    let bounds = GridBounds::new(min, max, stepsize)?;
    let fields: [(&str, &ScalarField); 5] = [
        ("F1.ply", &f1),
        ("F2.ply", &f2),
        ("F3.ply", &f3),
        ("F4.ply", &f4),
        ("F5.ply", &f5),
    ];

    for (path, field) in fields {
        let vertices = marching_cubes(field, isovalue, &bounds);
        let normals = compute_normals(&vertices)?;
        export_ply(path, &vertices, &normals)?;
        println!("{path}: {} triangles", vertices.len() / 9);
    }
    Ok(())
}
