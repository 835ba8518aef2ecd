use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{ExtractError, Result},
    types::Value,
};

/// Writes a triangle soup with per-vertex normals as an ASCII PLY model.
///
/// The soup is serialised as-is: one vertex element per emitted vertex and
/// one face per consecutive vertex triple, with sequential indices. No
/// deduplication or shared-vertex indexing is attempted.
///
/// Fails fast with [`ExtractError::PartialTriangle`] when `vertices` is not
/// a whole number of triangles, and [`ExtractError::NormalCountMismatch`]
/// when the buffers disagree in length.
pub fn write_ply<W: Write>(writer: &mut W, vertices: &[Value], normals: &[Value]) -> Result<()> {
    if vertices.len() % 9 != 0 {
        return Err(ExtractError::PartialTriangle {
            len: vertices.len(),
        });
    }
    if normals.len() != vertices.len() {
        return Err(ExtractError::NormalCountMismatch {
            vertices: vertices.len(),
            normals: normals.len(),
        });
    }

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", vertices.len() / 3)?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "property float nx")?;
    writeln!(writer, "property float ny")?;
    writeln!(writer, "property float nz")?;
    writeln!(writer, "element face {}", vertices.len() / 9)?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for (v, n) in vertices.chunks_exact(3).zip(normals.chunks_exact(3)) {
        writeln!(writer, "{} {} {} {} {} {}", v[0], v[1], v[2], n[0], n[1], n[2])?;
    }
    for face in 0..vertices.len() / 9 {
        let i0 = face * 3;
        writeln!(writer, "3 {} {} {}", i0, i0 + 1, i0 + 2)?;
    }
    Ok(())
}

/// Writes the model to a file at `path`. See [`write_ply`].
pub fn export_ply<P: AsRef<Path>>(path: P, vertices: &[Value], normals: &[Value]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ply(&mut writer, vertices, normals)?;
    writer.flush()?;
    Ok(())
}
