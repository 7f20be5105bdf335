//! Generate a sphere and write the renderer's array files into `data/`

use octasphere::{log, LogFile, Result, SphereConfig};
use std::path::Path;

fn main() -> Result<()> {
    // Log to the console and to data/octasphere.log
    std::fs::create_dir_all("data")?;
    log::install(LogFile::new(Some(Path::new("data/octasphere.log")), true)?);

    // Radius 0.7, one subdivision pass: 30 vertices, 32 triangles
    let summary = SphereConfig::new(0.7, 1)
        .with_vertex_output("data/vertices.arr")
        .with_index_output("data/elements.arr")
        .run()?;

    println!(
        "Generated mesh with {} vertices and {} triangles",
        summary.vertex_count, summary.triangle_count
    );
    for path in &summary.written {
        println!("Saved {}", path.display());
    }

    log::uninstall();
    println!("Done!");

    Ok(())
}
