use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use clap::{arg, App};

use terrain_viewer::dem;
use terrain_viewer::mesh::build_terrain;

use crate::commands::{input_file, output_file, Command};


pub struct ExportMesh {}

impl Command for ExportMesh {
    fn get_description(&self) -> &'static str {
        "Write the terrain mesh of a grid file as JSON."
    }

    fn args(&self, app: App<'static>) -> App<'static> {
        app.arg(arg!(-i --input <FILE> "Path to grid file"))
            .arg(arg!(-o --output <FILE> "Path to output JSON file"))
    }

    fn exec(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let start = Instant::now();

        let input_path = input_file(args, "input")?;
        let output_path = output_file(args, "output")?;

        let now = Instant::now();
        println!("▶️  Loading grid");
        let grid = dem::load(&input_path)?;
        println!("✔️  Loaded grid in {}ms", now.elapsed().as_millis());

        let now = Instant::now();
        println!("▶️  Building terrain mesh");
        let mesh = build_terrain(&grid);
        println!(
            "✔️  Built {} triangles in {}ms",
            mesh.triangle_count(),
            now.elapsed().as_millis()
        );

        let now = Instant::now();
        println!("▶️  Writing {}", output_path.display());
        let mut writer = BufWriter::new(File::create(&output_path)?);
        serde_json::to_writer_pretty(&mut writer, &mesh)?;
        writer.flush()?;
        println!("✔️  Wrote mesh in {}ms", now.elapsed().as_millis());

        println!("\n    🎉  Finished in {}ms", start.elapsed().as_millis());

        Ok(())
    }
}
