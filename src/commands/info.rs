use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::bail;
use clap::{App, Arg};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use terrain_viewer::dem::{self, ElevationGrid, LoadError};

use crate::commands::Command;


pub struct Info {}

impl Command for Info {
    fn get_description(&self) -> &'static str {
        "Print dimensions, extent and altitude range of grid files."
    }

    fn args(&self, app: App<'static>) -> App<'static> {
        app.arg(
            Arg::new("files")
                .value_name("FILES")
                .help("Grid files, plain or gzipped")
                .required(true)
                .multiple_values(true),
        )
    }

    fn exec(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let start = Instant::now();

        let paths: Vec<PathBuf> = match args.values_of("files") {
            Some(values) => values.map(PathBuf::from).collect(),
            None => bail!("No input files given"),
        };

        println!("▶️  Loading {} grid(s)", paths.len());
        let results: Vec<(PathBuf, Result<ElevationGrid, LoadError>)> = paths
            .par_iter()
            .map(|path| (path.clone(), dem::load(path)))
            .collect();

        let mut failed = 0;
        for (path, result) in results {
            match result {
                Ok(grid) => print_grid(&path, &grid),
                Err(e) => {
                    failed += 1;
                    println!("❌  {}: {}", path.display(), e);
                }
            }
        }

        if failed > 0 {
            bail!("Failed to load {} grid(s)", failed);
        }

        println!("\n    🎉  Finished in {}ms", start.elapsed().as_millis());

        Ok(())
    }
}

fn print_grid(path: &Path, grid: &ElevationGrid) {
    let x_max = grid.column_to_x(grid.column_count() - 1);
    let y_max = grid.row_to_y(0);

    println!("ℹ️  {}", path.display());
    println!(
        "    {} columns x {} rows, cell size {}",
        grid.column_count(),
        grid.row_count(),
        grid.cell_size()
    );
    println!(
        "    extent ({}, {}) to ({}, {})",
        grid.x_ll_corner(),
        grid.y_ll_corner(),
        x_max,
        y_max
    );
    println!(
        "    altitude {} to {}",
        grid.min_altitude(),
        grid.max_altitude()
    );
}
