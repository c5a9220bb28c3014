use std::time::Instant;

use clap::{arg, App, Arg};
use glam::DVec2;

use terrain_viewer::dem;

use crate::commands::{input_file, Command};


pub struct Probe {}

impl Command for Probe {
    fn get_description(&self) -> &'static str {
        "Print the interpolated altitude at a world point."
    }

    fn args(&self, app: App<'static>) -> App<'static> {
        app.arg(arg!(-i --input <FILE> "Path to grid file"))
            .arg(coordinate_arg("x"))
            .arg(coordinate_arg("y"))
    }

    fn exec(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let input_path = input_file(args, "input")?;
        let point = DVec2::new(args.value_of_t("x")?, args.value_of_t("y")?);

        let now = Instant::now();
        println!("▶️  Loading grid");
        let grid = dem::load(&input_path)?;
        println!("✔️  Loaded grid in {}ms", now.elapsed().as_millis());

        let probed = grid.probe(point)?;
        println!("ℹ️  Altitude at ({}, {}): {}", probed.x, probed.y, probed.z);

        Ok(())
    }
}

fn coordinate_arg(name: &'static str) -> Arg<'static> {
    Arg::new(name)
        .long(name)
        .value_name(if name == "x" { "X" } else { "Y" })
        .help("World coordinate")
        .takes_value(true)
        .required(true)
        .allow_hyphen_values(true)
}
