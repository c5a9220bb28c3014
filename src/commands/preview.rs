use std::path::Path;
use std::time::Instant;

use anyhow::bail;
use clap::{arg, App};
use image::{DynamicImage, RgbImage};

use terrain_viewer::dem::{self, ElevationGrid};
use terrain_viewer::mesh::build_terrain;
use terrain_viewer::settings::Settings;

use crate::commands::{input_file, output_file, Command};
use crate::utils::{color_ramp, encode_png};

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgb};
    use std::path::Path;

    use crate::commands::{ClapCommand, Preview};
    use crate::test::with_temp_dir;

    fn run(args: Vec<&str>) -> anyhow::Result<()> {
        let cmd = ClapCommand::new("preview", Box::new(Preview {}));
        let matches = cmd.register().get_matches_from(args);
        cmd.run(&matches)
    }

    #[test]
    fn exec_writes_one_pixel_per_sample() {
        with_temp_dir(|dir| {
            let output = dir.join("valley.png");
            let res = run(vec![
                "preview",
                "-i",
                "./resources/test/valley.asc",
                "-o",
                output.to_str().unwrap(),
            ]);
            assert!(res.is_ok());

            let img = image::open(&output).unwrap();
            assert_eq!((5, 4), img.dimensions());

            let rgb = img.to_rgb8();
            // 42 is the highest, -3 the lowest sample
            assert_eq!(&Rgb([255, 255, 255]), rgb.get_pixel(0, 0));
            assert_eq!(&Rgb([0, 0, 0]), rgb.get_pixel(2, 1));
        });
    }

    #[test]
    fn exec_uses_colors_from_settings() {
        with_temp_dir(|dir| {
            let output = dir.join("flat.png");
            let res = run(vec![
                "preview",
                "-i",
                "./resources/test/flat.asc",
                "-o",
                output.to_str().unwrap(),
                "-s",
                "./resources/test/settings.json",
            ]);
            assert!(res.is_ok());

            let rgb = image::open(&output).unwrap().to_rgb8();
            assert!(rgb.pixels().all(|p| *p == Rgb([0, 64, 0])));
        });
    }

    #[test]
    fn exec_bails_if_settings_file_does_not_exist() {
        with_temp_dir(|dir| {
            let output = dir.join("flat.png");
            let res = run(vec![
                "preview",
                "-i",
                "./resources/test/flat.asc",
                "-o",
                output.to_str().unwrap(),
                "-s",
                "./resources/test/nope.json",
            ]);
            assert!(res.is_err());
            assert!(!Path::new(&output).exists());
        });
    }
}

pub struct Preview {}

impl Command for Preview {
    fn get_description(&self) -> &'static str {
        "Render a shaded top-down preview image of a grid file."
    }

    fn args(&self, app: App<'static>) -> App<'static> {
        app.arg(arg!(-i --input <FILE> "Path to grid file"))
            .arg(arg!(-o --output <FILE> "Path to output PNG"))
            .arg(arg!(-s --settings [FILE] "Path to settings JSON"))
    }

    fn exec(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let start = Instant::now();

        let input_path = input_file(args, "input")?;
        let output_path = output_file(args, "output")?;

        let settings = match args.value_of("settings") {
            Some(path) => {
                println!("▶️  Loading settings");
                let settings = Settings::from_file(Path::new(path))?;
                println!("✔️  Loaded settings");
                settings
            }
            None => Settings::default(),
        };

        let now = Instant::now();
        println!("▶️  Loading grid");
        let grid = dem::load(&input_path)?;
        println!("✔️  Loaded grid in {}ms", now.elapsed().as_millis());

        let now = Instant::now();
        println!("▶️  Rendering preview");
        let img = calculate_image(&grid, &settings);
        println!("✔️  Rendered preview in {}ms", now.elapsed().as_millis());

        let now = Instant::now();
        println!("▶️  Writing {}", output_path.display());
        if let Err(e) = encode_png(&output_path, &img) {
            bail!("Failed to write preview image: {}", e);
        }
        println!("✔️  Wrote preview in {}ms", now.elapsed().as_millis());

        println!("\n    🎉  Finished in {}ms", start.elapsed().as_millis());

        Ok(())
    }
}

/// Terrain vertices are row-major, so vertex `row * columns + column` is pixel `(column, row)`.
fn calculate_image(grid: &ElevationGrid, settings: &Settings) -> DynamicImage {
    let (w, h) = (grid.column_count(), grid.row_count());
    let terrain = build_terrain(grid);
    let mut buffer = RgbImage::new(w as u32, h as u32);

    for (i, uv) in terrain.texture_coordinates.iter().enumerate() {
        let pixel = color_ramp(settings.min_altitude_color, settings.max_altitude_color, uv.x);
        buffer.put_pixel((i % w) as u32, (i / w) as u32, pixel);
    }

    DynamicImage::ImageRgb8(buffer)
}
