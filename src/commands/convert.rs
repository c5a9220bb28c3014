use std::time::Instant;

use clap::{arg, App};

use terrain_viewer::dem;

use crate::commands::{input_file, output_file, Command};

#[cfg(test)]
mod tests {
    use std::fs;

    use terrain_viewer::dem;

    use crate::commands::{ClapCommand, Convert};
    use crate::test::with_temp_dir;

    fn run(input: &str, output: &str) -> anyhow::Result<()> {
        let cmd = ClapCommand::new("convert", Box::new(Convert {}));
        let matches = cmd
            .register()
            .get_matches_from(vec!["convert", "-i", input, "-o", output]);
        cmd.run(&matches)
    }

    #[test]
    fn exec_compresses_by_extension_and_back() {
        with_temp_dir(|dir| {
            let gz = dir.join("valley.asc.gz");
            let plain = dir.join("valley.asc");

            assert!(run("./resources/test/valley.asc", gz.to_str().unwrap()).is_ok());
            assert_eq!(&[0x1f, 0x8b], &fs::read(&gz).unwrap()[..2]);

            assert!(run(gz.to_str().unwrap(), plain.to_str().unwrap()).is_ok());
            let original = dem::load(std::path::Path::new("./resources/test/valley.asc")).unwrap();
            let converted = dem::load(&plain).unwrap();
            assert_eq!(original.header(), converted.header());
            assert_eq!(original.altitudes(), converted.altitudes());
        });
    }

    #[test]
    fn exec_bails_on_malformed_input() {
        with_temp_dir(|dir| {
            let output = dir.join("out.asc");
            assert!(run("./resources/test/settings.json", output.to_str().unwrap()).is_err());
            assert!(!output.exists());
        });
    }
}

pub struct Convert {}

impl Command for Convert {
    fn get_description(&self) -> &'static str {
        "Re-encode a grid file; a .gz output extension selects gzip."
    }

    fn args(&self, app: App<'static>) -> App<'static> {
        app.arg(arg!(-i --input <FILE> "Path to grid file"))
            .arg(arg!(-o --output <FILE> "Path to output grid file"))
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
        println!("▶️  Writing {}", output_path.display());
        dem::save(&output_path, &grid)?;
        println!("✔️  Wrote grid in {}ms", now.elapsed().as_millis());

        println!("\n    🎉  Finished in {}ms", start.elapsed().as_millis());

        Ok(())
    }
}
