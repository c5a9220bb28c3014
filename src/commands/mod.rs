mod clap_command;
mod convert;
mod info;
mod mesh;
mod preview;
mod probe;

pub use clap_command::ClapCommand;
pub use convert::Convert;
pub use info::Info;
pub use mesh::ExportMesh;
pub use preview::Preview;
pub use probe::Probe;

use std::path::{Path, PathBuf};

use anyhow::bail;

pub trait Command {
    fn get_description(&self) -> &'static str;

    /// Adds the command specific arguments.
    fn args(&self, app: clap::App<'static>) -> clap::App<'static>;

    fn exec(&self, args: &clap::ArgMatches) -> anyhow::Result<()>;
}

/// Path argument that has to point at an existing file.
fn input_file(args: &clap::ArgMatches, name: &str) -> anyhow::Result<PathBuf> {
    let path = path_param(args, name)?;
    if !path.is_file() {
        bail!("Couldn't find input file {}", path.display());
    }
    Ok(path)
}

/// Path argument whose parent directory has to exist.
fn output_file(args: &clap::ArgMatches, name: &str) -> anyhow::Result<PathBuf> {
    let path = path_param(args, name)?;
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => bail!("Output path is not a file path"),
    };
    if !parent.is_dir() {
        bail!("Output directory {} does not exist", parent.display());
    }
    Ok(path)
}

fn path_param(args: &clap::ArgMatches, name: &str) -> anyhow::Result<PathBuf> {
    match args.value_of(name) {
        Some(s) => Ok(Path::new(s).to_path_buf()),
        None => bail!("Missing argument {}", name),
    }
}

#[cfg(test)]
pub struct DummyCommand {}

#[cfg(test)]
impl Command for DummyCommand {
    fn get_description(&self) -> &'static str {
        "dummy"
    }

    fn args(&self, app: clap::App<'static>) -> clap::App<'static> {
        app.arg(clap::arg!(-i --input <FILE> "Path to grid file"))
    }

    fn exec(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        input_file(args, "input").map(|_| ())
    }
}
