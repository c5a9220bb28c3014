use clap::{app_from_crate, AppSettings};

use crate::commands::{ClapCommand, Convert, ExportMesh, Info, Preview, Probe};

mod commands;
mod utils;

#[cfg(test)]
mod test;

fn main() {
    let args: Vec<_> = std::env::args().collect();

    if let Err(e) = execute(&args) {
        println!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(input: &[String]) -> anyhow::Result<()> {
    let commands: Vec<ClapCommand> = vec![
        ClapCommand::new("info", Box::new(Info {})),
        ClapCommand::new("probe", Box::new(Probe {})),
        ClapCommand::new("mesh", Box::new(ExportMesh {})),
        ClapCommand::new("preview", Box::new(Preview {})),
        ClapCommand::new("convert", Box::new(Convert {})),
        // Add commands here
    ];

    let mut app = app_from_crate!()
        .global_setting(AppSettings::PropagateVersion)
        .global_setting(AppSettings::UseLongFormatForHelpSubcommand)
        .setting(AppSettings::SubcommandRequiredElseHelp);

    app = commands.iter().fold(app, |a, c| a.subcommand(c.register()));

    let matches = app.get_matches_from(input);

    match matches.subcommand() {
        Some((name, sub_matches)) => match commands.iter().find(|c| c.identifier == name) {
            Some(command) => command.run(sub_matches),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use crate::execute;

    #[test]
    fn execute_dispatches_to_subcommand() {
        let args: Vec<String> = vec!["terrain-viewer", "info", "./resources/test/flat.asc"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(execute(&args).is_ok());
    }
}
