use clap::App;

use crate::commands::Command;


pub struct ClapCommand {
    pub identifier: String,
    pub exec: Box<dyn Command>,
}

impl ClapCommand {
    pub fn new(identifier: &str, exec: Box<dyn Command>) -> Self {
        ClapCommand {
            identifier: identifier.to_string(),
            exec,
        }
    }

    pub fn register(&self) -> App<'static> {
        let app = App::new(&self.identifier).about(self.exec.get_description());

        self.exec.args(app)
    }

    pub fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        self.exec.exec(args)
    }
}
