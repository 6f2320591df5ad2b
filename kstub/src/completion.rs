use std::io;

use anyhow::Result;
use clap::{Args, Command};
use clap_complete::{generate, Shell};

#[derive(Args)]
pub struct Arg {
    /// Type of shell
    #[clap(arg_enum)]
    shell: Shell,
}

impl Arg {
    pub fn handle(&self, app: &mut Command<'_>) -> Result<()> {
        // Subcommands don't inherit bin_name, so pass it explicitly
        const BIN_NAME: &str = "kstub";
        generate(self.shell, app, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
