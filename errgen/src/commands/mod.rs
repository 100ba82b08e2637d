use clap::Parser;
use errgen_definition::{ErrorArgs, USAGE};
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on binding errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for errgen_definition::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "errgen")]
#[command(version)]
#[command(about = "Generate an internationalized Go error code and its message registry")]
#[command(override_usage = USAGE)]
pub(crate) struct Cli {
    /// Variable name, error code, Chinese message and English message.
    ///
    /// Values may start with `-`. A first value of `-h`, `--help`, `-V` or
    /// `--version` is read as that flag; none of them is a Go identifier.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<String>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let args = ErrorArgs::bind(self.args.iter().cloned()).unwrap_or_exit();
        let dir = std::env::current_dir().wrap_err("Failed to read the current directory")?;

        let report = ops::generate(args, &dir)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
