use std::path::PathBuf;

use clap::Parser;

/// cinterns - track job and internship applications from the terminal
#[derive(Parser, Debug)]
#[command(name = "cinterns")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'cinterns' without a command for an interactive session.\n\
Example: cinterns add c/Google ct/65218000 e/careers@google.com p/Software Engineer d/2022-01-01")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file holding the applications
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Command to run once, e.g. `list` or `delete 2`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The command words joined back into one input line
    pub fn command_line(&self) -> Option<String> {
        (!self.command.is_empty()).then(|| self.command.join(" "))
    }
}
