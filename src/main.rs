use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use kcov_branch::cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not usage errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
