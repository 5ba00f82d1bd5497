mod commands;
mod terminal;

use commands::{CommandLine, Commands, clear, local, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (command, log, verbose) = CommandLine::parse_args().into_command();
    logging::init(verbose);

    match command {
        Commands::Scan(args) => {
            print::header("starting sweep");
            scan::scan(args, &log).await
        }
        Commands::Local => {
            print::header("about this host");
            local::local(&log).await
        }
        Commands::Clear => {
            print::header("clearing log");
            clear::clear(&log)
        }
    }
}
