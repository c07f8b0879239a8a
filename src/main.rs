use clap::Parser;
use passkeep::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passkeep::cli::commands::init::execute(&cli),
        Commands::Add {
            ref handle,
            ref secret,
        } => passkeep::cli::commands::add::execute(&cli, handle, secret.as_deref()),
        Commands::Get { ref handle } => passkeep::cli::commands::get::execute(&cli, handle),
        Commands::List => passkeep::cli::commands::list::execute(&cli),
        Commands::Delete { ref handle, force } => {
            passkeep::cli::commands::delete::execute(&cli, handle, force)
        }
        Commands::ChangeMaster => passkeep::cli::commands::change_master::execute(&cli),
        Commands::Completions { ref shell } => passkeep::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
