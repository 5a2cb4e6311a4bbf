use clap::Parser;
use roster::error::{Result, RosterError};

mod args;
mod cli;
use args::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    roster::logging::init(args.verbose);

    if let Err(e) = run(args) {
        match &e {
            RosterError::Invalid(errors) => cli::render::print_field_errors(errors),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let data_dir = cli::resolve_data_dir(&args)?;
    match args.command {
        Some(Commands::Config { key, value }) => cli::handle_config(&data_dir, key, value),
        command => {
            let mut ctx = cli::init_context(data_dir)?;
            cli::dispatch(&mut ctx, command)
        }
    }
}
