//! Jobtrack CLI - Track job applications and visualize their status flow

use clap::Parser;
use jobtrack::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> jobtrack::Result<()> {
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Some(Commands::Init { force }) => jobtrack::cli::commands::init::run(data_dir, force),
        Some(Commands::Add {
            company,
            role,
            notes,
            date,
        }) => jobtrack::cli::commands::add::run(data_dir, company, role, notes, date),
        Some(Commands::List {
            json,
            search,
            status,
            sort,
        }) => jobtrack::cli::commands::list::run(data_dir, json, search, status, sort),
        Some(Commands::Show { id, json }) => {
            jobtrack::cli::commands::show::run(data_dir, &id, json)
        }
        Some(Commands::Edit {
            id,
            company,
            role,
            notes,
        }) => jobtrack::cli::commands::edit::run(data_dir, &id, company, role, notes),
        Some(Commands::Update { id, status }) => {
            jobtrack::cli::commands::update::run(data_dir, &id, &status)
        }
        Some(Commands::Delete { id, yes }) => {
            jobtrack::cli::commands::delete::run(data_dir, &id, yes)
        }
        Some(Commands::Chart { output }) => {
            jobtrack::cli::commands::chart::run(data_dir, output.as_deref())
        }
        Some(Commands::Links) => jobtrack::cli::commands::links::run(data_dir),
        Some(Commands::Doctor { fix }) => jobtrack::cli::commands::doctor::run(data_dir, fix),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
