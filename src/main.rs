use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod catalog;
mod commands;
mod config;
mod github;
mod site;
mod types;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Build the DGB Streamlit app catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch app metadata from every Streamlit repository in the organization
    #[command(short_flag = 'f')]
    Fetch,
    /// Generate the static catalog page from the fetched metadata
    #[command(short_flag = 'g')]
    Generate,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn display_banner() {
    println!(
        r#"
 ██████╗ █████╗ ████████╗ █████╗ ██╗      ██████╗  ██████╗
██╔════╝██╔══██╗╚══██╔══╝██╔══██╗██║     ██╔═══██╗██╔════╝
██║     ███████║   ██║   ███████║██║     ██║   ██║██║  ███╗
██║     ██╔══██║   ██║   ██╔══██║██║     ██║   ██║██║   ██║
╚██████╗██║  ██║   ██║   ██║  ██║███████╗╚██████╔╝╚██████╔╝
 ╚═════╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚══════╝ ╚═════╝  ╚═════╝
"#
    );

    let mut cmd = Cli::command();
    let _ = cmd.print_help();
    println!();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => display_banner(),
        Some(Commands::Fetch) => commands::fetch_metadata(),
        Some(Commands::Generate) => commands::generate_site(),
        Some(Commands::Completions { shell }) => commands::generate_completions(shell),
    }
}
