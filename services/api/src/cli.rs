use crate::report::{
    run_admin_requests, run_directory_list, run_directory_show, ListArgs, ShowArgs,
};
use crate::server;
use artist_directory::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Artist Directory",
    about = "Serve the artist directory or inspect its roster from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse the artist directory
    Directory {
        #[command(subcommand)]
        command: DirectoryCommand,
    },
    /// Admin panel views
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// List artists matching the given filters
    List(ListArgs),
    /// Show one artist profile
    Show(ShowArgs),
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// List seeded verification requests
    Requests,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Directory {
            command: DirectoryCommand::List(args),
        } => run_directory_list(args),
        Command::Directory {
            command: DirectoryCommand::Show(args),
        } => run_directory_show(args),
        Command::Admin {
            command: AdminCommand::Requests,
        } => run_admin_requests(),
    }
}
