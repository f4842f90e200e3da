use clap::{Parser, Subcommand};
use movie_info::ArcStr;
use movie_info::app::{App, Command};
use movie_info::utils::install_panic_hook;

#[derive(Parser)]
#[command(name = "movie-info")]
#[command(about = "Browse and search movies from the OMDb API in your terminal")]
struct Cli {
    /// OMDb API key, overrides OMDB_API_KEY and the configuration file
    #[arg(long, global = true)]
    api_key: Option<String>,
    /// Runs a single command and exits instead of starting the TUI
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest movies
    Latest {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Search titles by name
    Search {
        /// The search term
        #[arg(required = true)]
        query: String,
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Show the full record of a title
    Detail {
        /// The IMDb id (e.g., "tt0111161")
        #[arg(required = true)]
        id: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Latest { page } => Command::Latest { page },
            Commands::Search { query, page } => Command::Search {
                query: ArcStr::from(query),
                page,
            },
            Commands::Detail { id } => Command::Detail {
                id: ArcStr::from(id),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    install_panic_hook()?;

    let cli = Cli::parse();
    let app = App::build(cli.api_key).await?;

    match cli.command {
        Some(command) => app.resolve(command.into()).await?,
        None => {
            let (app, mut handle) = app.spawn()?;
            tokio::select! {
                res = &mut handle => res?,
                _ = tokio::signal::ctrl_c() => {
                    app.shutdown().await?;
                    handle.await?;
                }
            }
        }
    }

    Ok(())
}
