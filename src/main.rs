use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use tracklift::{cli, config, error, types::PkceToken};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Scrape the tracklist page into the trackfile
    Fetch(FetchOptions),

    /// List tracks from the trackfile
    Tracks(TracksOptions),

    #[clap(about = "Create a Spotify playlist from the trackfile")]
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct FetchOptions {
    /// Where to write the trackfile (defaults to the local data dir)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Trace the table scan token by token
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Trackfile to read (defaults to the local data dir)
    #[clap(long)]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Trackfile to read (defaults to the local data dir)
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// Playlist name (prompted for when omitted)
    #[clap(long)]
    pub name: Option<String>,

    /// Playlist description (prompted for when omitted)
    #[clap(long)]
    pub description: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Fetch(opt) => cli::fetch(opt.output, opt.verbose).await,
        Command::Tracks(opt) => cli::list_tracks(opt.file).await,
        Command::Playlist(opt) => cli::playlist(opt.file, opt.name, opt.description).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
