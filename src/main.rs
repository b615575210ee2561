use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunesphere::{
    cli::{self, RenderParams},
    config, error,
    scene::{self, SceneMode},
    utils::{self, TimeRange},
};

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
    /// Authorize with the Spotify API
    Auth,

    /// Clear the stored session
    Logout,

    /// Show your top artists and tracks
    Top(TopOptions),

    /// Render your listening statistics as artwork
    Render(RenderOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// Show top artists only
    #[clap(long)]
    pub artists: bool,

    /// Show top tracks only
    #[clap(long)]
    pub tracks: bool,

    /// Number of items to fetch
    #[clap(long, default_value_t = 10)]
    pub limit: u32,

    /// Statistics window: short, medium, or long
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_range)]
    pub time_range: TimeRange,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderOptions {
    /// Scene to render: planet, museum, flow, or collage
    #[clap(long, default_value = "planet", value_parser = scene::parse_scene_mode)]
    pub mode: SceneMode,

    /// Surface width in pixels
    #[clap(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Surface height in pixels
    #[clap(long, default_value_t = 800.0)]
    pub height: f64,

    /// Output file
    #[clap(long, default_value = "artwork.png")]
    pub out: String,

    /// Number of tracks to fetch for the gallery scenes
    #[clap(long, default_value_t = 20)]
    pub limit: u32,

    /// Statistics window: short, medium, or long
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_range)]
    pub time_range: TimeRange,

    /// Seed for jitter and scatter, for reproducible output
    #[clap(long, default_value_t = 7)]
    pub seed: u64,

    /// Render placeholder tiles instead of downloading cover art
    #[clap(long)]
    pub no_covers: bool,
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
        Command::Auth => cli::auth().await,
        Command::Logout => cli::logout().await,
        Command::Top(opt) => cli::top(opt.artists, opt.tracks, opt.limit, opt.time_range).await,
        Command::Render(opt) => {
            cli::render(RenderParams {
                mode: opt.mode,
                width: opt.width,
                height: opt.height,
                out: opt.out,
                limit: opt.limit,
                time_range: opt.time_range,
                seed: opt.seed,
                no_covers: opt.no_covers,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
