use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;

use tui_mentions::app::App;
use tui_mentions::config::{
    MentionsConfig, MentionsConfigBuilder, TriggerLocation, load_config, load_config_from_path,
};
use tui_mentions::suggestion::{Suggestion, default_roster, load_roster};

/// Redraw interval while the suggestions panel is animating
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval while idle
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Compose a comment with @mention suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Character(s) that start a mention
    #[arg(long)]
    trigger: Option<String>,

    /// Match the trigger anywhere, not only at the start of a word
    #[arg(long)]
    anywhere: bool,

    /// Stack suggestions vertically instead of in a single row
    #[arg(long)]
    vertical: bool,

    /// Rows visible in the vertical panel
    #[arg(long, value_name = "ROWS")]
    max_rows: Option<u16>,

    /// JSON file with the suggestion roster
    #[arg(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Config file to use instead of ~/.config/tui-mentions/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if cli.check_config {
        println!("{:#?}", config);
        return Ok(());
    }

    let roster = resolve_roster(&cli)?;
    log::debug!("Loaded roster with {} entries", roster.len());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, App::new(config, roster));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

/// Log to the file named by `TUI_MENTIONS_LOG`; stderr would draw over the UI
#[cfg(debug_assertions)]
fn init_logging() {
    let Some(path) = std::env::var_os("TUI_MENTIONS_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("debug"),
            )
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
        }
        Err(e) => eprintln!("Cannot open log file {:?}: {}", path, e),
    }
}

fn resolve_config(cli: &Cli) -> Result<MentionsConfig> {
    let file_config = match &cli.config {
        Some(path) => load_config_from_path(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config().wrap_err("Failed to load config")?,
    };

    let mut builder = MentionsConfigBuilder::from_file(&file_config.mentions);
    if let Some(trigger) = &cli.trigger {
        builder = builder.trigger(trigger.clone());
    }
    if cli.anywhere {
        builder = builder.trigger_location(TriggerLocation::Anywhere);
    }
    if cli.vertical {
        builder = builder.horizontal(false);
    }
    if let Some(rows) = cli.max_rows {
        builder = builder.max_visible_rows(rows);
    }

    builder.build().wrap_err("Invalid mentions configuration")
}

fn resolve_roster(cli: &Cli) -> Result<Vec<Suggestion>> {
    match &cli.roster {
        Some(path) => load_roster(path)
            .wrap_err_with(|| format!("Failed to load roster from {}", path.display())),
        None => Ok(default_roster()),
    }
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| app.render(frame, now))?;

        let timeout = if app.needs_redraw(Instant::now()) {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        app.handle_events(timeout)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
