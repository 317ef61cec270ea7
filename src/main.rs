use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use flow_overlay::events::{self, KeyAction};
use flow_overlay::settings::LogTarget;
use flow_overlay::{ui, App, FileSource, Settings};

#[derive(Parser, Debug)]
#[command(name = "flow-overlay")]
#[command(about = "Alarm, alert and source-type decorations for MediaConnect flow nodes")]
struct Args {
    /// Path to the dashboard snapshot JSON file
    #[arg(short, long, default_value = "dashboard.json")]
    file: PathBuf,

    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only decorate the node with this resource identifier
    #[arg(short, long)]
    node: Option<String>,

    /// Font size passed to the text primitives
    #[arg(long)]
    font_size: Option<u16>,

    /// Node canvas width in columns
    #[arg(long)]
    width: Option<u16>,

    /// Node canvas height in rows
    #[arg(long)]
    height: Option<u16>,

    /// Keep a live board on screen, reloading when the file changes
    #[arg(short, long, conflicts_with = "export")]
    watch: bool,

    /// Refresh interval in seconds (only used with --watch)
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Export a JSON summary of every decorated node and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Append logs to this file (the only way to get logs with --watch)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(font_size) = args.font_size {
        settings.font_size = font_size;
    }
    if let Some(width) = args.width {
        settings.node_width = width;
    }
    if let Some(height) = args.height {
        settings.node_height = height;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    init_tracing(&settings, args.watch)?;

    let app = App::new(FileSource::new(&args.file), settings).with_node_filter(args.node);

    if let Some(export_path) = args.export {
        return export_to_file(app, &export_path);
    }

    if args.watch {
        let refresh = Duration::from_secs(app.settings.refresh_secs.max(1));
        return run_tui(app, refresh);
    }

    print_once(app)
}

/// Install the log subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(settings: &Settings, watch: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    match settings.log_target(watch) {
        LogTarget::Off => {}
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
    }
    Ok(())
}

/// Load the snapshot, or fail with the source's error.
fn load(app: &mut App) -> Result<()> {
    if !app.reload_data() {
        let err = app.load_error.clone().unwrap_or_else(|| "no data".to_string());
        bail!("Failed to load {}: {}", app.source_description(), err);
    }
    Ok(())
}

/// Decorate every node once and print the canvases.
fn print_once(mut app: App) -> Result<()> {
    load(&mut app)?;

    let nodes = app.decorated_nodes()?;
    if nodes.is_empty() {
        println!("No decorated nodes in {}", app.source_description());
        return Ok(());
    }

    for decorated in &nodes {
        println!("{} [{}]", decorated.node.display_name(), decorated.node.id);
        for line in decorated.canvas.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}

/// Write per-node summaries as JSON.
fn export_to_file(mut app: App, export_path: &Path) -> Result<()> {
    load(&mut app)?;

    let json = serde_json::to_string_pretty(&app.summaries())?;
    std::fs::write(export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    println!("Exported node decorations to: {}", export_path.display());
    Ok(())
}

/// Run the live board until the user quits.
fn run_tui(mut app: App, refresh_interval: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal if we panic mid-draw
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    app.reload_data();
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();
    let mut nodes = app.decorated_nodes()?;

    while app.running {
        terminal.draw(|frame| ui::board::render(frame, app, &nodes))?;

        let mut changed = false;
        if let Some(Event::Key(key)) = events::poll_event(Duration::from_millis(100))? {
            changed = events::handle_key_event(app, key) == KeyAction::Reload;
        }

        if last_refresh.elapsed() >= refresh_interval {
            changed |= app.reload_data();
            last_refresh = Instant::now();
        }

        if changed {
            nodes = app.decorated_nodes()?;
        }
    }

    Ok(())
}
