mod app;
mod catalog;
mod config;
mod constants;
mod input;
mod nav;
mod scroll;
mod theme;
mod ui;
mod video;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use ratatui::{
  DefaultTerminal,
  crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
  },
};
use std::time::Duration;
use tracing::info;

use app::App;
use catalog::{CategoryKey, CliCategory, resolve_category};
use constants::constants;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Category filter to start in (default: all)
  #[arg(short, long, value_enum)]
  category: Option<CliCategory>,

  /// Animation tick interval in milliseconds
  #[arg(long)]
  tick_ms: Option<u64>,

  /// Disable mouse capture (keyboard-only navigation)
  #[arg(long)]
  no_mouse: bool,
}

// --- Logging ---

/// Route tracing output to a log file; the TUI owns the terminal, so
/// stderr is not available. Returns the guard that flushes on drop.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
  let proj_dirs = ProjectDirs::from("", "", "showreel")?;
  let log_dir = proj_dirs.data_local_dir().join("logs");
  std::fs::create_dir_all(&log_dir).ok()?;

  let appender = tracing_appender::rolling::daily(&log_dir, "showreel.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("showreel=info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
  Some(guard)
}

// --- Main ---

fn main() -> Result<()> {
  let args = Args::parse();
  let _log_guard = init_logging();

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  if !args.no_mouse {
    execute!(std::io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
  }

  info!(version = env!("CARGO_PKG_VERSION"), "showreel starting");
  let result = run(&mut terminal, &args);

  if !args.no_mouse {
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
  }
  ratatui::restore();
  result
}

fn run(terminal: &mut DefaultTerminal, args: &Args) -> Result<()> {
  let start_category = args.category.map(resolve_category).unwrap_or(CategoryKey::All);
  let tick = Duration::from_millis(args.tick_ms.unwrap_or(constants().tick_ms));
  let mut app = App::new(start_category);

  loop {
    terminal.draw(|frame| ui::ui(frame, &mut app))?;

    if event::poll(tick)? {
      match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(&mut app, key)?;
        }
        Event::Mouse(ev) => {
          input::handle_mouse_event(&mut app, ev);
        }
        // Strip geometry is re-derived from the rendered width on the next
        // draw; nothing to do here.
        Event::Resize(_, _) => {}
        _ => {}
      }
    }

    app.tick();

    if app.should_quit {
      break;
    }
  }

  info!("showreel exiting");
  Ok(())
}
