use anyhow::Result;
use ratatui::crossterm::event::{self, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode};
use crate::catalog::CategoryKey;
use crate::constants::constants;

// --- Key Handling ---

pub fn handle_key_event(app: &mut App, key: event::KeyEvent) -> Result<()> {
  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
    app.should_quit = true;
    return Ok(());
  }

  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
    app.next_theme();
    return Ok(());
  }

  match app.mode() {
    InputMode::Gallery => handle_gallery_key(app, key),
    InputMode::Grid => handle_grid_key(app, key),
    InputMode::Detail => handle_detail_key(app, key),
  }
  Ok(())
}

fn handle_gallery_key(app: &mut App, key: event::KeyEvent) {
  app.clear_error();
  match key.code {
    // Arrow keys nudge the strip through the same remap the wheel uses.
    KeyCode::Left | KeyCode::Char('h') => {
      app.wheel(0.0, -constants().wheel_step_cols);
    }
    KeyCode::Right | KeyCode::Char('l') => {
      app.wheel(0.0, constants().wheel_step_cols);
    }
    KeyCode::Enter => {
      app.open_current_card();
    }
    KeyCode::Tab => {
      app.next_category();
    }
    KeyCode::BackTab => {
      app.prev_category();
    }
    KeyCode::Char(c @ '1'..='5') => {
      let idx = (c as usize) - ('1' as usize);
      app.set_category(CategoryKey::ALL[idx]);
    }
    KeyCode::Char('g') => {
      app.toggle_grid();
    }
    KeyCode::Char('q') | KeyCode::Esc => {
      app.should_quit = true;
    }
    _ => {}
  }
}

fn handle_grid_key(app: &mut App, key: event::KeyEvent) {
  let cols = grid_columns(app);
  match key.code {
    KeyCode::Left | KeyCode::Char('h') => app.grid_move(-1),
    KeyCode::Right | KeyCode::Char('l') => app.grid_move(1),
    KeyCode::Up | KeyCode::Char('k') => app.grid_move(-cols),
    KeyCode::Down | KeyCode::Char('j') => app.grid_move(cols),
    KeyCode::Enter => app.grid_select(),
    KeyCode::Esc | KeyCode::Char('g') => app.toggle_grid(),
    _ => {}
  }
}

/// How many tiles fit per grid row at the current terminal width.
fn grid_columns(app: &App) -> isize {
  (app.strip.viewport_w / constants().grid_tile_cols).max(1) as isize
}

fn handle_detail_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Left => {
      if let Some(prev) = app.neighbors().and_then(|n| n.prev) {
        app.navigate_to(prev.id);
      }
    }
    KeyCode::Right => {
      if let Some(next) = app.neighbors().and_then(|n| n.next) {
        app.navigate_to(next.id);
      }
    }
    KeyCode::Esc => {
      app.close_detail();
    }
    KeyCode::Up | KeyCode::Char('k') => {
      app.detail_wheel(-constants().detail_wheel_step);
    }
    KeyCode::Down | KeyCode::Char('j') => {
      app.detail_wheel(constants().detail_wheel_step);
    }
    KeyCode::PageUp => {
      app.detail_page(false);
    }
    KeyCode::PageDown => {
      app.detail_page(true);
    }
    KeyCode::Char('o') => {
      if let Some(p) = app.selected_project() {
        if p.video_url.is_empty() {
          app.set_error("No video reference for this project.".to_string());
        } else {
          let url = p.video_url.clone();
          open_in_browser(app, &url);
        }
      }
    }
    _ => {}
  }
}

/// Open a URL in the default browser with the platform opener, reaping the
/// child in a background thread to avoid zombie processes.
fn open_in_browser(app: &mut App, url: &str) {
  #[cfg(target_os = "macos")]
  let cmd = "open";
  #[cfg(not(target_os = "macos"))]
  let cmd = "xdg-open";
  match std::process::Command::new(cmd)
    .arg(url)
    .stdin(std::process::Stdio::null())
    .stdout(std::process::Stdio::null())
    .stderr(std::process::Stdio::null())
    .spawn()
  {
    Ok(mut child) => {
      std::thread::spawn(move || {
        let _ = child.wait();
      });
      app.status_message = Some("Opened video in browser.".to_string());
    }
    Err(e) => {
      app.set_error(format!("Failed to open browser: {}", e));
    }
  }
}

// --- Mouse Handling ---

pub fn handle_mouse_event(app: &mut App, ev: MouseEvent) {
  let c = constants();
  match ev.kind {
    // Wheel deltas go to both smoothing systems: the gallery reconciler
    // gates itself while a detail view is open, and the detail adapter is
    // only present while one is.
    MouseEventKind::ScrollUp => {
      app.wheel(0.0, -c.wheel_step_cols);
      app.detail_wheel(-c.detail_wheel_step);
    }
    MouseEventKind::ScrollDown => {
      app.wheel(0.0, c.wheel_step_cols);
      app.detail_wheel(c.detail_wheel_step);
    }
    // Horizontal-dominant wheel gestures are left to the reconciler's axis
    // test (which ignores them).
    MouseEventKind::ScrollLeft => {
      app.wheel(-c.wheel_step_cols, 0.0);
    }
    MouseEventKind::ScrollRight => {
      app.wheel(c.wheel_step_cols, 0.0);
    }
    // Press-drag is the touch-drag analog: the strip follows the pointer.
    MouseEventKind::Down(MouseButton::Left) => {
      app.drag_start(ev.column);
    }
    MouseEventKind::Drag(MouseButton::Left) => {
      app.drag_move(ev.column);
    }
    MouseEventKind::Up(MouseButton::Left) => {
      app.drag_end();
    }
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ratatui::crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
      code,
      modifiers: KeyModifiers::NONE,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    }
  }

  fn app() -> App {
    let mut app = App::new(CategoryKey::All);
    app.ensure_layout(120);
    app
  }

  #[test]
  fn detail_arrows_step_laterally() {
    let mut app = app();
    app.open_detail(1);
    handle_key_event(&mut app, press(KeyCode::Right)).unwrap();
    assert_eq!(app.nav.selected(), Some(2));
    assert!(app.nav.is_navigating());

    handle_key_event(&mut app, press(KeyCode::Left)).unwrap();
    assert_eq!(app.nav.selected(), Some(1));
  }

  #[test]
  fn detail_left_at_first_project_is_noop() {
    let mut app = app();
    app.open_detail(1);
    handle_key_event(&mut app, press(KeyCode::Left)).unwrap();
    assert_eq!(app.nav.selected(), Some(1));
    assert!(!app.nav.is_navigating());
  }

  #[test]
  fn detail_escape_closes() {
    let mut app = app();
    app.open_detail(3);
    handle_key_event(&mut app, press(KeyCode::Esc)).unwrap();
    assert!(!app.nav.detail_open());
    assert!(!app.should_quit);
  }

  #[test]
  fn gallery_enter_opens_estimated_card() {
    let mut app = app();
    handle_key_event(&mut app, press(KeyCode::Enter)).unwrap();
    assert_eq!(app.nav.selected(), Some(1));
    assert!(!app.nav.is_navigating());
  }

  #[test]
  fn gallery_number_keys_select_category() {
    let mut app = app();
    handle_key_event(&mut app, press(KeyCode::Char('5'))).unwrap();
    assert_eq!(app.active_category, CategoryKey::Character);
  }

  #[test]
  fn grid_toggle_and_escape() {
    let mut app = app();
    handle_key_event(&mut app, press(KeyCode::Char('g'))).unwrap();
    assert!(app.nav.grid_open());
    handle_key_event(&mut app, press(KeyCode::Esc)).unwrap();
    assert!(!app.nav.grid_open());
    assert!(!app.should_quit);
  }

  #[test]
  fn mouse_wheel_reaches_reconciler_in_gallery() {
    let mut app = app();
    handle_mouse_event(
      &mut app,
      MouseEvent { kind: MouseEventKind::ScrollDown, column: 0, row: 0, modifiers: KeyModifiers::NONE },
    );
    for _ in 0..30 {
      app.tick();
    }
    assert!(app.gallery_offset > 0.0);
  }

  #[test]
  fn mouse_wheel_ignored_by_gallery_while_detail_open() {
    let mut app = app();
    app.open_detail(1);
    handle_mouse_event(
      &mut app,
      MouseEvent { kind: MouseEventKind::ScrollDown, column: 0, row: 0, modifiers: KeyModifiers::NONE },
    );
    app.close_detail();
    for _ in 0..30 {
      app.tick();
    }
    assert_eq!(app.gallery_offset, 0.0);
  }
}
