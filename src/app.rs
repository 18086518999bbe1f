use std::time::{Duration, Instant};
use tracing::info;

use crate::catalog::{CategoryKey, Project, catalog};
use crate::config::Config;
use crate::constants::constants;
use crate::nav::{self, NavContext, NavState};
use crate::scroll::{Reconciler, VerticalScroll};
use crate::theme::THEMES;

/// Which surface currently receives key input. Derived from navigation
/// state — a detail view always wins over the grid overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  Gallery,
  Grid,
  Detail,
}

/// Horizontal position and width of one gallery card within the strip.
#[derive(Debug, Clone, Copy)]
pub struct CardSpan {
  pub x: f32,
  pub w: u16,
}

/// Cached geometry of the gallery strip. Rebuilt only when the terminal
/// width or the filtered card list changes — never per tick.
#[derive(Debug, Default)]
pub struct StripLayout {
  pub viewport_w: u16,
  pub hero_x: f32,
  pub hero_w: f32,
  pub cards: Vec<CardSpan>,
  pub cta_x: f32,
  pub content_w: f32,
}

pub struct App {
  pub active_category: CategoryKey,
  /// The active filtered view, in catalog insertion order.
  filtered: Vec<&'static Project>,
  pub gallery: Reconciler,
  pub strip: StripLayout,
  /// The strip viewport's own scroll offset: ground truth during drags,
  /// written by the reconciler tick otherwise.
  pub gallery_offset: f32,
  pub nav: NavState,
  /// Vertical smoothing for the open detail view. Present exactly while a
  /// detail view is open; rebuilt on lateral navigation.
  pub detail_scroll: Option<VerticalScroll>,
  pub grid_cursor: usize,
  pub theme_index: usize,
  pub status_message: Option<String>,
  pub last_error: Option<String>,
  pub should_quit: bool,
  /// When the last error was set — used for auto-dismiss after 5 seconds.
  error_time: Option<Instant>,
  drag_last_col: Option<u16>,
  detail_viewport_h: f32,
}

impl App {
  pub fn new(start_category: CategoryKey) -> Self {
    let config = Config::load();
    let theme_index =
      if let Some(ref name) = config.theme_name { THEMES.iter().position(|t| t.name == name).unwrap_or(0) } else { 0 };

    let mut app = Self {
      active_category: start_category,
      filtered: Vec::new(),
      gallery: Reconciler::new(),
      strip: StripLayout::default(),
      gallery_offset: 0.0,
      nav: NavState::new(),
      detail_scroll: None,
      grid_cursor: 0,
      theme_index,
      status_message: None,
      last_error: None,
      should_quit: false,
      error_time: None,
      drag_last_col: None,
      detail_viewport_h: 0.0,
    };
    app.filtered = catalog().filter(start_category);
    app
  }

  pub fn theme(&self) -> &'static crate::theme::Theme {
    // Safety: theme_index is always bounded by modular arithmetic in next_theme()
    // and clamped to THEMES.len() - 1 on initialization.
    &THEMES[self.theme_index]
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.save_config();
  }

  fn save_config(&self) {
    let config = Config { theme_name: Some(self.theme().name.to_string()) };
    config.save();
  }

  pub fn mode(&self) -> InputMode {
    if self.nav.detail_open() {
      InputMode::Detail
    } else if self.nav.grid_open() {
      InputMode::Grid
    } else {
      InputMode::Gallery
    }
  }

  pub fn filtered(&self) -> &[&'static Project] {
    &self.filtered
  }

  // --- Messages ---

  pub fn set_error(&mut self, msg: String) {
    self.last_error = Some(msg);
    self.error_time = Some(Instant::now());
  }

  pub fn clear_error(&mut self) {
    self.last_error = None;
    self.error_time = None;
  }

  /// Clear stale error messages after 5 seconds.
  fn expire_error(&mut self) {
    if let Some(t) = self.error_time
      && t.elapsed() >= Duration::from_secs(5)
    {
      self.last_error = None;
      self.error_time = None;
    }
  }

  // --- Layout ---

  /// Recompute strip geometry when the rendered width changes (the resize
  /// path; the per-frame call is a cheap width comparison).
  pub fn ensure_layout(&mut self, viewport_w: u16) {
    if self.strip.viewport_w != viewport_w {
      self.strip.viewport_w = viewport_w;
      self.rebuild_strip();
    }
  }

  fn rebuild_strip(&mut self) {
    let c = constants();
    let mut x = c.edge_pad_cols as f32;
    let hero_x = x;
    let hero_w = c.hero_cols as f32;
    x += hero_w + c.card_gap_cols as f32;

    let mut cards = Vec::with_capacity(self.filtered.len());
    for p in &self.filtered {
      let w = p.aspect_ratio.card_cols(c.card_base_cols);
      cards.push(CardSpan { x, w });
      x += w as f32 + c.card_gap_cols as f32;
    }

    let cta_x = x;
    x += c.cta_cols as f32 + c.edge_pad_cols as f32;

    self.strip = StripLayout { viewport_w: self.strip.viewport_w, hero_x, hero_w, cards, cta_x, content_w: x };
    self.gallery.set_layout(self.strip.viewport_w as f32, self.strip.content_w, hero_w, self.filtered.len());
  }

  fn max_offset(&self) -> f32 {
    (self.strip.content_w - self.strip.viewport_w as f32).max(0.0)
  }

  // --- Category filter ---

  /// Switch the active category. Always returns to the start of the
  /// filtered strip: both reconciler scalars and the viewport offset reset.
  pub fn set_category(&mut self, key: CategoryKey) {
    info!(category = key.label_en(), "category changed");
    self.active_category = key;
    self.filtered = catalog().filter(key);
    self.grid_cursor = 0;
    self.rebuild_strip();
    self.gallery.reset();
    self.gallery_offset = 0.0;
  }

  pub fn next_category(&mut self) {
    let idx = CategoryKey::ALL.iter().position(|k| *k == self.active_category).unwrap_or(0);
    self.set_category(CategoryKey::ALL[(idx + 1) % CategoryKey::ALL.len()]);
  }

  pub fn prev_category(&mut self) {
    let idx = CategoryKey::ALL.iter().position(|k| *k == self.active_category).unwrap_or(0);
    self.set_category(CategoryKey::ALL[(idx + CategoryKey::ALL.len() - 1) % CategoryKey::ALL.len()]);
  }

  // --- Gallery input ---

  /// Route a wheel delta pair into the reconciler. The grid overlay does not
  /// gate this; an open detail view does.
  pub fn wheel(&mut self, dx: f32, dy: f32) {
    self.gallery.wheel(dx, dy, self.nav.detail_open());
  }

  pub fn drag_start(&mut self, col: u16) {
    if self.nav.detail_open() {
      return;
    }
    self.gallery.drag_start();
    self.drag_last_col = Some(col);
  }

  /// Mid-drag pointer movement: the strip follows the pointer, the viewport
  /// offset is ground truth, and the reconciler is told what it observed.
  pub fn drag_move(&mut self, col: u16) {
    let Some(last) = self.drag_last_col else { return };
    let dx = col as f32 - last as f32;
    self.drag_last_col = Some(col);
    self.gallery_offset = (self.gallery_offset - dx).clamp(0.0, self.max_offset());
    self.gallery.observe_offset(self.gallery_offset);
  }

  pub fn drag_end(&mut self) {
    if self.drag_last_col.take().is_some() {
      self.gallery.drag_end(self.gallery_offset);
    }
  }

  // --- Navigation ---

  pub fn selected_project(&self) -> Option<&'static Project> {
    catalog().by_id(self.nav.selected()?)
  }

  /// Prev/next for the open detail view, resolved against the active filter
  /// with full-catalog fallback.
  pub fn neighbors(&self) -> Option<NavContext<'static>> {
    nav::resolve_neighbors(self.nav.selected()?, &self.filtered, catalog().projects())
  }

  /// Open the detail view for the card the reconciler currently estimates
  /// as most visible.
  pub fn open_current_card(&mut self) {
    if let Some(p) = self.filtered.get(self.gallery.current_index()) {
      self.open_detail(p.id);
    }
  }

  pub fn open_detail(&mut self, id: u32) {
    self.status_message = None;
    self.nav.select(id);
    self.restart_detail_scroll();
  }

  /// Lateral step between two open detail views.
  pub fn navigate_to(&mut self, id: u32) {
    self.status_message = None;
    self.nav.navigate(id);
    self.restart_detail_scroll();
  }

  pub fn close_detail(&mut self) {
    self.status_message = None;
    self.nav.close();
    self.detail_scroll = None;
  }

  /// Tear down any previous vertical adapter before creating the fresh one;
  /// two easing loops must never drive the same content.
  fn restart_detail_scroll(&mut self) {
    self.detail_scroll = None;
    self.detail_scroll = Some(VerticalScroll::new());
  }

  /// Report the rendered detail content extent (called from the render
  /// path, which is the only place the heights are known).
  pub fn set_detail_extent(&mut self, content_h: f32, viewport_h: f32) {
    self.detail_viewport_h = viewport_h;
    if let Some(ref mut v) = self.detail_scroll {
      v.set_extent(content_h, viewport_h);
    }
  }

  pub fn detail_wheel(&mut self, dy: f32) {
    if let Some(ref mut v) = self.detail_scroll {
      v.wheel(dy);
    }
  }

  pub fn detail_page(&mut self, down: bool) {
    let viewport_h = self.detail_viewport_h;
    if let Some(ref mut v) = self.detail_scroll {
      v.page(viewport_h, down);
    }
  }

  // --- Grid overlay ---

  pub fn toggle_grid(&mut self) {
    self.nav.toggle_grid();
    if self.grid_cursor >= self.filtered.len() {
      self.grid_cursor = self.filtered.len().saturating_sub(1);
    }
  }

  pub fn grid_move(&mut self, delta: isize) {
    let count = self.filtered.len();
    if count == 0 {
      return;
    }
    let cur = self.grid_cursor as isize;
    self.grid_cursor = (cur + delta).rem_euclid(count as isize) as usize;
  }

  /// Select the grid tile under the cursor: the overlay closes and the
  /// detail opens through the non-lateral path.
  pub fn grid_select(&mut self) {
    if let Some(p) = self.filtered.get(self.grid_cursor) {
      let id = p.id;
      self.nav.close_grid();
      self.open_detail(id);
    }
  }

  // --- Per-frame tick ---

  /// One animation frame: ease the gallery position and write it back to
  /// the viewport, ease the detail view if one is open, expire stale errors.
  pub fn tick(&mut self) {
    if let Some(offset) = self.gallery.tick(self.nav.detail_open()) {
      self.gallery_offset = offset;
    }
    if let Some(ref mut v) = self.detail_scroll {
      v.tick();
    }
    self.expire_error();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn app() -> App {
    let mut app = App::new(CategoryKey::All);
    app.ensure_layout(120);
    app
  }

  #[test]
  fn category_switch_resets_scroll_to_zero() {
    let mut app = app();
    app.wheel(0.0, 300.0);
    for _ in 0..30 {
      app.tick();
    }
    assert!(app.gallery_offset > 0.0);

    app.set_category(CategoryKey::Works);
    assert_eq!(app.gallery_offset, 0.0);
    // With no further input the strip stays at the start.
    app.tick();
    assert_eq!(app.gallery_offset, 0.0);
  }

  #[test]
  fn same_category_reselect_still_resets() {
    let mut app = app();
    app.wheel(0.0, 300.0);
    for _ in 0..30 {
      app.tick();
    }
    app.set_category(CategoryKey::All);
    assert_eq!(app.gallery_offset, 0.0);
  }

  #[test]
  fn strip_covers_hero_cards_and_cta() {
    let app = app();
    assert_eq!(app.strip.cards.len(), catalog().projects().len());
    assert!(app.strip.hero_x < app.strip.cards[0].x);
    assert!(app.strip.cta_x > app.strip.cards.last().unwrap().x);
    assert!(app.strip.content_w > app.strip.cta_x);
  }

  #[test]
  fn detail_lifecycle_manages_vertical_adapter() {
    let mut app = app();
    assert!(app.detail_scroll.is_none());
    app.open_detail(1);
    assert!(app.detail_scroll.is_some());
    assert!(!app.nav.is_navigating());

    app.navigate_to(2);
    assert!(app.detail_scroll.is_some());
    assert!(app.nav.is_navigating());

    app.close_detail();
    assert!(app.detail_scroll.is_none());
    assert!(!app.nav.detail_open());
  }

  #[test]
  fn wheel_suppressed_while_detail_open() {
    let mut app = app();
    app.open_detail(1);
    app.wheel(0.0, 300.0);
    app.close_detail();
    for _ in 0..30 {
      app.tick();
    }
    assert_eq!(app.gallery_offset, 0.0);
  }

  #[test]
  fn grid_overlay_does_not_gate_wheel() {
    let mut app = app();
    app.toggle_grid();
    app.wheel(0.0, 300.0);
    for _ in 0..30 {
      app.tick();
    }
    assert!(app.gallery_offset > 0.0);
  }

  #[test]
  fn neighbors_fall_back_after_filter_change() {
    let mut app = app();
    // Open a Works project, then filter to Character: the selection is no
    // longer in the active view, so neighbors come from the full catalog.
    app.open_detail(4);
    app.set_category(CategoryKey::Character);
    let ctx = app.neighbors().unwrap();
    assert_eq!(ctx.prev.map(|p| p.id), Some(3));
    assert_eq!(ctx.next.map(|p| p.id), Some(5));
    assert_eq!(ctx.total, catalog().projects().len());
  }

  #[test]
  fn grid_select_opens_detail_non_lateral() {
    let mut app = app();
    app.toggle_grid();
    app.grid_move(2);
    app.grid_select();
    assert!(!app.nav.grid_open());
    assert!(app.nav.detail_open());
    assert!(!app.nav.is_navigating());
    assert_eq!(app.nav.selected(), Some(catalog().projects()[2].id));
  }

  #[test]
  fn drag_moves_strip_and_survives_release() {
    let mut app = app();
    app.drag_start(80);
    app.drag_move(60);
    assert_eq!(app.gallery_offset, 20.0);
    app.drag_end();
    // The easing loop resumes from the release point, not from zero.
    app.tick();
    assert_eq!(app.gallery_offset, 20.0);
  }

  #[test]
  fn mode_priority_detail_over_grid() {
    let mut app = app();
    assert_eq!(app.mode(), InputMode::Gallery);
    app.toggle_grid();
    assert_eq!(app.mode(), InputMode::Grid);
    app.open_detail(1);
    assert_eq!(app.mode(), InputMode::Detail);
  }
}
