//! Scroll-position reconciliation.
//!
//! The gallery strip is driven by a [`Reconciler`]: wheel and drag input land
//! on a `target` position, a per-frame tick eases the rendered `current`
//! position toward it, and the derived progress percentage and card index are
//! published from the smoothed value. Detail views use an independent
//! [`VerticalScroll`] with the same easing discipline, created and torn down
//! by the navigation layer.
//!
//! Positions are measured in terminal columns (f32). Both scalars are kept
//! inside `[0, max_extent]` where `max_extent = content_w - viewport_w`.

use tracing::debug;

use crate::constants::constants;

fn lerp(start: f32, end: f32, factor: f32) -> f32 {
  start + (end - start) * factor
}

/// Smooths bursty wheel/drag input into one continuous gallery position and
/// derives the currently-most-visible card index from it.
pub struct Reconciler {
  target: f32,
  current: f32,
  viewport_w: f32,
  content_w: f32,
  /// Width of the leading hero block, cached from layout and only updated on
  /// resize — never re-measured per tick.
  hero_w: f32,
  card_count: usize,
  dragging: bool,
  /// Last published progress in percent. Holds its prior value while the
  /// strip has no scrollable extent.
  progress: f32,
  /// Last published card index. Only updated when the estimate changes.
  index: usize,
}

impl Reconciler {
  pub fn new() -> Self {
    Self {
      target: 0.0,
      current: 0.0,
      viewport_w: 0.0,
      content_w: 0.0,
      hero_w: 0.0,
      card_count: 0,
      dragging: false,
      progress: 0.0,
      index: 0,
    }
  }

  fn max_extent(&self) -> f32 {
    (self.content_w - self.viewport_w).max(0.0)
  }

  fn clamp(&self, v: f32) -> f32 {
    v.clamp(0.0, self.max_extent())
  }

  /// Update cached strip geometry. Called on terminal resize and when the
  /// filtered card list changes; both scalars are re-clamped to the new
  /// extent so a shrink never leaves them out of bounds.
  pub fn set_layout(&mut self, viewport_w: f32, content_w: f32, hero_w: f32, card_count: usize) {
    self.viewport_w = viewport_w;
    self.content_w = content_w;
    self.hero_w = hero_w;
    self.card_count = card_count;
    self.target = self.clamp(self.target);
    self.current = self.clamp(self.current);
  }

  /// Feed a wheel event. The delta pair decides the intended axis: when the
  /// vertical magnitude wins, the gesture is remapped onto the horizontal
  /// strip (amplified, since the remap feels heavier than native horizontal
  /// scrolling) and the event is consumed. Returns whether it was consumed.
  ///
  /// While a detail view is open the gallery ignores wheel input entirely.
  pub fn wheel(&mut self, dx: f32, dy: f32, detail_open: bool) -> bool {
    if detail_open {
      return false;
    }
    if dy.abs() > dx.abs() {
      self.target = self.clamp(self.target + dy * constants().wheel_amplification);
      true
    } else {
      false
    }
  }

  /// A drag contact started; until it ends the viewport offset is ground
  /// truth and the smoothing loop follows it instead of fighting it.
  pub fn drag_start(&mut self) {
    self.dragging = true;
  }

  /// Observed viewport offset change. Only honored mid-drag — any other
  /// offset change is this reconciler's own tick write-back and must not
  /// feed back into the target.
  pub fn observe_offset(&mut self, offset: f32) {
    if self.dragging {
      let offset = self.clamp(offset);
      self.target = offset;
      self.current = offset;
    }
  }

  /// Drag ended: one final sync from the resting offset so the easing loop
  /// resumes from where the drag left the strip rather than snapping back.
  pub fn drag_end(&mut self, offset: f32) {
    let offset = self.clamp(offset);
    self.target = offset;
    self.current = offset;
    self.dragging = false;
  }

  pub fn is_dragging(&self) -> bool {
    self.dragging
  }

  /// Per-frame step. Eases `current` toward `target` (snapping once the gap
  /// is sub-epsilon, so it can't oscillate forever), then refreshes the
  /// published progress and card index. Returns the offset to write back to
  /// the viewport, or None while a detail view owns the screen.
  ///
  /// With no scrollable extent the derived values keep their prior state —
  /// no divide-by-zero artifacts.
  pub fn tick(&mut self, detail_open: bool) -> Option<f32> {
    if detail_open {
      return None;
    }

    let c = constants();
    let diff = (self.target - self.current).abs();
    if diff > c.snap_epsilon {
      self.current = lerp(self.current, self.target, c.lerp_factor);
    } else if diff > 0.0 {
      self.current = self.target;
    }

    let extent = self.max_extent();
    if extent > 0.0 {
      self.progress = (self.current / extent * 100.0).min(100.0);
      let idx = self.estimate_index(extent);
      if idx != self.index {
        self.index = idx;
        debug!(index = idx, "gallery card index changed");
      }
    }

    Some(self.current)
  }

  /// Estimate which card is most visible. Cards vary in width by aspect
  /// ratio, so this divides the scrollable width past the hero block evenly —
  /// an approximation, which is all the progress readout needs.
  fn estimate_index(&self, extent: f32) -> usize {
    let scroll_past = (self.current - self.hero_w).max(0.0);
    let avg_card = (extent - self.hero_w) / self.card_count.max(1) as f32;
    let idx = (scroll_past / avg_card.max(1.0)).floor() as usize;
    idx.min(self.card_count.saturating_sub(1))
  }

  /// Reset to the start of the strip. Used whenever the category filter
  /// changes; the caller also forces the viewport offset to 0.
  pub fn reset(&mut self) {
    self.target = 0.0;
    self.current = 0.0;
  }

  pub fn progress_percent(&self) -> f32 {
    self.progress
  }

  pub fn current_index(&self) -> usize {
    self.index
  }
}

impl Default for Reconciler {
  fn default() -> Self {
    Self::new()
  }
}

// --- Vertical adapter ---

/// Vertical smoothing for a detail view's content, independent of the
/// gallery reconciler. One instance per open detail view: the navigation
/// layer tears it down on close and builds a fresh one on open, so two
/// easing loops never drive the same content.
pub struct VerticalScroll {
  target: f32,
  current: f32,
  max: f32,
}

impl VerticalScroll {
  pub fn new() -> Self {
    Self { target: 0.0, current: 0.0, max: 0.0 }
  }

  /// Update the scrollable extent from content and viewport heights,
  /// re-clamping both scalars.
  pub fn set_extent(&mut self, content_h: f32, viewport_h: f32) {
    self.max = (content_h - viewport_h).max(0.0);
    self.target = self.target.clamp(0.0, self.max);
    self.current = self.current.clamp(0.0, self.max);
  }

  pub fn wheel(&mut self, dy: f32) {
    self.target = (self.target + dy).clamp(0.0, self.max);
  }

  /// Jump the target by a whole viewport (PageUp/PageDown).
  pub fn page(&mut self, viewport_h: f32, down: bool) {
    let delta = if down { viewport_h } else { -viewport_h };
    self.target = (self.target + delta).clamp(0.0, self.max);
  }

  pub fn tick(&mut self) -> f32 {
    let c = constants();
    let diff = (self.target - self.current).abs();
    if diff > c.snap_epsilon {
      self.current = lerp(self.current, self.target, c.detail_lerp_factor);
    } else if diff > 0.0 {
      self.current = self.target;
    }
    self.current
  }

  pub fn offset(&self) -> f32 {
    self.current
  }
}

impl Default for VerticalScroll {
  fn default() -> Self {
    Self::new()
  }
}
