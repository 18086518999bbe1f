//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!` so it's always available —
//! no runtime file I/O. Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// All tuneable application constants.
///
/// The scroll-physics values (amplification, lerp factor, snap epsilon) are
/// tuned by feel; treat them as opaque configuration.
#[derive(Debug, Deserialize)]
pub struct Constants {
  // Horizontal scroll physics
  pub wheel_amplification: f32,
  pub lerp_factor: f32,
  pub snap_epsilon: f32,
  pub wheel_step_cols: f32,

  // Detail view vertical smoothing
  pub detail_lerp_factor: f32,
  pub detail_wheel_step: f32,

  // Gallery strip layout (terminal columns)
  pub edge_pad_cols: u16,
  pub hero_cols: u16,
  pub card_base_cols: u16,
  pub card_gap_cols: u16,
  pub cta_cols: u16,

  // Grid overlay
  pub grid_tile_cols: u16,
  pub grid_tile_rows: u16,

  // Run loop
  pub tick_ms: u64,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; if it's malformed this is a build-time error.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}
