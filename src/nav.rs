//! Navigation state: which project is open, how it was entered, and whether
//! the grid index overlay is showing.
//!
//! At most one surface owns pointer/wheel input at a time — an open detail
//! view suppresses gallery wheel handling entirely, while the grid is purely
//! an overlay and leaves the gallery reconciler untouched.

use tracing::info;

use crate::catalog::{CategoryKey, Project};

/// Selection and overlay state for the gallery.
#[derive(Debug, Default)]
pub struct NavState {
  selected: Option<u32>,
  /// True only while stepping directly between two open detail views.
  /// Downstream layouts use this to skip the shared hero-image transition
  /// (two different images are involved, not one staying in place).
  is_navigating: bool,
  grid_open: bool,
}

impl NavState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn selected(&self) -> Option<u32> {
    self.selected
  }

  pub fn detail_open(&self) -> bool {
    self.selected.is_some()
  }

  pub fn is_navigating(&self) -> bool {
    self.is_navigating
  }

  pub fn grid_open(&self) -> bool {
    self.grid_open
  }

  /// Open a detail view from a gallery card or grid tile.
  pub fn select(&mut self, id: u32) {
    info!(id, "detail opened from gallery");
    self.is_navigating = false;
    self.selected = Some(id);
  }

  /// Step laterally from one open detail view to a neighbor.
  pub fn navigate(&mut self, id: u32) {
    info!(id, "detail lateral navigation");
    self.is_navigating = true;
    self.selected = Some(id);
  }

  /// Close the detail view, returning to the gallery.
  pub fn close(&mut self) {
    if self.selected.is_some() {
      info!("detail closed");
    }
    self.is_navigating = false;
    self.selected = None;
  }

  pub fn toggle_grid(&mut self) {
    self.grid_open = !self.grid_open;
  }

  pub fn close_grid(&mut self) {
    self.grid_open = false;
  }
}

// --- Neighbor resolution ---

/// Prev/next context handed to both detail layouts.
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
  pub prev: Option<&'a Project>,
  pub next: Option<&'a Project>,
  pub current_index: usize,
  pub total: usize,
}

/// Resolve a selection's neighbors within the active filtered list.
///
/// A selection made before a category change may not be a member of the
/// current filter; in that case neighbors resolve against the full catalog
/// instead, so prev/next never dead-end. Returns None only when the id is
/// unknown to the catalog itself.
pub fn resolve_neighbors<'a>(
  selected: u32,
  filtered: &[&'a Project],
  full: &'a [Project],
) -> Option<NavContext<'a>> {
  if let Some(idx) = filtered.iter().position(|p| p.id == selected) {
    return Some(NavContext {
      prev: (idx > 0).then(|| filtered[idx - 1]),
      next: filtered.get(idx + 1).copied(),
      current_index: idx,
      total: filtered.len(),
    });
  }

  let idx = full.iter().position(|p| p.id == selected)?;
  Some(NavContext {
    prev: (idx > 0).then(|| &full[idx - 1]),
    next: full.get(idx + 1),
    current_index: idx,
    total: full.len(),
  })
}

// --- Detail variant dispatch ---

/// Which detail layout a selection renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailVariant {
  /// Character-sheet layout: character data present AND category matches.
  Character,
  /// Generic project layout.
  Generic,
}

pub fn detail_variant(project: &Project) -> DetailVariant {
  if project.category == CategoryKey::Character && project.character_data.is_some() {
    DetailVariant::Character
  } else {
    DetailVariant::Generic
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{Project, ProjectStyle};
  use crate::video::AspectRatio;

  fn make_project(id: u32, category: CategoryKey) -> Project {
    Project {
      id,
      title: format!("P{}", id),
      category,
      category_label: String::new(),
      year: "2024".to_string(),
      client: String::new(),
      image: None,
      video_url: String::new(),
      aspect_ratio: AspectRatio::Wide,
      description: String::new(),
      storyboard_desc: String::new(),
      fonts: String::new(),
      role: String::new(),
      tools: String::new(),
      process: String::new(),
      storyboard_images: Vec::new(),
      style: ProjectStyle {
        accent_color: "#e5e0d5".to_string(),
        title_font: String::new(),
        title_weight: 400,
        title_italic: false,
        title_uppercase: false,
        title_letter_spacing: String::new(),
        title_size: String::new(),
      },
      character_data: None,
    }
  }

  // --- laterality flag ---

  #[test]
  fn select_is_never_lateral() {
    let mut nav = NavState::new();
    nav.navigate(2);
    nav.select(1);
    assert_eq!(nav.selected(), Some(1));
    assert!(!nav.is_navigating());
  }

  #[test]
  fn navigate_is_always_lateral() {
    let mut nav = NavState::new();
    nav.navigate(3);
    assert_eq!(nav.selected(), Some(3));
    assert!(nav.is_navigating());
  }

  #[test]
  fn close_clears_selection_and_flag() {
    let mut nav = NavState::new();
    nav.navigate(3);
    nav.close();
    assert_eq!(nav.selected(), None);
    assert!(!nav.is_navigating());
    assert!(!nav.detail_open());
  }

  #[test]
  fn grid_is_independent_of_detail() {
    let mut nav = NavState::new();
    nav.select(1);
    nav.toggle_grid();
    assert!(nav.grid_open());
    assert!(nav.detail_open());
    nav.close_grid();
    assert!(!nav.grid_open());
    assert!(nav.detail_open());
  }

  // --- neighbor resolution ---

  #[test]
  fn neighbors_within_filter() {
    // Catalog [A,B,C,D] filtered to [B,D], B selected: prev none, next D.
    let full: Vec<Project> =
      [1, 2, 3, 4].iter().map(|&id| make_project(id, CategoryKey::Works)).collect();
    let filtered: Vec<&Project> = vec![&full[1], &full[3]];

    let ctx = resolve_neighbors(2, &filtered, &full).unwrap();
    assert!(ctx.prev.is_none());
    assert_eq!(ctx.next.map(|p| p.id), Some(4));
    assert_eq!(ctx.current_index, 0);
    assert_eq!(ctx.total, 2);
  }

  #[test]
  fn neighbors_fall_back_to_full_catalog() {
    // C is not in the filter; its neighbors come from the full catalog.
    let full: Vec<Project> =
      [1, 2, 3, 4].iter().map(|&id| make_project(id, CategoryKey::Works)).collect();
    let filtered: Vec<&Project> = vec![&full[1], &full[3]];

    let ctx = resolve_neighbors(3, &filtered, &full).unwrap();
    assert_eq!(ctx.prev.map(|p| p.id), Some(2));
    assert_eq!(ctx.next.map(|p| p.id), Some(4));
    assert_eq!(ctx.current_index, 2);
    assert_eq!(ctx.total, 4);
  }

  #[test]
  fn neighbors_at_catalog_edges() {
    let full: Vec<Project> =
      [1, 2].iter().map(|&id| make_project(id, CategoryKey::Works)).collect();
    let filtered: Vec<&Project> = full.iter().collect();

    let first = resolve_neighbors(1, &filtered, &full).unwrap();
    assert!(first.prev.is_none());
    assert_eq!(first.next.map(|p| p.id), Some(2));

    let last = resolve_neighbors(2, &filtered, &full).unwrap();
    assert_eq!(last.prev.map(|p| p.id), Some(1));
    assert!(last.next.is_none());
  }

  #[test]
  fn unknown_selection_has_no_context() {
    let full: Vec<Project> = vec![make_project(1, CategoryKey::Works)];
    let filtered: Vec<&Project> = full.iter().collect();
    assert!(resolve_neighbors(99, &filtered, &full).is_none());
  }

  // --- variant dispatch ---

  #[test]
  fn character_category_with_sheet_gets_character_layout() {
    let mut p = make_project(10, CategoryKey::Character);
    p.character_data = Some(crate::catalog::CharacterData {
      name_kr: "네오".to_string(),
      story: String::new(),
      concept: String::new(),
      designer: String::new(),
      color_palette: Vec::new(),
      design_features: Vec::new(),
      turnaround_images: Vec::new(),
      turnaround_labels: Vec::new(),
      pose_images: Vec::new(),
      pose_labels: Vec::new(),
      usage_images: Vec::new(),
      usage_labels: Vec::new(),
      tools: String::new(),
    });
    assert_eq!(detail_variant(&p), DetailVariant::Character);
  }

  #[test]
  fn character_category_without_sheet_is_generic() {
    let p = make_project(10, CategoryKey::Character);
    assert_eq!(detail_variant(&p), DetailVariant::Generic);
  }

  #[test]
  fn other_categories_are_generic() {
    let p = make_project(1, CategoryKey::Youtube);
    assert_eq!(detail_variant(&p), DetailVariant::Generic);
  }
}
