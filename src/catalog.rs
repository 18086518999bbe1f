//! Project catalog: an immutable, ordered collection loaded once from
//! `projects.ron` at startup and never mutated.
//!
//! Insertion order in the RON source is the canonical display order; filtered
//! views preserve it. Category counts are computed once at load against the
//! full catalog and are never recomputed for a filter.

use clap::ValueEnum;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::video::AspectRatio;

// --- Categories ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CategoryKey {
  /// Pseudo-category matching every project.
  All,
  Youtube,
  Works,
  Did,
  Character,
}

impl CategoryKey {
  pub const ALL: [CategoryKey; 5] =
    [CategoryKey::All, CategoryKey::Youtube, CategoryKey::Works, CategoryKey::Did, CategoryKey::Character];

  pub fn label_kr(self) -> &'static str {
    match self {
      CategoryKey::All => "전체보기",
      CategoryKey::Youtube => "유튜브",
      CategoryKey::Works => "작업물",
      CategoryKey::Did => "DID",
      CategoryKey::Character => "캐릭터 디자인",
    }
  }

  pub fn label_en(self) -> &'static str {
    match self {
      CategoryKey::All => "All",
      CategoryKey::Youtube => "YouTube",
      CategoryKey::Works => "Works",
      CategoryKey::Did => "DID",
      CategoryKey::Character => "Character",
    }
  }
}

/// CLI-facing category selector (maps onto [`CategoryKey`]).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliCategory {
  All,
  Youtube,
  Works,
  Did,
  Character,
}

pub fn resolve_category(cli: CliCategory) -> CategoryKey {
  match cli {
    CliCategory::All => CategoryKey::All,
    CliCategory::Youtube => CategoryKey::Youtube,
    CliCategory::Works => CategoryKey::Works,
    CliCategory::Did => CategoryKey::Did,
    CliCategory::Character => CategoryKey::Character,
  }
}

/// A category plus its precomputed project count (full-catalog count for the
/// All pseudo-category, else count of projects whose category matches).
#[derive(Debug, Clone, Copy)]
pub struct Category {
  pub key: CategoryKey,
  pub count: usize,
}

// --- Records ---

#[derive(Debug, Clone, Deserialize)]
pub struct ColorSwatch {
  pub name: String,
  pub name_kr: String,
  pub hex: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DesignFeature {
  pub label: String,
  pub label_en: String,
  pub desc: String,
}

/// Character-sheet data attached to character-design projects.
/// Any of the lists may be empty; empty lists suppress their display section.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterData {
  pub name_kr: String,
  pub story: String,
  pub concept: String,
  pub designer: String,
  pub color_palette: Vec<ColorSwatch>,
  pub design_features: Vec<DesignFeature>,
  pub turnaround_images: Vec<String>,
  pub turnaround_labels: Vec<String>,
  pub pose_images: Vec<String>,
  pub pose_labels: Vec<String>,
  pub usage_images: Vec<String>,
  pub usage_labels: Vec<String>,
  pub tools: String,
}

/// Per-project visual identity for detail views.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectStyle {
  pub accent_color: String,
  pub title_font: String,
  pub title_weight: u16,
  pub title_italic: bool,
  pub title_uppercase: bool,
  pub title_letter_spacing: String,
  pub title_size: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
  pub id: u32,
  pub title: String,
  pub category: CategoryKey,
  pub category_label: String,
  pub year: String,
  pub client: String,
  pub image: Option<String>,
  pub video_url: String,
  pub aspect_ratio: AspectRatio,
  pub description: String,
  pub storyboard_desc: String,
  pub fonts: String,
  pub role: String,
  pub tools: String,
  pub process: String,
  pub storyboard_images: Vec<String>,
  pub style: ProjectStyle,
  pub character_data: Option<CharacterData>,
}

/// Hero block copy shown at the head of the gallery strip for a category.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroText {
  pub category: CategoryKey,
  pub line1: String,
  pub line2: String,
  pub sub_kr: String,
  pub desc: String,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
  hero_text: Vec<HeroText>,
  projects: Vec<Project>,
}

// --- Catalog ---

pub struct Catalog {
  data: CatalogData,
  categories: Vec<Category>,
}

impl Catalog {
  fn load() -> Self {
    // Safety: the RON file is embedded at compile time; if it's malformed this is a build-time error.
    let data: CatalogData =
      ron::from_str(include_str!("../projects.ron")).expect("projects.ron must be valid RON (embedded at compile time)");
    let categories = CategoryKey::ALL
      .iter()
      .map(|&key| Category { key, count: filter_by_category(&data.projects, key).len() })
      .collect();
    Self { data, categories }
  }

  pub fn projects(&self) -> &[Project] {
    &self.data.projects
  }

  pub fn by_id(&self, id: u32) -> Option<&Project> {
    self.data.projects.iter().find(|p| p.id == id)
  }

  /// Filtered view for a category, preserving insertion order.
  pub fn filter(&self, key: CategoryKey) -> Vec<&Project> {
    filter_by_category(&self.data.projects, key)
  }

  pub fn categories(&self) -> &[Category] {
    &self.categories
  }

  pub fn hero(&self, key: CategoryKey) -> &HeroText {
    self.data.hero_text.iter().find(|h| h.category == key).unwrap_or(&self.data.hero_text[0])
  }
}

/// All projects for the All pseudo-category, else the matching subset in
/// original relative order.
pub fn filter_by_category(projects: &[Project], key: CategoryKey) -> Vec<&Project> {
  if key == CategoryKey::All {
    projects.iter().collect()
  } else {
    projects.iter().filter(|p| p.category == key).collect()
  }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::load);

/// Returns the process-wide catalog, loaded on first access.
pub fn catalog() -> &'static Catalog {
  &CATALOG
}

// --- Character sheet sections ---

/// The fixed priority order of character-sheet sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSection {
  Turnaround,
  Breakdown,
  Pose,
  Usage,
}

impl SheetSection {
  pub fn title_en(self) -> &'static str {
    match self {
      SheetSection::Turnaround => "Turnaround & Proportions",
      SheetSection::Breakdown => "Character Breakdown",
      SheetSection::Pose => "Expression & Pose",
      SheetSection::Usage => "Usage Examples",
    }
  }

  pub fn title_kr(self) -> &'static str {
    match self {
      SheetSection::Turnaround => "턴어라운드 & 프로포션",
      SheetSection::Breakdown => "캐릭터 분석",
      SheetSection::Pose => "표정 & 포즈",
      SheetSection::Usage => "활용 사례",
    }
  }
}

/// Number the present sections in order, skipping absent ones entirely.
/// The first present section is always `SEC.01`.
pub fn numbered_sections(sections: &[(SheetSection, bool)]) -> Vec<(SheetSection, String)> {
  sections
    .iter()
    .filter(|(_, present)| *present)
    .enumerate()
    .map(|(i, (section, _))| (*section, format!("SEC.{:02}", i + 1)))
    .collect()
}

impl CharacterData {
  /// Presence of each section, in the fixed priority order.
  pub fn section_presence(&self) -> [(SheetSection, bool); 4] {
    [
      (SheetSection::Turnaround, !self.turnaround_images.is_empty()),
      (SheetSection::Breakdown, !self.color_palette.is_empty() || !self.design_features.is_empty()),
      (SheetSection::Pose, !self.pose_images.is_empty()),
      (SheetSection::Usage, !self.usage_images.is_empty()),
    ]
  }

  /// Numbered labels for the sections this record actually renders.
  pub fn section_labels(&self) -> Vec<(SheetSection, String)> {
    numbered_sections(&self.section_presence())
  }
}

// --- Colors ---

/// Parse a `#RRGGBB` accent color. Returns None for anything else.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
  let hex = hex.strip_prefix('#')?;
  if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
    return None;
  }
  let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
  let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
  let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
  Some((r, g, b))
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- catalog load ---

  #[test]
  fn catalog_loads_and_is_ordered_by_id() {
    let cat = catalog();
    assert!(!cat.projects().is_empty());
    // Insertion order is canonical; the seed data happens to be id-ascending.
    let ids: Vec<u32> = cat.projects().iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
  }

  #[test]
  fn category_counts_cover_full_catalog() {
    let cat = catalog();
    let total = cat.projects().len();
    let all = cat.categories().iter().find(|c| c.key == CategoryKey::All).unwrap();
    assert_eq!(all.count, total);
    let sum: usize = cat.categories().iter().filter(|c| c.key != CategoryKey::All).map(|c| c.count).sum();
    assert_eq!(sum, total);
  }

  #[test]
  fn filter_preserves_relative_order() {
    let cat = catalog();
    let works = cat.filter(CategoryKey::Works);
    assert!(works.iter().all(|p| p.category == CategoryKey::Works));
    let ids: Vec<u32> = works.iter().map(|p| p.id).collect();
    let full_order: Vec<u32> =
      cat.projects().iter().filter(|p| p.category == CategoryKey::Works).map(|p| p.id).collect();
    assert_eq!(ids, full_order);
  }

  #[test]
  fn character_projects_carry_sheets() {
    let cat = catalog();
    for p in cat.filter(CategoryKey::Character) {
      assert!(p.character_data.is_some(), "project {} missing character data", p.id);
    }
  }

  #[test]
  fn hero_text_covers_every_category() {
    let cat = catalog();
    for key in CategoryKey::ALL {
      let hero = cat.hero(key);
      assert!(!hero.line1.is_empty());
    }
  }

  // --- numbered_sections ---

  fn sheet(turnaround: usize, palette: usize, pose: usize, usage: usize) -> CharacterData {
    CharacterData {
      name_kr: "테스트".to_string(),
      story: String::new(),
      concept: String::new(),
      designer: String::new(),
      color_palette: (0..palette)
        .map(|i| ColorSwatch { name: format!("c{}", i), name_kr: String::new(), hex: "#000000".to_string() })
        .collect(),
      design_features: Vec::new(),
      turnaround_images: (0..turnaround).map(|i| format!("t{}", i)).collect(),
      turnaround_labels: Vec::new(),
      pose_images: (0..pose).map(|i| format!("p{}", i)).collect(),
      pose_labels: Vec::new(),
      usage_images: (0..usage).map(|i| format!("u{}", i)).collect(),
      usage_labels: Vec::new(),
      tools: String::new(),
    }
  }

  #[test]
  fn sections_all_present() {
    let labels = sheet(4, 5, 6, 3).section_labels();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], (SheetSection::Turnaround, "SEC.01".to_string()));
    assert_eq!(labels[3], (SheetSection::Usage, "SEC.04".to_string()));
  }

  #[test]
  fn absent_sections_are_skipped_not_numbered() {
    // No turnaround, no breakdown: pose is the first rendered section.
    let labels = sheet(0, 0, 6, 0).section_labels();
    assert_eq!(labels, vec![(SheetSection::Pose, "SEC.01".to_string())]);
  }

  #[test]
  fn breakdown_present_when_only_palette_nonempty() {
    let labels = sheet(0, 5, 0, 0).section_labels();
    assert_eq!(labels, vec![(SheetSection::Breakdown, "SEC.01".to_string())]);
  }

  #[test]
  fn empty_sheet_renders_no_sections() {
    assert!(sheet(0, 0, 0, 0).section_labels().is_empty());
  }

  // --- parse_hex ---

  #[test]
  fn parse_hex_valid() {
    assert_eq!(parse_hex("#2EE59D"), Some((0x2e, 0xe5, 0x9d)));
    assert_eq!(parse_hex("#0f0f0f"), Some((15, 15, 15)));
  }

  #[test]
  fn parse_hex_invalid() {
    assert_eq!(parse_hex("2EE59D"), None);
    assert_eq!(parse_hex("#fff"), None);
    assert_eq!(parse_hex("#zzzzzz"), None);
  }
}
