use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, InputMode};
use crate::catalog::{CharacterData, Project, SheetSection, catalog, parse_hex};
use crate::constants::constants;
use crate::nav::{DetailVariant, NavContext, detail_variant};
use crate::theme::Theme;
use crate::video::{ParsedVideo, parse_video_url, project_thumbnail};

// --- Helpers ---

/// Display width of a string (accounting for double-width CJK).
pub fn display_width(s: &str) -> usize {
  s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` display columns, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if display_width(s) <= max_width {
    return s.to_string();
  }
  let mut out = String::new();
  let mut used = 0;
  for c in s.chars() {
    let w = c.width().unwrap_or(0);
    if used + w > max_width.saturating_sub(1) {
      break;
    }
    out.push(c);
    used += w;
  }
  out.push('…');
  out
}

/// Greedy word wrap to `width` display columns. Words wider than the line
/// are broken mid-word so CJK-heavy text still wraps.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
  let width = width.max(4);
  let mut lines = Vec::new();
  let mut line = String::new();
  let mut line_w = 0;

  for word in s.split_whitespace() {
    let word_w = display_width(word);
    if line_w > 0 && line_w + 1 + word_w > width {
      lines.push(std::mem::take(&mut line));
      line_w = 0;
    }
    if word_w > width {
      // Break an overlong word across lines, char by char.
      for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if line_w + w > width {
          lines.push(std::mem::take(&mut line));
          line_w = 0;
        }
        line.push(c);
        line_w += w;
      }
      continue;
    }
    if line_w > 0 {
      line.push(' ');
      line_w += 1;
    }
    line.push_str(word);
    line_w += word_w;
  }
  if !line.is_empty() {
    lines.push(line);
  }
  lines
}

fn pad2(n: usize) -> String {
  format!("{:02}", n)
}

/// A project's accent color, falling back to the theme accent when the hex
/// string doesn't parse.
fn accent_of(project: &Project, theme: &Theme) -> Color {
  parse_hex(&project.style.accent_color).map(|(r, g, b)| Color::Rgb(r, g, b)).unwrap_or(theme.accent)
}

/// Intersect a horizontally-positioned strip block with the visible area.
fn clip_strip_rect(area: Rect, x: f32, w: u16) -> Option<Rect> {
  let left = x.max(area.x as f32) as i32;
  let right = ((x + w as f32) as i32).min((area.x + area.width) as i32);
  if right <= left {
    return None;
  }
  Some(Rect { x: left as u16, y: area.y, width: (right - left) as u16, height: area.height })
}

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();
  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  if app.mode() == InputMode::Detail {
    let [main_area, footer_area] =
      Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(frame.area());
    app.ensure_layout(main_area.width);
    render_detail(frame, app, main_area);
    render_footer(frame, app, footer_area);
    return;
  }

  let [header_area, main_area, status_area, progress_area, footer_area] = Layout::vertical([
    Constraint::Length(2),
    Constraint::Min(5),
    Constraint::Length(1),
    Constraint::Length(1),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  app.ensure_layout(main_area.width);

  render_header(frame, app, header_area);
  render_gallery(frame, app, main_area);
  if app.mode() == InputMode::Grid {
    render_grid(frame, app, main_area);
  }
  render_status(frame, app, status_area);
  if app.mode() == InputMode::Gallery {
    render_progress(frame, app, progress_area);
  }
  render_footer(frame, app, footer_area);
}

// --- Header ---

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let [identity_area, tabs_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

  let left = Line::from(vec![
    Span::styled(" KIM YOUNG MIN", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
    Span::styled("®", Style::default().fg(theme.muted)),
  ]);
  frame.render_widget(left, identity_area);

  let version = format!("showreel v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let right_area = Rect {
    x: area.x + area.width.saturating_sub(version.len() as u16),
    width: version.len() as u16,
    ..identity_area
  };
  frame.render_widget(right, right_area);

  let mut spans: Vec<Span> = vec![Span::raw(" ")];
  for cat in catalog().categories() {
    let active = cat.key == app.active_category;
    let style = if active {
      Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(theme.muted)
    };
    spans.push(Span::styled(format!(" {} {} ", cat.key.label_kr(), pad2(cat.count)), style));
    spans.push(Span::raw(" "));
  }
  spans.push(Span::styled("  [g] Index", Style::default().fg(theme.muted)));
  frame.render_widget(Line::from(spans), tabs_area);
}

// --- Gallery strip ---

fn render_gallery(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let offset = app.gallery_offset;
  let origin = area.x as f32 - offset;

  if let Some(rect) = clip_strip_rect(area, origin + app.strip.hero_x, app.strip.hero_w as u16) {
    render_hero(frame, app, rect);
  }

  let current = app.gallery.current_index();
  for (i, (span, project)) in app.strip.cards.iter().zip(app.filtered()).enumerate() {
    if let Some(rect) = clip_strip_rect(area, origin + span.x, span.w) {
      render_card(frame, theme, project, i, i == current, rect);
    }
  }

  if let Some(rect) = clip_strip_rect(area, origin + app.strip.cta_x, constants().cta_cols) {
    render_cta(frame, theme, rect);
  }
}

fn render_hero(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let hero = catalog().hero(app.active_category);
  let width = area.width.saturating_sub(2) as usize;

  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled(hero.line1.as_str(), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))),
    Line::from(Span::styled(
      hero.line2.as_str(),
      Style::default().fg(theme.fg).add_modifier(Modifier::BOLD | Modifier::ITALIC),
    )),
    Line::from(""),
    Line::from(Span::styled(hero.sub_kr.as_str(), Style::default().fg(theme.muted))),
    Line::from(""),
    Line::from(vec![
      Span::styled("── ", Style::default().fg(theme.border)),
      Span::styled("SELECTED WORKS", Style::default().fg(theme.muted)),
    ]),
    Line::from(""),
  ];
  for l in wrap_text(&hero.desc, width) {
    lines.push(Line::from(Span::styled(l, Style::default().fg(theme.muted))));
  }

  frame.render_widget(Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1))), area);
}

fn render_card(frame: &mut Frame, theme: &Theme, project: &Project, index: usize, is_current: bool, area: Rect) {
  let accent = accent_of(project, theme);
  let border = if is_current { accent } else { theme.border };
  let block = Block::bordered()
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(border))
    .title(Line::from(Span::styled(
      format!(" {} ", pad2(index + 1)),
      Style::default().fg(if is_current { accent } else { theme.muted }),
    )))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      truncate_str(&project.title, inner_w),
      Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(
      truncate_str(&format!("{} · {}", project.year, project.client), inner_w),
      Style::default().fg(theme.muted),
    )),
    Line::from(""),
    Line::from(vec![
      Span::styled(project.aspect_ratio.tag(), Style::default().fg(accent)),
      Span::styled(format!("  {}", project.category_label), Style::default().fg(theme.muted)),
    ]),
    Line::from(""),
  ];
  for l in wrap_text(&project.description, inner_w).into_iter().take(area.height.saturating_sub(8) as usize) {
    lines.push(Line::from(Span::styled(l, Style::default().fg(theme.muted))));
  }

  frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_cta(frame: &mut Frame, theme: &Theme, area: Rect) {
  let lines = vec![
    Line::from(""),
    Line::from(""),
    Line::from(Span::styled("Every frame", Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC))),
    Line::from(Span::styled("tells a story.", Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC))),
    Line::from(""),
    Line::from(Span::styled("모든 프레임이", Style::default().fg(theme.muted))),
    Line::from(Span::styled("이야기를 전합니다.", Style::default().fg(theme.muted))),
    Line::from(""),
    Line::from(Span::styled("대화 시작하기", Style::default().fg(theme.fg).add_modifier(Modifier::UNDERLINED))),
  ];
  frame.render_widget(Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1))), area);
}

// --- Status / progress / footer ---

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = if let Some(err) = &app.last_error {
    (format!(" ⚠  {}", err), Style::default().fg(theme.error))
  } else if let Some(msg) = &app.status_message {
    (format!(" ♪ {}", msg), Style::default().fg(theme.status))
  } else {
    let count = app.filtered().len();
    (
      format!(" ● {} — {} projects", app.active_category.label_en(), count),
      Style::default().fg(theme.muted),
    )
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let total = app.filtered().len();
  if total == 0 {
    return;
  }
  let current = app.gallery.current_index();
  let left = format!(" {} / {} ", pad2(current + 1), pad2(total));
  let hint = " SCROLL → ";
  let track_w = area.width.saturating_sub(left.len() as u16 + display_width(hint) as u16) as usize;
  let filled = ((app.gallery.progress_percent() / 100.0) * track_w as f32).round() as usize;
  let filled = filled.min(track_w);

  let line = Line::from(vec![
    Span::styled(left, Style::default().fg(theme.muted)),
    Span::styled("━".repeat(filled), Style::default().fg(theme.accent)),
    Span::styled("─".repeat(track_w - filled), Style::default().fg(theme.border)),
    Span::styled(hint, Style::default().fg(theme.muted)),
  ]);
  frame.render_widget(line, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let keys: Vec<(&str, &str)> = match app.mode() {
    InputMode::Gallery => vec![
      ("←/→", "Scroll"),
      ("Enter", "Open"),
      ("Tab", "Category"),
      ("g", "Index"),
      ("^t", "Theme"),
      ("q", "Quit"),
    ],
    InputMode::Grid => vec![("←↑↓→", "Navigate"), ("Enter", "Open"), ("Esc", "Close")],
    InputMode::Detail => {
      vec![("←", "이전"), ("→", "다음"), ("j/k", "Scroll"), ("o", "Video"), ("Esc", "닫기")]
    }
  };

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw("  "));
      }
      s
    })
    .collect();
  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(theme_label.len() as u16), width: theme_label.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

// --- Grid overlay ---

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  frame.render_widget(Clear, area);
  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

  let c = constants();
  let label = if app.active_category == crate::catalog::CategoryKey::All {
    "All Projects".to_string()
  } else {
    catalog().hero(app.active_category).sub_kr.clone()
  };
  let header = Line::from(vec![
    Span::styled(" Index ", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD | Modifier::ITALIC)),
    Span::styled("│ ", Style::default().fg(theme.border)),
    Span::styled(format!("{} — {}", label, pad2(app.filtered().len())), Style::default().fg(theme.muted)),
  ]);
  frame.render_widget(header, Rect { height: 1, ..area });

  let cols = (area.width / c.grid_tile_cols).max(1);
  let tiles_area = Rect { y: area.y + 2, height: area.height.saturating_sub(2), ..area };

  for (i, project) in app.filtered().iter().enumerate() {
    let col = (i as u16) % cols;
    let row = (i as u16) / cols;
    let y = tiles_area.y + row * c.grid_tile_rows;
    if y + c.grid_tile_rows > tiles_area.y + tiles_area.height {
      break;
    }
    let rect = Rect { x: tiles_area.x + col * c.grid_tile_cols + 1, y, width: c.grid_tile_cols - 2, height: c.grid_tile_rows };
    render_grid_tile(frame, theme, project, i == app.grid_cursor, rect);
  }
}

fn render_grid_tile(frame: &mut Frame, theme: &Theme, project: &Project, selected: bool, area: Rect) {
  let accent = accent_of(project, theme);
  let border = if selected { accent } else { theme.border };
  let block = Block::bordered()
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(border))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let id_year = Line::from(vec![
    Span::styled(pad2(project.id as usize), Style::default().fg(theme.muted)),
    Span::styled(
      format!("{:>width$}", project.year, width = inner_w.saturating_sub(2)),
      Style::default().fg(theme.muted),
    ),
  ]);
  let lines = vec![
    id_year,
    Line::from(Span::styled(
      truncate_str(&project.title, inner_w),
      Style::default().fg(if selected { theme.fg } else { theme.muted }).add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(truncate_str(&project.category_label, inner_w), Style::default().fg(theme.muted))),
  ];
  frame.render_widget(Paragraph::new(lines).block(block), area);
}

// --- Detail views ---

fn render_detail(frame: &mut Frame, app: &mut App, area: Rect) {
  let Some(project) = app.selected_project() else { return };
  let Some(ctx) = app.neighbors() else { return };
  let theme = app.theme();
  let lateral = app.nav.is_navigating();

  let width = area.width.saturating_sub(6) as usize;
  let lines = match (detail_variant(project), project.character_data.as_ref()) {
    (DetailVariant::Character, Some(cd)) => character_detail_lines(project, cd, &ctx, lateral, theme, width),
    _ => generic_detail_lines(project, &ctx, lateral, theme, width),
  };

  app.set_detail_extent(lines.len() as f32, area.height as f32);
  let scroll = app.detail_scroll.as_ref().map(|v| v.offset()).unwrap_or(0.0) as u16;

  let paragraph = Paragraph::new(lines)
    .block(Block::default().padding(Padding::horizontal(3)))
    .scroll((scroll, 0));
  frame.render_widget(paragraph, area);
}

fn section_header(label: &str, title_en: &str, title_kr: &str, accent: Color, theme: &Theme) -> Vec<Line<'static>> {
  vec![
    Line::from(""),
    Line::from(vec![
      Span::styled(format!("{}  ", label), Style::default().fg(theme.muted)),
      Span::styled(title_en.to_string().to_uppercase(), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
      Span::styled(format!("  {}", title_kr), Style::default().fg(theme.muted)),
    ]),
    Line::from(Span::styled("─".repeat(40), Style::default().fg(accent))),
    Line::from(""),
  ]
}

fn meta_line(label: &str, value: &str, theme: &Theme) -> Line<'static> {
  Line::from(vec![
    Span::styled(format!("{:<10}", label), Style::default().fg(theme.muted)),
    Span::styled(value.to_string(), Style::default().fg(theme.fg)),
  ])
}

fn styled_title(project: &Project, accent: Color) -> Line<'static> {
  let mut style = Style::default().fg(accent);
  if project.style.title_weight >= 600 {
    style = style.add_modifier(Modifier::BOLD);
  }
  if project.style.title_italic {
    style = style.add_modifier(Modifier::ITALIC);
  }
  let title =
    if project.style.title_uppercase { project.title.to_uppercase() } else { project.title.clone() };
  Line::from(Span::styled(title, style))
}

/// Prev/next navigation footer shared by both detail layouts.
fn nav_footer_lines(ctx: &NavContext, lateral: bool, theme: &Theme) -> Vec<Line<'static>> {
  let mut lines = vec![Line::from(""), Line::from(Span::styled("─".repeat(60), Style::default().fg(theme.border)))];

  let marker = if lateral { "⟷ " } else { "" };
  lines.push(Line::from(Span::styled(
    format!("{}{} / {}", marker, pad2(ctx.current_index + 1), pad2(ctx.total)),
    Style::default().fg(theme.muted),
  )));
  lines.push(Line::from(""));

  match ctx.prev {
    Some(prev) => {
      let sub = prev.character_data.as_ref().map(|cd| cd.name_kr.as_str()).unwrap_or(prev.client.as_str());
      lines.push(Line::from(vec![
        Span::styled("◀ 이전 프로젝트  ", Style::default().fg(theme.muted)),
        Span::styled(prev.title.clone(), Style::default().fg(theme.fg).add_modifier(Modifier::ITALIC)),
        Span::styled(format!("  {} · {}", sub, prev.year), Style::default().fg(theme.muted)),
      ]));
    }
    None => {
      lines.push(Line::from(Span::styled("◀ 갤러리로 돌아가기", Style::default().fg(theme.muted))));
    }
  }
  match ctx.next {
    Some(next) => {
      let sub = next.character_data.as_ref().map(|cd| cd.name_kr.as_str()).unwrap_or(next.client.as_str());
      lines.push(Line::from(vec![
        Span::styled("▶ 다음 프로젝트  ", Style::default().fg(theme.muted)),
        Span::styled(next.title.clone(), Style::default().fg(theme.fg).add_modifier(Modifier::ITALIC)),
        Span::styled(format!("  {} · {}", sub, next.year), Style::default().fg(theme.muted)),
      ]));
    }
    None => {
      lines.push(Line::from(Span::styled("▶ 갤러리로 돌아가기", Style::default().fg(theme.muted))));
    }
  }

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled("[←] 이전   [→] 다음   [ESC] 닫기", Style::default().fg(theme.border))));
  lines
}

fn generic_detail_lines(
  project: &Project,
  ctx: &NavContext,
  lateral: bool,
  theme: &Theme,
  width: usize,
) -> Vec<Line<'static>> {
  let accent = accent_of(project, theme);
  let parsed: ParsedVideo = parse_video_url(&project.video_url);
  let thumbnail = project_thumbnail(project.image.as_deref(), &project.video_url);

  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      format!("PROJECT — {}", project.category_label),
      Style::default().fg(theme.muted),
    )),
    Line::from(""),
    styled_title(project, accent),
    Line::from(Span::styled(
      format!("{} · {} · {}", project.year, project.client, project.role),
      Style::default().fg(theme.muted),
    )),
    Line::from(""),
  ];

  // Video block: platform + ratio badges, then the playable reference.
  lines.push(Line::from(vec![
    Span::styled(format!(" ▶ {} ", parsed.platform.label()), Style::default().fg(theme.key_fg).bg(accent)),
    Span::styled(
      format!("  {} {}", project.aspect_ratio.tag(), project.aspect_ratio.label_kr()),
      Style::default().fg(theme.muted),
    ),
  ]));
  if !project.video_url.is_empty() {
    lines.push(Line::from(Span::styled(
      truncate_str(&parsed.embed_url, width),
      Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED),
    )));
  }
  if !thumbnail.is_empty() {
    lines.push(Line::from(Span::styled(truncate_str(&thumbnail, width), Style::default().fg(theme.border))));
  }
  lines.push(Line::from(""));

  for l in wrap_text(&project.description, width) {
    lines.push(Line::from(Span::styled(l, Style::default().fg(theme.fg))));
  }
  lines.push(Line::from(""));

  if !project.storyboard_images.is_empty() {
    lines.extend(section_header("STORYBOARD", "Storyboard", "스토리보드", accent, theme));
    for l in wrap_text(&project.storyboard_desc, width) {
      lines.push(Line::from(Span::styled(l, Style::default().fg(theme.muted))));
    }
    lines.push(Line::from(""));
    for (i, img) in project.storyboard_images.iter().enumerate() {
      lines.push(Line::from(vec![
        Span::styled(format!("{}  ", pad2(i + 1)), Style::default().fg(accent)),
        Span::styled(truncate_str(img, width.saturating_sub(4)), Style::default().fg(theme.muted)),
      ]));
    }
    lines.push(Line::from(""));
  }

  lines.push(meta_line("서체", &project.fonts, theme));
  lines.push(meta_line("역할", &project.role, theme));
  lines.push(meta_line("도구", &project.tools, theme));
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled("제작 과정", Style::default().fg(theme.muted))));
  for l in wrap_text(&project.process, width) {
    lines.push(Line::from(Span::styled(l, Style::default().fg(theme.fg))));
  }

  lines.extend(nav_footer_lines(ctx, lateral, theme));
  lines
}

fn character_detail_lines(
  project: &Project,
  cd: &CharacterData,
  ctx: &NavContext,
  lateral: bool,
  theme: &Theme,
  width: usize,
) -> Vec<Line<'static>> {
  let accent = accent_of(project, theme);

  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled("CHARACTER OVERVIEW", Style::default().fg(theme.muted))),
    Line::from(""),
    styled_title(project, accent),
    Line::from(Span::styled(cd.name_kr.clone(), Style::default().fg(theme.fg))),
    Line::from(Span::styled(
      format!("{} · {} · Designed by {}", project.year, project.client, cd.designer),
      Style::default().fg(theme.muted),
    )),
    Line::from(""),
    Line::from(Span::styled(format!("\"{}\"", cd.concept), Style::default().fg(theme.fg).add_modifier(Modifier::ITALIC))),
    Line::from(""),
    Line::from(Span::styled("캐릭터 스토리", Style::default().fg(theme.muted))),
  ];
  for l in wrap_text(&cd.story, width) {
    lines.push(Line::from(Span::styled(l, Style::default().fg(theme.fg))));
  }
  lines.push(Line::from(""));
  lines.push(meta_line("서체", &project.fonts, theme));
  lines.push(meta_line("제작 도구", &cd.tools, theme));
  lines.push(meta_line("카테고리", &format!("{} · {}", project.category_label, project.client), theme));

  // Sections are numbered dynamically: absent ones are skipped entirely.
  for (section, label) in cd.section_labels() {
    lines.extend(section_header(&label, section.title_en(), section.title_kr(), accent, theme));
    match section {
      SheetSection::Turnaround => {
        for (i, img) in cd.turnaround_images.iter().enumerate() {
          let name = cd.turnaround_labels.get(i).map(String::as_str).unwrap_or("");
          lines.push(Line::from(vec![
            Span::styled(format!("{}  ", pad2(i + 1)), Style::default().fg(accent)),
            Span::styled(format!("{:<12}", name), Style::default().fg(theme.fg)),
            Span::styled(truncate_str(img, width.saturating_sub(16)), Style::default().fg(theme.border)),
          ]));
        }
      }
      SheetSection::Breakdown => {
        if !cd.color_palette.is_empty() {
          lines.push(Line::from(Span::styled("컬러 팔레트", Style::default().fg(theme.muted))));
          for swatch in &cd.color_palette {
            let color = parse_hex(&swatch.hex).map(|(r, g, b)| Color::Rgb(r, g, b)).unwrap_or(theme.fg);
            lines.push(Line::from(vec![
              Span::styled("████  ", Style::default().fg(color)),
              Span::styled(format!("{:<16}", swatch.name), Style::default().fg(theme.fg)),
              Span::styled(format!("{:<12}", swatch.name_kr), Style::default().fg(theme.muted)),
              Span::styled(swatch.hex.clone(), Style::default().fg(theme.border)),
            ]));
          }
          lines.push(Line::from(""));
        }
        if !cd.design_features.is_empty() {
          lines.push(Line::from(Span::styled("디자인 특징", Style::default().fg(theme.muted))));
          for (i, feature) in cd.design_features.iter().enumerate() {
            lines.push(Line::from(vec![
              Span::styled(format!("{}  ", pad2(i + 1)), Style::default().fg(accent)),
              Span::styled(feature.label.clone(), Style::default().fg(theme.fg)),
              Span::styled(format!("  {}", feature.label_en), Style::default().fg(theme.muted)),
            ]));
            for l in wrap_text(&feature.desc, width.saturating_sub(4)) {
              lines.push(Line::from(Span::styled(format!("    {}", l), Style::default().fg(theme.muted))));
            }
          }
        }
      }
      SheetSection::Pose => {
        for (i, img) in cd.pose_images.iter().enumerate() {
          let name = cd.pose_labels.get(i).map(String::as_str).unwrap_or("");
          lines.push(Line::from(vec![
            Span::styled(format!("POSE_{}  ", pad2(i + 1)), Style::default().fg(accent)),
            Span::styled(format!("{:<12}", name), Style::default().fg(theme.fg)),
            Span::styled(truncate_str(img, width.saturating_sub(22)), Style::default().fg(theme.border)),
          ]));
        }
      }
      SheetSection::Usage => {
        for (i, img) in cd.usage_images.iter().enumerate() {
          let name = cd.usage_labels.get(i).map(String::as_str).unwrap_or("");
          lines.push(Line::from(vec![
            Span::styled(format!("{}  ", pad2(i + 1)), Style::default().fg(accent)),
            Span::styled(format!("{:<14}", name), Style::default().fg(theme.fg)),
            Span::styled("MOCKUP  ", Style::default().fg(theme.muted)),
            Span::styled(truncate_str(img, width.saturating_sub(28)), Style::default().fg(theme.border)),
          ]));
        }
      }
    }
  }

  // Project summary
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled("프로젝트 요약", Style::default().fg(theme.muted))));
  lines.push(meta_line("캐릭터명", &format!("{} · {}", project.title, cd.name_kr), theme));
  lines.push(meta_line("컬러 수", &format!("{}색 팔레트", cd.color_palette.len()), theme));
  lines.push(meta_line("턴어라운드", &format!("{}뷰", cd.turnaround_images.len()), theme));
  lines.push(meta_line("포즈 시트", &format!("{}포즈", cd.pose_images.len()), theme));
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled("제작 과정", Style::default().fg(theme.muted))));
  for l in wrap_text(&project.process, width) {
    lines.push(Line::from(Span::styled(l, Style::default().fg(theme.fg))));
  }

  lines.extend(nav_footer_lines(ctx, lateral, theme));
  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- wrap_text ---

  #[test]
  fn wrap_respects_width() {
    let lines = wrap_text("one two three four five six seven", 10);
    assert!(lines.len() > 1);
    for l in &lines {
      assert!(display_width(l) <= 10, "line too wide: {l:?}");
    }
  }

  #[test]
  fn wrap_breaks_overlong_words() {
    let lines = wrap_text("aaaaaaaaaaaaaaaaaaaa", 8);
    assert!(lines.len() >= 3);
  }

  #[test]
  fn wrap_handles_cjk_double_width() {
    let lines = wrap_text("시네마틱 스토리텔링과 디지털 아이덴티티", 12);
    for l in &lines {
      assert!(display_width(l) <= 12, "line too wide: {l:?}");
    }
  }

  #[test]
  fn wrap_empty_is_empty() {
    assert!(wrap_text("", 20).is_empty());
  }

  // --- truncate_str ---

  #[test]
  fn truncate_short_string_unchanged() {
    assert_eq!(truncate_str("hello", 10), "hello");
  }

  #[test]
  fn truncate_appends_ellipsis() {
    let t = truncate_str("a long string that overflows", 10);
    assert!(t.ends_with('…'));
    assert!(display_width(&t) <= 10);
  }

  #[test]
  fn truncate_accounts_for_cjk() {
    let t = truncate_str("캐릭터 디자인 아카이브", 8);
    assert!(display_width(&t) <= 8);
  }

  #[test]
  fn pad2_zero_pads() {
    assert_eq!(pad2(3), "03");
    assert_eq!(pad2(12), "12");
  }
}
