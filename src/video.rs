//! Video reference classification and thumbnail derivation.
//!
//! Project records carry a free-form video reference string. Recognized
//! shapes are YouTube links (watch pages, youtu.be short links, shorts) and
//! Vimeo numeric links; anything else passes through as a directly playable
//! resource. Everything here is a pure function over the input string.

use serde::Deserialize;

/// Platform a video reference resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  YouTube,
  Vimeo,
  Direct,
}

impl Platform {
  pub fn label(self) -> &'static str {
    match self {
      Platform::YouTube => "YouTube",
      Platform::Vimeo => "Vimeo",
      Platform::Direct => "Video",
    }
  }
}

/// A video reference resolved into platform, embeddable form, and thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVideo {
  pub platform: Platform,
  pub video_id: String,
  pub embed_url: String,
  /// Derived preview image, when the platform allows deriving one without a
  /// network lookup (YouTube only; Vimeo requires an API call).
  pub thumbnail_url: Option<String>,
  pub is_short: bool,
}

/// Extract the 11-character YouTube video id that follows `marker` in `url`.
///
/// Ids are exactly 11 chars drawn from `[A-Za-z0-9_-]`; anything shorter
/// after the marker is not a valid reference.
fn youtube_id_after(url: &str, marker: &str) -> Option<String> {
  let start = url.find(marker)? + marker.len();
  let id: String =
    url[start..].chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-').take(11).collect();
  if id.chars().count() == 11 { Some(id) } else { None }
}

/// Extract the numeric Vimeo id that follows `vimeo.com/` in `url`.
fn vimeo_id(url: &str) -> Option<String> {
  let start = url.find("vimeo.com/")? + "vimeo.com/".len();
  let id: String = url[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
  if id.is_empty() { None } else { Some(id) }
}

fn youtube_video(id: String, is_short: bool) -> ParsedVideo {
  ParsedVideo {
    embed_url: format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", id),
    thumbnail_url: Some(format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id)),
    platform: Platform::YouTube,
    video_id: id,
    is_short,
  }
}

/// Classify a video reference string.
///
/// Checked in priority order: shorts and youtu.be links first (their patterns
/// are stricter subsets of the watch-page shape), then standard watch links,
/// then Vimeo. Unrecognized input is treated as a direct playable resource
/// with the embed reference equal to the input.
pub fn parse_video_url(url: &str) -> ParsedVideo {
  if let Some(id) = youtube_id_after(url, "youtube.com/shorts/") {
    return youtube_video(id, true);
  }

  if let Some(id) = youtube_id_after(url, "youtu.be/").or_else(|| youtube_id_after(url, "youtube.com/watch?v=")) {
    return youtube_video(id, false);
  }

  if let Some(id) = vimeo_id(url) {
    return ParsedVideo {
      embed_url: format!("https://player.vimeo.com/video/{}?autoplay=1&title=0&byline=0&portrait=0", id),
      thumbnail_url: None,
      platform: Platform::Vimeo,
      video_id: id,
      is_short: false,
    };
  }

  ParsedVideo {
    platform: Platform::Direct,
    video_id: String::new(),
    embed_url: url.to_string(),
    thumbnail_url: None,
    is_short: false,
  }
}

/// Resolve the best available thumbnail reference for a project.
///
/// Precedence: explicit image field, then derivation from the video
/// reference, then empty (callers render a placeholder).
pub fn project_thumbnail(image: Option<&str>, video_url: &str) -> String {
  if let Some(img) = image
    && !img.is_empty()
  {
    return img.to_string();
  }
  if !video_url.is_empty()
    && let Some(thumb) = parse_video_url(video_url).thumbnail_url
  {
    return thumb;
  }
  String::new()
}

// --- Aspect ratios ---

/// Aspect-ratio tag used for card sizing in the gallery strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AspectRatio {
  Wide,
  Vertical,
  Portrait,
  Square,
  Classic,
  Ultrawide,
}

impl AspectRatio {
  /// Numeric width / height value.
  pub fn value(self) -> f32 {
    match self {
      AspectRatio::Wide => 16.0 / 9.0,
      AspectRatio::Vertical => 9.0 / 16.0,
      AspectRatio::Portrait => 4.0 / 5.0,
      AspectRatio::Square => 1.0,
      AspectRatio::Classic => 4.0 / 3.0,
      AspectRatio::Ultrawide => 21.0 / 9.0,
    }
  }

  /// The `W:H` tag as displayed in badges.
  pub fn tag(self) -> &'static str {
    match self {
      AspectRatio::Wide => "16:9",
      AspectRatio::Vertical => "9:16",
      AspectRatio::Portrait => "4:5",
      AspectRatio::Square => "1:1",
      AspectRatio::Classic => "4:3",
      AspectRatio::Ultrawide => "21:9",
    }
  }

  /// Korean display label.
  pub fn label_kr(self) -> &'static str {
    match self {
      AspectRatio::Wide => "가로형",
      AspectRatio::Vertical => "세로형",
      AspectRatio::Portrait => "포트레이트",
      AspectRatio::Square => "정방형",
      AspectRatio::Classic => "클래식",
      AspectRatio::Ultrawide => "울트라와이드",
    }
  }

  /// Card width in the gallery strip, scaled from the base card width.
  /// Height is constant; width varies with the ratio.
  pub fn card_cols(self, base: u16) -> u16 {
    let weight = match self {
      AspectRatio::Vertical => 0.55,
      AspectRatio::Portrait => 0.70,
      AspectRatio::Square => 0.80,
      AspectRatio::Classic => 0.90,
      AspectRatio::Wide => 1.0,
      AspectRatio::Ultrawide => 1.25,
    };
    ((base as f32 * weight).round() as u16).max(12)
  }
}
