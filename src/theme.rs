use ratatui::style::Color;

/// A named color theme for the whole UI.
pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub accent: Color,
  pub muted: Color,
  pub border: Color,
  pub status: Color,
  pub error: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub key_fg: Color,
  pub key_bg: Color,
}

pub static THEMES: [Theme; 3] = [
  // The site palette: warm cream on near-black.
  Theme {
    name: "film",
    bg: Color::Rgb(15, 15, 15),
    fg: Color::Rgb(229, 224, 213),
    accent: Color::Rgb(201, 169, 110),
    muted: Color::Rgb(110, 106, 98),
    border: Color::Rgb(58, 56, 52),
    status: Color::Rgb(139, 154, 126),
    error: Color::Rgb(224, 124, 90),
    highlight_fg: Color::Rgb(15, 15, 15),
    highlight_bg: Color::Rgb(229, 224, 213),
    stripe_bg: Color::Rgb(20, 20, 20),
    key_fg: Color::Rgb(15, 15, 15),
    key_bg: Color::Rgb(201, 169, 110),
  },
  Theme {
    name: "midnight",
    bg: Color::Rgb(13, 17, 23),
    fg: Color::Rgb(201, 209, 217),
    accent: Color::Rgb(126, 184, 218),
    muted: Color::Rgb(99, 110, 123),
    border: Color::Rgb(48, 54, 61),
    status: Color::Rgb(87, 171, 90),
    error: Color::Rgb(248, 81, 73),
    highlight_fg: Color::Rgb(13, 17, 23),
    highlight_bg: Color::Rgb(126, 184, 218),
    stripe_bg: Color::Rgb(22, 27, 34),
    key_fg: Color::Rgb(13, 17, 23),
    key_bg: Color::Rgb(126, 184, 218),
  },
  Theme {
    name: "paper",
    bg: Color::Rgb(250, 247, 240),
    fg: Color::Rgb(43, 40, 36),
    accent: Color::Rgb(166, 124, 64),
    muted: Color::Rgb(150, 144, 134),
    border: Color::Rgb(214, 208, 196),
    status: Color::Rgb(106, 132, 94),
    error: Color::Rgb(191, 79, 54),
    highlight_fg: Color::Rgb(250, 247, 240),
    highlight_bg: Color::Rgb(43, 40, 36),
    stripe_bg: Color::Rgb(243, 239, 230),
    key_fg: Color::Rgb(250, 247, 240),
    key_bg: Color::Rgb(166, 124, 64),
  },
];
