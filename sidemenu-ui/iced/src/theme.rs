use iced::widget::container;
use iced::{Background, Border, Color};
use sidemenu::MenuRow;

const DEFAULT_THEME: &str = "default";
const WHITE_THEME: &str = "white";

/// Colors used to paint a side menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTheme {
    pub background: Color,
    pub foreground: Color,
    pub active_background: Color,
    pub active_foreground: Color,
    pub nested_background: Color,
    pub divider_foreground: Color,
    pub border: Color,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl MenuTheme {
    /// Dark palette used by the `"default"` theme.
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x16, 0x18, 0x22),
            foreground: Color::from_rgb8(0xC0, 0xC5, 0xCE),
            active_background: Color::from_rgb8(0x2F, 0x63, 0x8F),
            active_foreground: Color::from_rgb8(0xEC, 0xEF, 0xF4),
            nested_background: Color::from_rgb8(0x23, 0x25, 0x30),
            divider_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            border: Color::from_rgb8(0x0F, 0x11, 0x15),
        }
    }

    /// Light palette used by the `"white"` theme.
    pub fn white() -> Self {
        Self {
            background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            foreground: Color::from_rgb8(0x33, 0x3A, 0x45),
            active_background: Color::from_rgb8(0xE4, 0xEE, 0xF9),
            active_foreground: Color::from_rgb8(0x1F, 0x5F, 0xA8),
            nested_background: Color::from_rgb8(0xF5, 0xF6, 0xF8),
            divider_foreground: Color::from_rgb8(0x9A, 0xA1, 0xAC),
            border: Color::from_rgb8(0xDD, 0xE1, 0xE6),
        }
    }

    /// Palette for a configured theme name.
    ///
    /// Unknown names fall back to the default palette.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            DEFAULT_THEME => Self::dark(),
            WHITE_THEME => Self::white(),
            other => {
                log::warn!("unknown menu theme {other:?}, using default");
                Self::dark()
            },
        }
    }
}

/// Style of the whole menu panel.
pub fn menu_style(theme: &MenuTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.background)),
        text_color: Some(theme.foreground),
        border: Border {
            color: theme.border,
            width: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style of a single realized row.
pub fn row_style(theme: &MenuTheme, row: &MenuRow) -> container::Style {
    if row.divider {
        return container::Style {
            text_color: Some(theme.divider_foreground),
            ..Default::default()
        };
    }

    let (background, text_color) = if row.active {
        (theme.active_background, theme.active_foreground)
    } else if row.level > 1 {
        (theme.nested_background, theme.foreground)
    } else {
        (theme.background, theme.foreground)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}
