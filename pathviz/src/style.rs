//! Visual styling: [`Color`], [`AttrMask`], [`Style`] and the palette.

use std::ops::BitOr;

use pathviz_core::{Cell, Role, Tag};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's default colour.
    pub const DEFAULT: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AttrMask(pub u32);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const REVERSE: Self = Self(1 << 1);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground, background and attributes of one screen cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_attrs(mut self, attrs: AttrMask) -> Self {
        self.attrs = attrs;
        self
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

pub const FREE: Color = Color::from_rgb(255, 255, 255);
pub const BARRIER: Color = Color::from_rgb(50, 50, 50);
pub const START: Color = Color::from_rgb(126, 217, 87);
pub const END: Color = Color::from_rgb(255, 165, 0);
pub const OPEN: Color = Color::from_rgb(197, 114, 255);
pub const CLOSED: Color = Color::from_rgb(64, 206, 227);
pub const PATH: Color = Color::from_rgb(255, 254, 106);
pub const GRID_LINE: Color = Color::from_rgb(175, 216, 248);
pub const MENU_BG: Color = Color::from_rgb(30, 30, 50);
pub const MENU_FG: Color = Color::from_rgb(220, 220, 230);
pub const BUTTON_BG: Color = Color::from_rgb(70, 90, 140);
pub const NOTICE: Color = Color::from_rgb(255, 120, 120);

/// Background colour for a board cell: the role wins over the tag except on
/// free cells.
pub fn cell_color(cell: &Cell) -> Color {
    match cell.role {
        Role::Barrier => BARRIER,
        Role::Start => START,
        Role::End => END,
        Role::Free => match cell.tag {
            Tag::None => FREE,
            Tag::Open => OPEN,
            Tag::Closed => CLOSED,
            Tag::Path => PATH,
        },
    }
}
