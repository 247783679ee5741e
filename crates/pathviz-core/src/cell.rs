//! The [`Cell`] type: one grid position with a role and a visitation tag.

use std::fmt;

use crate::geom::Point;

/// Persistent meaning of a cell, set by the user.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Free,
    Barrier,
    Start,
    End,
}

impl Role {
    /// Layout character used by [`Grid::from_ascii`](crate::Grid::from_ascii).
    pub const fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Role::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Barrier),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Free => "free",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(s)
    }
}

/// Transient search-visualization state. Only a running strategy sets it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    #[default]
    None,
    Open,
    Closed,
    Path,
}

impl Tag {
    /// Character shown for a tagged free cell in ASCII dumps.
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Open => Some('o'),
            Self::Closed => Some('x'),
            Self::Path => Some('*'),
        }
    }
}

/// A single grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub role: Role,
    pub tag: Tag,
}

impl Cell {
    /// A free, untagged cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            role: Role::Free,
            tag: Tag::None,
        }
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        !self.is_barrier()
    }

    /// Character for ASCII dumps: the tag on free cells, otherwise the role.
    pub fn glyph(&self) -> char {
        match (self.role, self.tag.glyph()) {
            (Role::Free, Some(ch)) => ch,
            (role, _) => role.glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_free_and_untagged() {
        let c = Cell::new(Point::new(1, 2));
        assert_eq!(c.role, Role::Free);
        assert_eq!(c.tag, Tag::None);
        assert!(c.is_walkable());
    }

    #[test]
    fn barrier_is_not_walkable() {
        let mut c = Cell::new(Point::ZERO);
        c.role = Role::Barrier;
        assert!(!c.is_walkable());
    }

    #[test]
    fn glyph_round_trip() {
        for role in [Role::Free, Role::Barrier, Role::Start, Role::End] {
            assert_eq!(Role::from_glyph(role.glyph()), Some(role));
        }
        assert_eq!(Role::from_glyph('?'), None);
    }

    #[test]
    fn glyph_prefers_role_over_tag() {
        let mut c = Cell::new(Point::ZERO);
        c.tag = Tag::Path;
        assert_eq!(c.glyph(), '*');
        c.role = Role::Start;
        assert_eq!(c.glyph(), 'S');
    }
}
