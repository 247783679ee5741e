//! The [`Grid`] type: an N×N board of [`Cell`]s.
//!
//! The grid owns cell roles (what the user painted) and cell tags (what the
//! last search marked). It also keeps a per-cell *neighbor snapshot* that
//! search strategies read; the snapshot is only valid until the next barrier
//! edit, so [`update_neighbors`](Grid::update_neighbors) must be called after
//! editing and before searching. [`is_stale`](Grid::is_stale) reports whether
//! that has happened.

use std::fmt;

use crate::cell::{Cell, Role, Tag};
use crate::error::GridError;
use crate::geom::Point;

/// A square grid of cells with at most one Start and one End.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<Point>>,
    start: Option<Point>,
    end: Option<Point>,
    stale: bool,
}

impl Grid {
    /// Create a `size`×`size` grid of free cells.
    ///
    /// The neighbor snapshot starts out empty and stale.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let len = (size as usize) * (size as usize);
        let cells = (0..len)
            .map(|i| Cell::new(Point::new(i as i32 / size, i as i32 % size)))
            .collect();
        Self {
            size,
            cells,
            neighbors: vec![Vec::new(); len],
            start: None,
            end: None,
            stale: true,
        }
    }

    /// Cells per side.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside `[0, size)` on both axes.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.size && p.col < self.size
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.size as usize + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let n = self.size as usize;
        Point::new((idx / n) as i32, (idx % n) as i32)
    }

    /// The cell at `p`, if in range.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn role(&self, p: Point) -> Option<Role> {
        self.cell(p).map(|c| c.role)
    }

    #[inline]
    pub fn tag(&self, p: Point) -> Option<Tag> {
        self.cell(p).map(|c| c.tag)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Position of the Start cell, if one is set.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the End cell, if one is set.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Number of cells currently carrying `tag`.
    pub fn count_tag(&self, tag: Tag) -> usize {
        self.cells.iter().filter(|c| c.tag == tag).count()
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Compute the walkable orthogonal neighbours of `p` from the current
    /// roles. Out-of-range positions yield nothing.
    pub fn neighbors_of(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        if !self.contains(p) {
            return buf;
        }
        for n in p.neighbors_4() {
            if self.cell(n).is_some_and(Cell::is_walkable) {
                buf.push(n);
            }
        }
        buf
    }

    /// Rebuild the neighbor snapshot of every cell.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.point(i);
            self.neighbors[i] = self.neighbors_of(p);
        }
        self.stale = false;
        log::debug!("rebuilt neighbor snapshot for {}x{} grid", self.size, self.size);
    }

    /// Snapshot neighbours of `p` as of the last
    /// [`update_neighbors`](Grid::update_neighbors).
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.idx(p) {
            Some(i) => &self.neighbors[i],
            None => &[],
        }
    }

    /// Whether a barrier changed since the last snapshot rebuild.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // -----------------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------------

    /// Give the cell at `p` a new role. Returns whether anything changed.
    ///
    /// - Start/End on a cell holding the other endpoint role is a no-op.
    /// - Start/End when that endpoint already exists elsewhere moves it; the
    ///   old cell becomes free.
    /// - Barrier on an endpoint is a no-op.
    ///
    /// Any change resets the cell's tag.
    pub fn set_role(&mut self, p: Point, role: Role) -> Result<bool, GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        let current = self.cells[i].role;
        if current == role {
            return Ok(false);
        }
        let endpoint = |r: Role| matches!(r, Role::Start | Role::End);
        if endpoint(current) && (endpoint(role) || role == Role::Barrier) {
            return Ok(false);
        }

        match current {
            Role::Start => self.start = None,
            Role::End => self.end = None,
            Role::Barrier => self.stale = true,
            Role::Free => {}
        }
        match role {
            Role::Start => {
                if let Some(old) = self.start.replace(p) {
                    self.put(old, Role::Free);
                }
            }
            Role::End => {
                if let Some(old) = self.end.replace(p) {
                    self.put(old, Role::Free);
                }
            }
            Role::Barrier => self.stale = true,
            Role::Free => {}
        }
        self.put(p, role);
        log::trace!("cell {p}: {current} -> {role}");
        Ok(true)
    }

    fn put(&mut self, p: Point, role: Role) {
        if let Some(i) = self.idx(p) {
            self.cells[i].role = role;
            self.cells[i].tag = Tag::None;
        }
    }

    /// Primary paint action: the first click places Start, the next places
    /// End, every later click on another cell places a Barrier.
    ///
    /// Returns the role that was applied, or `None` if nothing changed.
    pub fn paint(&mut self, p: Point) -> Result<Option<Role>, GridError> {
        let cell = *self.cell(p).ok_or(GridError::OutOfBounds(p))?;
        let role = if self.start.is_none() && !cell.is_end() {
            Role::Start
        } else if self.end.is_none() && !cell.is_start() {
            Role::End
        } else if !cell.is_start() && !cell.is_end() {
            Role::Barrier
        } else {
            return Ok(None);
        };
        Ok(self.set_role(p, role)?.then_some(role))
    }

    /// Secondary paint action: make the cell free again, forgetting it as an
    /// endpoint if it was one.
    pub fn erase(&mut self, p: Point) -> Result<bool, GridError> {
        self.set_role(p, Role::Free)
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    /// Tag the cell at `p`. Barriers and out-of-range positions are never
    /// tagged; returns whether the tag was applied.
    pub fn set_tag(&mut self, p: Point, tag: Tag) -> bool {
        match self.idx(p) {
            Some(i) if self.cells[i].is_walkable() => {
                self.cells[i].tag = tag;
                true
            }
            _ => false,
        }
    }

    /// Drop whatever tag a search left on the Start and End cells so they
    /// show as their role again.
    pub fn clear_endpoint_tags(&mut self) {
        for p in [self.start, self.end].into_iter().flatten() {
            if let Some(i) = self.idx(p) {
                self.cells[i].tag = Tag::None;
            }
        }
    }

    /// Erase all search tags. Roles (Start, End, Barrier) are kept.
    pub fn soft_clear(&mut self) {
        for c in self.cells.iter_mut() {
            c.tag = Tag::None;
        }
        log::debug!("soft clear");
    }

    /// Replace the grid with a fresh all-free one of the same size. Start
    /// and End are forgotten.
    pub fn hard_reset(&mut self) {
        *self = Grid::new(self.size);
        log::debug!("hard reset to {}x{}", self.size, self.size);
    }

    // -----------------------------------------------------------------------
    // ASCII layouts
    // -----------------------------------------------------------------------

    /// Parse a square layout: `.` free, `#` barrier, `S` start, `E` end.
    ///
    /// Surrounding whitespace on each line is ignored, as are blank lines.
    pub fn from_ascii(layout: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        let n = rows.len();
        let mut grid = Grid::new(n as i32);
        for (r, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != n {
                return Err(GridError::NotSquare {
                    row: r,
                    len,
                    expected: n,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Point::new(r as i32, c as i32);
                let role = Role::from_glyph(ch).ok_or(GridError::InvalidRune { ch, pos })?;
                let taken = match role {
                    Role::Start => grid.start.is_some(),
                    Role::End => grid.end.is_some(),
                    _ => false,
                };
                if taken {
                    return Err(GridError::DuplicateEndpoint { role, pos });
                }
                grid.set_role(pos, role)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
