//! Screen layout: where the board and the menu sit, how they are drawn, and
//! which element a mouse position lands on.

use pathviz_core::{Grid, Point};
use pathviz_search::Algorithm;

use crate::canvas::{Canvas, Glyph};
use crate::style::{self, AttrMask, Color, Style};

/// Columns taken by the menu panel.
pub const MENU_WIDTH: i32 = 22;

const ROW_TITLE: i32 = 0;
const ROW_ALGO_CAPTION: i32 = 2;
const ROW_ALGO: i32 = 3;
const ROW_RUN: i32 = 5;
const ROW_CLEAR: i32 = 7;
const ROW_RESET: i32 = 9;
const ROW_STATUS: i32 = 11;
const ROW_HELP: i32 = 14;

const HELP: [&str; 7] = [
    "left   paint",
    "right  erase",
    "space  run",
    "c / r  clear / reset",
    "tab    next algorithm",
    "g      random walls",
    "q      quit",
];

/// What a screen position refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    Cell(Point),
    PrevAlgorithm,
    NextAlgorithm,
    Run,
    Clear,
    Reset,
    Nothing,
}

/// Board and menu geometry for a given grid size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    size: i32,
    cell_width: i32,
}

impl Layout {
    pub fn new(size: i32, cell_width: i32) -> Self {
        Self {
            size: size.max(0),
            cell_width: cell_width.max(1),
        }
    }

    /// First column of the menu panel.
    #[inline]
    pub fn menu_col(&self) -> i32 {
        self.size * self.cell_width + 2
    }

    /// Terminal columns needed.
    pub fn width(&self) -> i32 {
        self.menu_col() + MENU_WIDTH
    }

    /// Terminal rows needed.
    pub fn height(&self) -> i32 {
        self.size.max(ROW_HELP + HELP.len() as i32)
    }

    /// Board cell under a screen position, if any.
    pub fn cell_at(&self, screen: Point) -> Option<Point> {
        if screen.row < 0 || screen.col < 0 {
            return None;
        }
        let p = Point::new(screen.row, screen.col / self.cell_width);
        (p.row < self.size && p.col < self.size).then_some(p)
    }

    /// Element under a screen position.
    pub fn hit(&self, screen: Point) -> Hit {
        if let Some(p) = self.cell_at(screen) {
            return Hit::Cell(p);
        }
        let x = screen.col - self.menu_col();
        if !(0..MENU_WIDTH).contains(&x) {
            return Hit::Nothing;
        }
        match screen.row {
            ROW_ALGO if x < 3 => Hit::PrevAlgorithm,
            ROW_ALGO if x >= MENU_WIDTH - 3 => Hit::NextAlgorithm,
            ROW_RUN => Hit::Run,
            ROW_CLEAR => Hit::Clear,
            ROW_RESET => Hit::Reset,
            _ => Hit::Nothing,
        }
    }

    /// Draw the whole screen.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        grid: &Grid,
        algorithm: Algorithm,
        status: &str,
        status_color: Color,
    ) {
        canvas.fill(Glyph::default());
        self.draw_board(canvas, grid);
        self.draw_menu(canvas, algorithm, status, status_color);
    }

    fn draw_board(&self, canvas: &mut Canvas, grid: &Grid) {
        for cell in grid.iter() {
            let bg = style::cell_color(cell);
            let (ch, fg) = if bg == style::FREE {
                ('\u{b7}', style::GRID_LINE)
            } else {
                (' ', bg)
            };
            let st = Style::default().with_fg(fg).with_bg(bg);
            for dx in 0..self.cell_width {
                let glyph = if dx == 0 { ch } else { ' ' };
                canvas.set(
                    Point::new(cell.pos.row, cell.pos.col * self.cell_width + dx),
                    Glyph::new(glyph, st),
                );
            }
        }
    }

    fn draw_menu(&self, canvas: &mut Canvas, algorithm: Algorithm, status: &str, status_color: Color) {
        let x = self.menu_col();
        let panel = Style::default().with_fg(style::MENU_FG).with_bg(style::MENU_BG);
        for row in 0..self.height() {
            for dx in 0..MENU_WIDTH {
                canvas.set(Point::new(row, x + dx), Glyph::new(' ', panel));
            }
        }

        let bold = panel.with_attrs(AttrMask::BOLD);
        canvas.text(Point::new(ROW_TITLE, x + 1), "PATH FINDING", bold);
        canvas.text(Point::new(ROW_ALGO_CAPTION, x + 1), "Algorithm", panel);

        let button = Style::default()
            .with_fg(style::MENU_FG)
            .with_bg(style::BUTTON_BG)
            .with_attrs(AttrMask::BOLD);
        canvas.text(Point::new(ROW_ALGO, x), " < ", button);
        canvas.text(Point::new(ROW_ALGO, x + MENU_WIDTH - 3), " > ", button);
        let label = algorithm.label();
        let pad = (MENU_WIDTH - label.len() as i32) / 2;
        canvas.text(Point::new(ROW_ALGO, x + pad), label, bold);

        for (row, text) in [(ROW_RUN, "Run"), (ROW_CLEAR, "Clear"), (ROW_RESET, "Reset")] {
            let padded = format!("{text:^w$}", w = (MENU_WIDTH - 2) as usize);
            canvas.text(Point::new(row, x + 1), &padded, button);
        }

        canvas.text(
            Point::new(ROW_STATUS, x + 1),
            status,
            panel.with_fg(status_color),
        );

        for (i, line) in HELP.iter().enumerate() {
            canvas.text(Point::new(ROW_HELP + i as i32, x + 1), line, panel);
        }
    }
}
