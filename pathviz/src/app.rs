//! The visualizer: editing state, input handling, and the main loop that
//! drives searches with a live-rendering observer.

use std::io;
use std::thread;
use std::time::Duration;

use pathviz_core::{Grid, Role, Tag};
use pathviz_search::{Algorithm, Outcome, SearchError, StepObserver};
use rand::Rng;

use crate::canvas::{Canvas, compute_frame};
use crate::config::Config;
use crate::driver::{Button, Input, Key, Terminal};
use crate::layout::{Hit, Layout};
use crate::style::{self, Color};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// The message shown under the menu buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Editing; the text hints at the next thing to place.
    Idle,
    Running(Algorithm),
    Found { moves: usize, closed: usize },
    NoSolution,
    Interrupted,
    MissingEndpoints,
    Walls(usize),
}

impl Status {
    pub fn text(&self, grid: &Grid) -> String {
        match self {
            Self::Idle if grid.start().is_none() => "Place the start".to_string(),
            Self::Idle if grid.end().is_none() => "Place the end".to_string(),
            Self::Idle => "Draw walls, then Run".to_string(),
            Self::Running(a) => format!("Running {a}..."),
            Self::Found { moves, closed } => format!("{moves} moves, {closed} closed"),
            Self::NoSolution => "No solution!".to_string(),
            Self::Interrupted => "Interrupted".to_string(),
            Self::MissingEndpoints => "Need a start and an end".to_string(),
            Self::Walls(n) => format!("Placed {n} walls"),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::NoSolution | Self::MissingEndpoints => style::NOTICE,
            Self::Found { .. } => style::PATH,
            _ => style::MENU_FG,
        }
    }
}

/// What the main loop should do after an input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Run,
    Quit,
}

// ---------------------------------------------------------------------------
// Visualizer
// ---------------------------------------------------------------------------

/// Board, menu selection and status; no terminal access.
pub struct Visualizer {
    grid: Grid,
    algorithm: Algorithm,
    status: Status,
    layout: Layout,
    density: f64,
}

impl Visualizer {
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.size),
            algorithm: config.algorithm,
            status: Status::Idle,
            layout: Layout::new(config.size, config.cell_width),
            density: config.barrier_density,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Apply one input.
    pub fn handle(&mut self, input: Input, rng: &mut impl Rng) -> Control {
        if input.is_quit() {
            return Control::Quit;
        }
        match input {
            Input::Key(key) => self.handle_key(key, rng),
            Input::Mouse { button, pos } => match (button, self.layout.hit(pos)) {
                (Button::Main, Hit::Cell(p)) => {
                    if let Ok(Some(role)) = self.grid.paint(p) {
                        log::trace!("painted {role} at {p}");
                        self.status = Status::Idle;
                    }
                    Control::Continue
                }
                (Button::Secondary, Hit::Cell(p)) => {
                    if self.grid.erase(p).unwrap_or(false) {
                        self.status = Status::Idle;
                    }
                    Control::Continue
                }
                (Button::Main, Hit::PrevAlgorithm) => self.select(self.algorithm.prev()),
                (Button::Main, Hit::NextAlgorithm) => self.select(self.algorithm.next()),
                (Button::Main, Hit::Run) => self.request_run(),
                (Button::Main, Hit::Clear) => self.clear(),
                (Button::Main, Hit::Reset) => self.reset(),
                _ => Control::Continue,
            },
            Input::Resize { .. } => Control::Continue,
        }
    }

    fn handle_key(&mut self, key: Key, rng: &mut impl Rng) -> Control {
        match key {
            Key::Char(' ') | Key::Enter => self.request_run(),
            Key::Char('c') => self.clear(),
            Key::Char('r') => self.reset(),
            Key::Char('g') => {
                self.grid.soft_clear();
                let n = self.grid.scatter_barriers(rng, self.density);
                self.status = Status::Walls(n);
                Control::Continue
            }
            Key::Tab | Key::ArrowRight => self.select(self.algorithm.next()),
            Key::BackTab | Key::ArrowLeft => self.select(self.algorithm.prev()),
            _ => Control::Continue,
        }
    }

    fn select(&mut self, algorithm: Algorithm) -> Control {
        self.algorithm = algorithm;
        log::debug!("selected {algorithm}");
        Control::Continue
    }

    fn request_run(&mut self) -> Control {
        if self.grid.start().is_some() && self.grid.end().is_some() {
            Control::Run
        } else {
            self.status = Status::MissingEndpoints;
            Control::Continue
        }
    }

    fn clear(&mut self) -> Control {
        self.grid.soft_clear();
        self.status = Status::Idle;
        Control::Continue
    }

    fn reset(&mut self) -> Control {
        self.grid.hard_reset();
        self.status = Status::Idle;
        Control::Continue
    }

    /// Run the selected algorithm, reporting every step to `observer`, and
    /// update the status line from the outcome.
    pub fn run_search(&mut self, observer: &mut dyn StepObserver) -> Result<Outcome, SearchError> {
        self.status = Status::Running(self.algorithm);
        let outcome = match pathviz_search::run(&mut self.grid, self.algorithm, observer) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.status = Status::MissingEndpoints;
                return Err(e);
            }
        };
        self.status = match &outcome {
            Outcome::PathFound { path } => Status::Found {
                moves: path.len() + 1,
                closed: self.grid.count_tag(Tag::Closed),
            },
            Outcome::NoPath => Status::NoSolution,
            Outcome::Interrupted => Status::Interrupted,
        };
        Ok(outcome)
    }

    /// Draw board and menu.
    pub fn draw(&self, canvas: &mut Canvas) {
        self.layout.draw(
            canvas,
            &self.grid,
            self.algorithm,
            &self.status.text(&self.grid),
            self.status.color(),
        );
    }

    /// Number of cells holding `role`.
    pub fn count_role(&self, role: Role) -> usize {
        self.grid.iter().filter(|c| c.role == role).count()
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Double-buffered canvas that only flushes what changed.
struct Screen {
    prev: Canvas,
    curr: Canvas,
}

impl Screen {
    fn new(layout: Layout) -> Self {
        Self {
            prev: Canvas::new(0, 0),
            curr: Canvas::new(layout.width(), layout.height()),
        }
    }

    /// Force the next present to redraw everything.
    fn invalidate(&mut self) {
        self.prev = Canvas::new(0, 0);
    }

    fn present(
        &mut self,
        term: &mut Terminal,
        draw: impl FnOnce(&mut Canvas),
    ) -> io::Result<()> {
        draw(&mut self.curr);
        let frame = compute_frame(&self.prev, &self.curr);
        if !frame.cells.is_empty() {
            term.flush(&frame)?;
        }
        self.prev.copy_from(&self.curr);
        Ok(())
    }
}

/// Observer that redraws the screen after every search step and watches
/// for quit keys.
struct LiveRender<'a> {
    term: &'a mut Terminal,
    screen: &'a mut Screen,
    layout: Layout,
    algorithm: Algorithm,
    status: String,
    delay: Duration,
    quit: bool,
    error: Option<io::Error>,
}

impl StepObserver for LiveRender<'_> {
    fn on_step(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        let (layout, algorithm, status) = (self.layout, self.algorithm, &self.status);
        let drawn = self.screen.present(self.term, |canvas| {
            layout.draw(canvas, grid, algorithm, status, style::MENU_FG)
        });
        if let Err(e) = drawn {
            self.error = Some(e);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn quit_requested(&mut self) -> bool {
        if !self.quit && self.error.is_none() {
            match self.term.quit_pending() {
                Ok(q) => self.quit = q,
                Err(e) => self.error = Some(e),
            }
        }
        self.quit || self.error.is_some()
    }
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

/// Run the interactive visualizer until the user quits.
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut vis = Visualizer::new(config);
    let mut term = Terminal::new();
    term.init()?;

    let (cols, rows) = term.size()?;
    let layout = vis.layout();
    if cols < layout.width() || rows < layout.height() {
        log::warn!(
            "terminal is {cols}x{rows}, visualizer needs {}x{}",
            layout.width(),
            layout.height()
        );
    }

    let result = event_loop(&mut vis, &mut term, config.step_delay);
    term.close();
    result
}

fn event_loop(
    vis: &mut Visualizer,
    term: &mut Terminal,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut screen = Screen::new(vis.layout());
    let mut rng = rand::rng();

    loop {
        screen.present(term, |canvas| vis.draw(canvas))?;

        let Some(input) = term.poll(Duration::from_millis(100))? else {
            continue;
        };
        if let Input::Resize { .. } = input {
            term.clear()?;
            screen.invalidate();
        }

        match vis.handle(input, &mut rng) {
            Control::Continue => {}
            Control::Quit => return Ok(()),
            Control::Run => {
                let mut live = LiveRender {
                    term: &mut *term,
                    screen: &mut screen,
                    layout: vis.layout(),
                    algorithm: vis.algorithm(),
                    status: Status::Running(vis.algorithm()).text(vis.grid()),
                    delay,
                    quit: false,
                    error: None,
                };
                vis.run_search(&mut live)?;
                if let Some(e) = live.error {
                    return Err(e.into());
                }
                if live.quit {
                    log::info!("quit during search");
                    return Ok(());
                }
            }
        }
    }
}
