//! Line-oriented editor loop. Each input line is one user gesture on the
//! chart: clicking a seat, typing into the form, dragging, drawing.
use crate::config::Config;
use crate::core::dragdrop::Transposer;
use crate::core::grid::{Grid, parse_dimension};
use crate::core::keys::SketchTarget;
use crate::core::reset::ResetLogic;
use crate::core::session::EditorSession;
use crate::core::shuffle::ShuffleLogic;
use crate::core::sketch::SketchSurface;
use crate::db::log::sclog_quiet;
use crate::db::store::SeatStore;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::Attendance;
use crate::models::color::SeatColor;
use crate::models::position::Position;
use crate::utils::grid_view::{render_details, render_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  show [details]          print the grid
  generate ROWS COLS      rebuild the grid (unsaved edits are lost)
  open POS                edit seat POS (e.g. 1-2)
  name TEXT | memo TEXT   set a form field
  color HEX|INDEX         set the color (#rrggbb or palette 0-9)
  attendance LABEL        present, absent or other
  save | cancel           close the editor
  drag POS | drop POS     move name, memo and color between seats
  shuffle                 randomize name, memo and color
  down X Y | move X Y     draw on the open seat's sketch
  up | leave | clear
  main down X Y ...       same, on the main sketch
  reset yes               erase every seat and sketch
  help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Down(i32, i32),
    Move(i32, i32),
    Up,
    Leave,
    Clear,
}

impl Pointer {
    fn parse(cmd: &str, args: &str) -> AppResult<Option<Self>> {
        Ok(Some(match cmd {
            "down" => {
                let (x, y) = parse_xy(args)?;
                Pointer::Down(x, y)
            }
            "move" => {
                let (x, y) = parse_xy(args)?;
                Pointer::Move(x, y)
            }
            "up" => Pointer::Up,
            "leave" => Pointer::Leave,
            "clear" => Pointer::Clear,
            _ => return Ok(None),
        }))
    }
}

/// `X Y` or `X,Y`.
fn parse_xy(args: &str) -> AppResult<(i32, i32)> {
    let invalid = || AppError::InvalidPoint(args.to_string());
    let normalized = args.replace(',', " ");
    let mut it = normalized.split_whitespace();
    let x = it.next().and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
    let y = it.next().and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
    if it.next().is_some() {
        return Err(invalid());
    }
    Ok((x, y))
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    }
}

pub struct Shell<W: Write> {
    store: SeatStore,
    grid: Grid,
    session: EditorSession,
    transposer: Transposer,
    main: SketchSurface,
    rng: StdRng,
    colored: bool,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(
        store: SeatStore,
        cfg: &Config,
        rows: usize,
        cols: usize,
        out: W,
    ) -> AppResult<Self> {
        let grid = Grid::build(&store, rows, cols)?;
        let mut main = SketchSurface::new(cfg.canvas_width, cfg.canvas_height, None);
        main.load(&store, SketchTarget::Main)?;

        Ok(Self {
            store,
            grid,
            session: EditorSession::from_config(cfg),
            transposer: Transposer::new(),
            main,
            rng: StdRng::from_os_rng(),
            colored: false,
            out,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Execute every line of `input` until EOF or `quit`. A failing line is
    /// reported and the loop goes on.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> AppResult<()> {
        if prompt {
            writeln!(self.out, "seatchart shell, type `help` for commands")?;
        }

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(self.out, "error: {}", e)?,
            }
            if prompt {
                write!(self.out, "> ")?;
            }
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let (cmd, args) = split_command(line);
        match cmd {
            "help" => writeln!(self.out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "show" => self.show(args == "details")?,
            "generate" => self.generate(args)?,
            "open" => self.open(args)?,
            "name" => self.session.set_name(args)?,
            "memo" => self.session.set_memo(args)?,
            "color" => self.session.set_color(args.parse::<SeatColor>()?)?,
            "attendance" => self.session.set_attendance(args.parse::<Attendance>()?)?,
            "save" => self.save()?,
            "cancel" => self.cancel()?,
            "drag" => self.drag(args)?,
            "drop" => self.drop_on(args)?,
            "shuffle" => self.shuffle()?,
            "reset" => self.reset(args)?,
            "main" => {
                let (sub, sub_args) = split_command(args);
                let pointer = Pointer::parse(sub, sub_args)?
                    .ok_or_else(|| AppError::UnknownCommand(format!("main {}", sub)))?;
                self.main_pointer(pointer)?;
            }
            other => match Pointer::parse(other, args)? {
                Some(pointer) => self.seat_pointer(pointer)?,
                None => return Err(AppError::UnknownCommand(other.to_string())),
            },
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, details: bool) -> AppResult<()> {
        let rendered = if details {
            let mut with_sketch = Vec::with_capacity(self.grid.len());
            for pos in self.grid.positions() {
                with_sketch.push(self.store.load_sketch(SketchTarget::Seat(pos))?.is_some());
            }
            render_details(&self.grid, &with_sketch, self.colored)
        } else {
            render_grid(&self.grid, self.colored)
        };
        write!(self.out, "{}", rendered)?;
        Ok(())
    }

    fn generate(&mut self, args: &str) -> AppResult<()> {
        let mut it = args.split_whitespace();
        let rows = parse_dimension(it.next().unwrap_or(""));
        let cols = parse_dimension(it.next().unwrap_or(""));

        self.grid = Grid::build(&self.store, rows, cols)?;
        self.session.close();
        writeln!(
            self.out,
            "generated {}×{} seats",
            self.grid.rows(),
            self.grid.cols()
        )?;
        Ok(())
    }

    fn open(&mut self, args: &str) -> AppResult<()> {
        let pos: Position = args.parse()?;
        self.session.open(&self.grid, &self.store, pos)?;

        if let Some(form) = self.session.form() {
            writeln!(
                self.out,
                "editing {}: name={:?} memo={:?} color={} attendance={}",
                pos, form.name, form.memo, form.color, form.attendance
            )?;
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        match self.session.save(&mut self.grid, &mut self.store)? {
            Some(pos) => {
                sclog_quiet(self.store.conn(), "edit", &pos.to_string(), "Seat saved");
                writeln!(self.out, "saved {}", pos)?;
            }
            None => writeln!(self.out, "no seat is open")?,
        }
        Ok(())
    }

    fn cancel(&mut self) -> AppResult<()> {
        match self.session.cancel(&mut self.store)? {
            Some(pos) => writeln!(self.out, "closed {} without saving", pos)?,
            None => writeln!(self.out, "no seat is open")?,
        }
        Ok(())
    }

    fn drag(&mut self, args: &str) -> AppResult<()> {
        let pos: Position = args.parse()?;
        self.grid.require(pos)?;
        self.transposer.drag_start(pos);
        Ok(())
    }

    fn drop_on(&mut self, args: &str) -> AppResult<()> {
        let target: Position = args.parse()?;
        let source = self.transposer.dragged();

        if self
            .transposer
            .drop_on(&mut self.grid, &mut self.store, target)?
            && let Some(source) = source
        {
            writeln!(self.out, "swapped {} and {}", source, target)?;
        } else {
            writeln!(self.out, "nothing moved")?;
        }
        Ok(())
    }

    fn shuffle(&mut self) -> AppResult<()> {
        ShuffleLogic::apply(&mut self.grid, &mut self.store, &mut self.rng)?;
        writeln!(self.out, "shuffled {} seats", self.grid.len())?;
        Ok(())
    }

    fn reset(&mut self, args: &str) -> AppResult<()> {
        if args != "yes" {
            writeln!(
                self.out,
                "this erases every seat and sketch in '{}'; type `reset yes` to confirm",
                self.store.namespace()
            )?;
            return Ok(());
        }

        let outcome = ResetLogic::apply(&mut self.store, self.grid.rows(), self.grid.cols())?;
        self.grid = outcome.grid;
        self.session.discard();
        self.main.wipe();
        writeln!(self.out, "removed {} keys", outcome.removed)?;
        Ok(())
    }

    fn seat_pointer(&mut self, pointer: Pointer) -> AppResult<()> {
        let store = &mut self.store;
        let active = match pointer {
            Pointer::Down(x, y) => {
                if !self.session.is_open() {
                    writeln!(self.out, "no seat is open; the stroke is dropped")?;
                }
                self.session.pointer_down(x, y);
                true
            }
            Pointer::Move(x, y) => self.session.pointer_move(store, x, y)?,
            Pointer::Up => self.session.pointer_up(store)?,
            Pointer::Leave => self.session.pointer_leave(store)?,
            Pointer::Clear => {
                self.session.clear_sketch(store)?;
                true
            }
        };
        self.report_stroke(active)
    }

    fn main_pointer(&mut self, pointer: Pointer) -> AppResult<()> {
        let store = &mut self.store;
        let active = match pointer {
            Pointer::Down(x, y) => {
                self.main.pointer_down(x, y);
                true
            }
            Pointer::Move(x, y) => self.main.pointer_move(store, x, y)?,
            Pointer::Up => self.main.pointer_up(store)?,
            Pointer::Leave => self.main.pointer_leave(store)?,
            Pointer::Clear => {
                self.main.clear(store)?;
                true
            }
        };
        self.report_stroke(active)
    }

    /// Move, up and leave report `false` when no `down` started a stroke.
    fn report_stroke(&mut self, active: bool) -> AppResult<()> {
        if !active {
            writeln!(self.out, "no stroke in progress")?;
        }
        Ok(())
    }
}
