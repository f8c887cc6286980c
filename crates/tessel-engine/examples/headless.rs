//! Headless run: a Gosper glider gun drawn as ASCII in the terminal.
//!
//! Demonstrates:
//!   1. Seeding a board with a stock shape
//!   2. Building a SimConfig from a named preset
//!   3. Implementing FrameHost without a window
//!   4. Scripting input through the event sender
//!
//! Run with:
//!   cargo run --example headless

use tessel_board::{Board, Shape};
use tessel_core::{CellSurface, Color};
use tessel_engine::{EventSender, FrameHost, FrameStatus, InputEvent, Key, SimConfig, Simulation};

// ─── Grid parameters ────────────────────────────────────────────

const ROWS: u32 = 24;
const COLS: u32 = 48;
const FRAMES: u64 = 240;
const PRINT_EVERY: u64 = 60;

// ─── Surface: one character per cell ────────────────────────────

struct AsciiSurface {
    cols: u32,
    chars: Vec<char>,
}

impl AsciiSurface {
    fn new(rows: u32, cols: u32) -> Self {
        Self {
            cols,
            chars: vec![' '; (rows * cols) as usize],
        }
    }

    fn print(&self) {
        for line in self.chars.chunks(self.cols as usize) {
            println!("{}", line.iter().collect::<String>());
        }
    }
}

impl CellSurface for AsciiSurface {
    fn fill_cell(&mut self, row: u32, col: u32, color: Color) {
        let [_, _, _, alpha] = color.to_rgba_bytes();
        self.chars[(row * self.cols + col) as usize] = if alpha == 0 { '.' } else { '#' };
    }
}

// ─── Host: fixed frame rate, quits after FRAMES ─────────────────

struct TerminalHost {
    surface: AsciiSurface,
    frame: u64,
}

impl FrameHost for TerminalHost {
    fn frame_delta(&self) -> f64 {
        1.0 / 60.0
    }

    fn pump_events(&mut self, events: &EventSender) {
        // Speed up once at the start so the gun fires visibly.
        if self.frame == 0 {
            events.send(InputEvent::KeyDown(Key::Char('x')));
        }
        if self.frame == FRAMES {
            events.send(InputEvent::Quit);
        }
        self.frame += 1;
    }

    fn surface(&mut self) -> &mut dyn CellSurface {
        &mut self.surface
    }

    fn present(&mut self, status: &FrameStatus) {
        if self.frame % PRINT_EVERY == 0 {
            println!(
                "generation {} (timeout {:.4}s, {} this frame)",
                status.generation.0, status.timeout, status.metrics.generations
            );
            self.surface.print();
            println!();
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut board = Board::new(COLS, ROWS).expect("grid dimensions are valid");
    board.inject(2, 2, &Shape::gosper_glider_gun());

    let config = SimConfig::from_preset(board, "conway").expect("conway preset exists");
    let mut sim = Simulation::new(config).expect("default config is valid");

    let mut host = TerminalHost {
        surface: AsciiSurface::new(ROWS, COLS),
        frame: 0,
    };
    let summary = sim.run(&mut host);
    println!(
        "{} frames, {} generations, population {}",
        summary.frames,
        summary.generations,
        sim.lattice().population(1)
    );
}
