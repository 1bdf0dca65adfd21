use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::line::{Line, SharedLine, put};
use crate::paint::{Tone, paint};

use super::{BarEvent, Renderer, Running, Signal};

/// Two progress values may queue before `update` blocks.
const BUFFER: usize = 2;

/// `<label>: [=====          ]  25%`, redrawn for every received
/// fraction, completing as a full `=` bar with a green `100%` or a full
/// `X` bar with a red `FAIL`.
pub(crate) struct Bar {
    pub(crate) width: usize,
}

impl Renderer for Bar {
    fn start(&self, line: SharedLine) -> Running {
        let (tx, rx) = mpsc::sync_channel(BUFFER);
        let width = self.width;
        let join = thread::spawn(move || run(line, rx, width));
        // Queue an initial 0% so the bar is visible before any real
        // progress arrives.
        let _ = tx.send(BarEvent::Progress(0.0));
        Running {
            signal: Signal::Bar(tx),
            join,
        }
    }

    fn style(&self) -> &'static str {
        "bar"
    }
}

fn run(shared: SharedLine, events: Receiver<BarEvent>, width: usize) {
    // No tick of its own: the loop blocks on the channel and draws every
    // received event exactly once, in order. It ends when the controller
    // drops the sender without a terminal event.
    for event in events {
        let mut line = shared.lock().unwrap();
        let Line { label, sink } = &mut *line;
        match event {
            // NaN slips through the clamp; draw nothing rather than a
            // garbage fill.
            BarEvent::Progress(v) if !v.is_finite() => {}
            BarEvent::Progress(v) => {
                let filled = (v * width as f64) as usize;
                put(
                    sink,
                    format_args!(
                        "\x1b[?25l\r{label}: [{}{}] {:2.0}%",
                        "=".repeat(filled),
                        " ".repeat(width - filled),
                        v * 100.0,
                    ),
                );
            }
            BarEvent::Completed => {
                let marker = paint("100%", Tone::Success);
                put(
                    sink,
                    format_args!(
                        "\x1b[?25l\r{label}: [{}] {marker}\x1b[?25h\n",
                        "=".repeat(width),
                    ),
                );
                return;
            }
            BarEvent::Failed => {
                let marker = paint("FAIL", Tone::Failure);
                put(
                    sink,
                    format_args!(
                        "\x1b[?25l\r{label}: [{}] {marker}\x1b[?25h\n",
                        "X".repeat(width),
                    ),
                );
                return;
            }
        }
    }

    // Sender gone with no terminal event: hand the cursor back and stop.
    let mut line = shared.lock().unwrap();
    put(&mut line.sink, format_args!("\x1b[?25h"));
}
