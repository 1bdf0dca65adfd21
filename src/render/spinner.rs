use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::frames::Frames;
use crate::line::{Line, SharedLine, put};
use crate::paint::{Tone, paint};

use super::{Outcome, Renderer, Running, Signal};

const TICK: Duration = Duration::from_millis(100);

/// Minimum padding between label and status bracket.
const MIN_PAD: usize = 3;

/// `<label>...[<frame>]`, ticking until an outcome arrives, then a final
/// `[OK]` or `[FAIL]` bracket, cursor restored, line terminated.
pub(crate) struct Spinner {
    pub(crate) width: usize,
    pub(crate) frames: Frames,
}

impl Renderer for Spinner {
    fn start(&self, line: SharedLine) -> Running {
        let (tx, rx) = mpsc::channel();
        let frames = self.frames.clone();
        let width = self.width;
        let join = thread::spawn(move || run(line, rx, frames, width));
        Running {
            signal: Signal::Control(tx),
            join,
        }
    }

    fn style(&self) -> &'static str {
        "spinner"
    }
}

fn run(shared: SharedLine, signals: Receiver<Outcome>, frames: Frames, width: usize) {
    // Dot padding up to the display width; short labels still get
    // MIN_PAD. Sized once from the label at start, later label swaps
    // keep it.
    let pad = {
        let line = shared.lock().unwrap();
        ".".repeat(width.saturating_sub(line.label.len()).max(MIN_PAD))
    };

    for i in 0.. {
        match signals.try_recv() {
            Ok(outcome) => {
                let marker = match outcome {
                    Outcome::Success => paint("OK", Tone::Success),
                    Outcome::Fail => paint("FAIL", Tone::Failure),
                };
                let mut line = shared.lock().unwrap();
                let Line { label, sink } = &mut *line;
                put(sink, format_args!("\x1b[?25h\r{label}{pad}[{marker}]\n"));
                return;
            }
            // Controller dropped without terminating: no terminal frame,
            // but hand the cursor back.
            Err(TryRecvError::Disconnected) => {
                let mut line = shared.lock().unwrap();
                put(&mut line.sink, format_args!("\x1b[?25h"));
                return;
            }
            Err(TryRecvError::Empty) => {
                let mut line = shared.lock().unwrap();
                let Line { label, sink } = &mut *line;
                put(
                    sink,
                    format_args!("\x1b[?25l\r{label}{pad}[{}]", frames.at(i)),
                );
            }
        }
        thread::sleep(TICK);
    }
}
