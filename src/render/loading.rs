use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::frames::Frames;
use crate::line::{Line, SharedLine, put};

use super::{Outcome, Renderer, Running, Signal};

const TICK: Duration = Duration::from_millis(250);

/// `<frame>  <label>`, gated behind an anti-flicker delay and erased on
/// termination.
///
/// Loading has no failure frame: the message precedes an outcome the
/// caller prints itself, so success and failure both erase.
pub(crate) struct Loading {
    pub(crate) frames: Frames,
    pub(crate) delay: Duration,
}

impl Renderer for Loading {
    fn start(&self, line: SharedLine) -> Running {
        let (tx, rx) = mpsc::channel();
        let frames = self.frames.clone();
        let delay = self.delay;
        let join = thread::spawn(move || run(line, rx, frames, delay));
        Running {
            signal: Signal::Control(tx),
            join,
        }
    }

    fn style(&self) -> &'static str {
        "loading"
    }
}

fn run(shared: SharedLine, signals: Receiver<Outcome>, frames: Frames, delay: Duration) {
    // Anti-flicker gate: an outcome inside the delay window means the
    // operation finished fast enough that no indicator should appear at
    // all, so exit before the first byte is written.
    if !delay.is_zero() {
        match signals.recv_timeout(delay) {
            Ok(_) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    for i in 0.. {
        match signals.try_recv() {
            // Either outcome: blank the line and hand it back.
            Ok(_) => {
                let mut line = shared.lock().unwrap();
                let Line { label, sink } = &mut *line;
                let blank = " ".repeat(frames.first().len() + label.len() + 3);
                put(sink, format_args!("\x1b[?25l\r{blank}\r\n"));
                return;
            }
            Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {
                let mut line = shared.lock().unwrap();
                let Line { label, sink } = &mut *line;
                put(sink, format_args!("\x1b[?25l\r{}  {label}", frames.at(i)));
            }
        }
        thread::sleep(TICK);
    }
}
