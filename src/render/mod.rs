//! Background render loops, one per indicator style.
//!
//! Each style implements [`Renderer`]: allocate the style's signal
//! channel, spawn the loop on its own thread, and hand the sending half
//! plus the join handle back to the controller. The join handle is the
//! lifecycle barrier: [`Indicator::success`] and [`Indicator::fail`]
//! block on it until the terminal frame has been flushed.
//!
//! [`Indicator::success`]: crate::Indicator::success
//! [`Indicator::fail`]: crate::Indicator::fail

mod bar;
mod loading;
mod spinner;

pub(crate) use bar::Bar;
pub(crate) use loading::Loading;
pub(crate) use spinner::Spinner;

use std::sync::mpsc::{Sender, SyncSender};
use std::thread::JoinHandle;

use crate::line::SharedLine;

/// Terminal outcome for spinner and loading indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    Fail,
}

/// One message on the bar's progress channel.
///
/// Progress and termination share a single ordered channel, so a terminal
/// frame can never overtake a pending fraction.
#[derive(Clone, Copy, Debug)]
pub(crate) enum BarEvent {
    Progress(f64),
    Completed,
    Failed,
}

/// Sending half of a running renderer's signal channel.
pub(crate) enum Signal {
    /// Spinner and loading listen for a single outcome.
    Control(Sender<Outcome>),
    /// The bar consumes a stream of events; two may queue before a send
    /// blocks.
    Bar(SyncSender<BarEvent>),
}

/// Handles owned by the controller while the render thread is alive.
pub(crate) struct Running {
    pub(crate) signal: Signal,
    pub(crate) join: JoinHandle<()>,
}

/// A background render loop for one indicator style.
///
/// The implementation is chosen when the controller is constructed and
/// launched by [`Indicator::start`](crate::Indicator::start).
pub(crate) trait Renderer: Send {
    /// Allocates the signal channel and spawns the render thread.
    fn start(&self, line: SharedLine) -> Running;

    /// Style name for diagnostics.
    fn style(&self) -> &'static str;
}
