use std::io::Write;
use std::time::Duration;

use crate::error::Error;
use crate::frames::Frames;
use crate::line::{Line, SharedLine};
use crate::render::{Bar, BarEvent, Loading, Outcome, Renderer, Running, Signal, Spinner};

/// Default display width for spinner indicators.
const SPINNER_WIDTH: usize = 30;
/// Default display width for bar indicators.
const BAR_WIDTH: usize = 20;

/// A live, in-place terminal progress indicator.
///
/// Construct one of the three styles, call [`start`] to launch the
/// background render thread, then finish with exactly one of [`success`]
/// or [`fail`]. Both block until the final frame is flushed and the
/// render thread has exited, so the caller never observes a half-drawn
/// line.
///
/// ```rust,no_run
/// use tally_line::Indicator;
///
/// let mut spin = Indicator::spinner("Connecting");
/// spin.start()?;
/// // ... do the slow work ...
/// spin.success()?;
/// # Ok::<(), tally_line::Error>(())
/// ```
///
/// [`start`]: Indicator::start
/// [`success`]: Indicator::success
/// [`fail`]: Indicator::fail
pub struct Indicator {
    line: SharedLine,
    renderer: Box<dyn Renderer>,
    running: Option<Running>,
    terminated: bool,
}

impl Indicator {
    /// An animated spinner: `<label>...[|]`, finishing as `[OK]` or
    /// `[FAIL]`.
    pub fn spinner(label: impl Into<String>) -> Self {
        Self::with(
            label,
            Box::new(Spinner {
                width: SPINNER_WIDTH,
                frames: Frames::wheel(),
            }),
        )
    }

    /// A percentage bar: `<label>: [=====          ]  25%`, driven by
    /// [`update`](Self::update).
    pub fn bar(label: impl Into<String>) -> Self {
        Self::with(label, Box::new(Bar { width: BAR_WIDTH }))
    }

    /// A delayed loading message: `<frame>  <label>`, visible only once
    /// the operation outlives `delay`, erased on termination.
    ///
    /// Operations that finish inside the delay window never draw
    /// anything, which keeps fast calls from flashing an indicator.
    pub fn loading(label: impl Into<String>, frames: Frames, delay: Duration) -> Self {
        Self::with(label, Box::new(Loading { frames, delay }))
    }

    fn with(label: impl Into<String>, renderer: Box<dyn Renderer>) -> Self {
        Self {
            line: Line::new(label.into(), Box::new(std::io::stdout())),
            renderer,
            running: None,
            terminated: false,
        }
    }

    /// Redirects output to `sink` instead of stdout.
    pub fn sink(self, sink: impl Write + Send + 'static) -> Self {
        self.line.lock().unwrap().sink = Box::new(sink);
        self
    }

    /// Launches the background render thread and returns immediately.
    ///
    /// A bar queues an initial 0% frame so it is visible before the
    /// first [`update`](Self::update) arrives.
    pub fn start(&mut self) -> Result<(), Error> {
        if self.terminated {
            return Err(Error::AlreadyTerminated);
        }
        if self.running.is_some() {
            return Err(Error::AlreadyStarted);
        }
        self.running = Some(self.renderer.start(self.line.clone()));
        #[cfg(feature = "tracing")]
        tracing::debug!(style = self.renderer.style(), "indicator started");
        Ok(())
    }

    /// Replaces the label; the renderer picks it up on its next frame.
    ///
    /// Safe to call at any point, including while rendering.
    pub fn update_label(&mut self, label: impl Into<String>) {
        self.line.lock().unwrap().label = label.into();
    }

    /// Submits a progress fraction in `[0, 1]`; out-of-range values are
    /// clamped. Bar indicators only.
    ///
    /// Returns once the channel accepts the value, not once it is drawn.
    /// At most two values queue before the call blocks on the renderer
    /// draining them.
    pub fn update(&mut self, fraction: f64) -> Result<(), Error> {
        if self.terminated {
            return Err(Error::AlreadyTerminated);
        }
        let running = self.running.as_ref().ok_or(Error::NotStarted)?;
        match &running.signal {
            Signal::Bar(tx) => tx
                .send(BarEvent::Progress(fraction.clamp(0.0, 1.0)))
                .map_err(|_| Error::AlreadyTerminated),
            Signal::Control(_) => Err(Error::WrongStyle),
        }
    }

    /// Stops the indicator with its success frame.
    ///
    /// Blocks until the render thread has flushed the final frame and
    /// exited.
    pub fn success(&mut self) -> Result<(), Error> {
        self.finish(Outcome::Success)
    }

    /// Stops the indicator with its failure frame.
    ///
    /// Loading indicators have no failure frame; they erase either way.
    pub fn fail(&mut self) -> Result<(), Error> {
        self.finish(Outcome::Fail)
    }

    fn finish(&mut self, outcome: Outcome) -> Result<(), Error> {
        if self.terminated {
            return Err(Error::AlreadyTerminated);
        }
        let running = self.running.take().ok_or(Error::NotStarted)?;
        self.terminated = true;
        match &running.signal {
            Signal::Control(tx) => {
                let _ = tx.send(outcome);
            }
            Signal::Bar(tx) => {
                let _ = tx.send(match outcome {
                    Outcome::Success => BarEvent::Completed,
                    Outcome::Fail => BarEvent::Failed,
                });
            }
        }
        // Lifecycle barrier: the terminal frame is on the sink when this
        // returns. Dropping `running` afterwards closes the channel.
        let _ = running.join.join();
        #[cfg(feature = "tracing")]
        tracing::debug!(style = self.renderer.style(), ?outcome, "indicator terminated");
        Ok(())
    }
}

impl std::fmt::Debug for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indicator")
            .field("style", &self.renderer.style())
            .field("label", &self.line.lock().unwrap().label)
            .field("running", &self.running.is_some())
            .field("terminated", &self.terminated)
            .finish()
    }
}
