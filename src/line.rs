use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// The mutable single-line state shared between a controller and its
/// render thread: the label text and the sink the line is drawn to.
///
/// Locked once per formatted write, never across a tick, so label
/// replacements are picked up on the next frame without starving the
/// caller.
pub(crate) struct Line {
    pub(crate) label: String,
    pub(crate) sink: Box<dyn Write + Send>,
}

pub(crate) type SharedLine = Arc<Mutex<Line>>;

impl Line {
    pub(crate) fn new(label: String, sink: Box<dyn Write + Send>) -> SharedLine {
        Arc::new(Mutex::new(Self { label, sink }))
    }
}

/// Push one formatted frame to the sink, flushing so line-buffered sinks
/// show partial lines. Write errors cost the frame, not the render thread.
pub(crate) fn put<W: Write + ?Sized>(sink: &mut W, frame: fmt::Arguments<'_>) {
    let _ = sink.write_fmt(frame);
    let _ = sink.flush();
}
