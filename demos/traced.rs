//! Indicator lifecycle events observed through a `tracing` subscriber.
//!
//! Diagnostics go to stderr, the indicator to stdout; redirect one to
//! keep the streams apart, e.g. `cargo run --example traced 2>trace.log`.

use std::thread;
use std::time::Duration;

use tally_line::Indicator;

fn main() -> Result<(), tally_line::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut bar = Indicator::bar("Syncing snapshots");
    bar.start()?;
    for step in 1..=10 {
        thread::sleep(Duration::from_millis(120));
        bar.update(step as f64 / 10.0)?;
    }
    bar.success()?;

    Ok(())
}
