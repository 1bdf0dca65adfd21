//! Percentage bars driven by explicit progress updates.

use std::thread;
use std::time::Duration;

use tally_line::Indicator;

fn main() -> Result<(), tally_line::Error> {
    let mut bar = Indicator::bar("Uploading artifacts");
    bar.start()?;
    for chunk in 1..=32 {
        thread::sleep(Duration::from_millis(90));
        bar.update(chunk as f64 / 32.0)?;
    }
    bar.success()?;

    // A failure terminates the bar with an X fill no matter how far it got.
    let mut bar = Indicator::bar("Verifying checksums");
    bar.start()?;
    for file in 1..=9 {
        thread::sleep(Duration::from_millis(140));
        bar.update(file as f64 / 12.0)?;
    }
    bar.fail()?;

    Ok(())
}
