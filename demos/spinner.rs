//! Spinners around simulated long-running calls, including a mid-flight
//! label swap and a failure outcome.

use std::thread;
use std::time::Duration;

use tally_line::Indicator;

fn main() -> Result<(), tally_line::Error> {
    let mut spin = Indicator::spinner("Resolving registry index");
    spin.start()?;
    sleep(1800);
    spin.success()?;

    let mut spin = Indicator::spinner("Connecting to build agent");
    spin.start()?;
    sleep(1200);
    spin.update_label("Retrying via fallback agent");
    sleep(1200);
    spin.fail()?;

    Ok(())
}

fn sleep(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}
