//! The anti-flicker gate: calls that finish inside the delay window show
//! no indicator at all, slower ones animate and then erase.

use std::thread;
use std::time::Duration;

use tally_line::{Frames, Indicator};

fn main() -> Result<(), tally_line::Error> {
    let gate = Duration::from_millis(200);

    // Finishes inside the gate, renders nothing.
    let mut fast = Indicator::loading("Checking local cache", Frames::dots(), gate);
    fast.start()?;
    thread::sleep(Duration::from_millis(40));
    fast.success()?;
    println!("cache hit (no indicator flashed)");

    // Outlives the gate, animates until the call completes, then erases.
    let mut slow = Indicator::loading("Fetching remote manifest", Frames::clock(), gate);
    slow.start()?;
    thread::sleep(Duration::from_secs(3));
    slow.success()?;
    println!("manifest fetched");

    Ok(())
}
