use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::{Error, Frames, Indicator};

/// Cloneable in-memory sink. One clone goes to the indicator, the test
/// keeps the other to inspect what the render thread wrote.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn new() -> Self {
        Self::default()
    }

    fn bytes(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }

    fn text(&self) -> String {
        String::from_utf8(self.bytes()).unwrap()
    }

    /// Frames in draw order: the byte stream split at carriage returns,
    /// ANSI escapes stripped.
    fn frames(&self) -> Vec<String> {
        self.text()
            .split('\r')
            .map(strip_ansi)
            .filter(|f| !f.is_empty())
            .collect()
    }

    fn last_frame(&self) -> String {
        self.frames().last().cloned().unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Drops `ESC [ .. <final>` control sequences, keeping printable text.
fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn fill_of(frame: &str) -> usize {
    frame.chars().filter(|c| *c == '=').count()
}

#[test]
fn frames_cycle_with_period_len() {
    let frames = Frames::dots();
    for i in 0..frames.len() * 2 {
        assert_eq!(frames.at(i), frames.at(i + frames.len()));
    }
}

#[test]
fn frames_default_is_the_wheel() {
    let frames = Frames::default();
    assert_eq!(frames.at(0), "|");
    assert_eq!(frames.len(), 4);
}

#[test]
fn frames_custom_accepts_owned_and_borrowed() {
    let frames = Frames::custom(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(frames.at(3), "b");
    assert_eq!(frames.first(), "a");
}

#[test]
#[should_panic(expected = "frame sequence must not be empty")]
fn frames_reject_empty_sequences() {
    let _ = Frames::custom(Vec::<String>::new());
}

#[test]
fn bar_draws_every_fraction_clamped_and_floored() {
    let out = Capture::new();
    let mut bar = Indicator::bar("Copy").sink(out.clone());
    bar.start().unwrap();
    bar.update(-0.5).unwrap();
    bar.update(0.25).unwrap();
    bar.update(0.99).unwrap();
    bar.update(7.0).unwrap();
    bar.success().unwrap();

    let fills: Vec<usize> = out
        .frames()
        .iter()
        .filter(|f| f.starts_with("Copy: ["))
        .map(|f| fill_of(f))
        .collect();
    // Initial 0%, the four updates (clamped to 0, 5 of 20, floor 19,
    // clamped full), then the terminal frame.
    assert_eq!(fills, vec![0, 0, 5, 19, 20, 20]);
}

#[test]
fn bar_success_completes_full_regardless_of_last_fraction() {
    let out = Capture::new();
    let mut bar = Indicator::bar("Sync").sink(out.clone());
    bar.start().unwrap();
    bar.update(0.1).unwrap();
    bar.success().unwrap();

    let last = out.last_frame();
    assert!(last.starts_with("Sync: ["));
    assert_eq!(fill_of(&last), 20);
    assert!(last.contains("100%"));
}

#[test]
fn bar_fail_renders_x_fill() {
    let out = Capture::new();
    let mut bar = Indicator::bar("Sync").sink(out.clone());
    bar.start().unwrap();
    bar.update(0.8).unwrap();
    bar.fail().unwrap();

    let last = out.last_frame();
    assert_eq!(last.chars().filter(|c| *c == 'X').count(), 20);
    assert!(last.contains("FAIL"));
    assert_eq!(fill_of(&last), 0);
}

#[test]
fn bar_upload_scenario_draws_only_submitted_fractions() {
    let out = Capture::new();
    let mut bar = Indicator::bar("Uploading").sink(out.clone());
    bar.start().unwrap();
    bar.update(0.25).unwrap();
    bar.update(1.0).unwrap();
    bar.success().unwrap();

    let fills: Vec<usize> = out
        .frames()
        .iter()
        .filter(|f| f.starts_with("Uploading: ["))
        .map(|f| fill_of(f))
        .collect();
    // Initial 0%, then exactly the submitted fractions, then the full
    // terminal frame. Nothing interpolated in between.
    assert_eq!(fills, vec![0, 5, 20, 20]);
    assert!(out.last_frame().contains("100%"));
}

#[test]
fn spinner_immediate_fail_has_single_terminal_line() {
    let out = Capture::new();
    let mut spin = Indicator::spinner("Connecting").sink(out.clone());
    spin.start().unwrap();
    spin.fail().unwrap();

    let text = out.text();
    assert_eq!(text.matches("FAIL").count(), 1);
    // Nothing renders after the terminal line break.
    assert!(text.ends_with("]\n"));
    assert!(out.last_frame().contains("[FAIL]"));
}

#[test]
fn spinner_success_draws_ok_after_animation() {
    let out = Capture::new();
    let mut spin = Indicator::spinner("Building").sink(out.clone());
    spin.start().unwrap();
    thread::sleep(Duration::from_millis(250));
    spin.success().unwrap();

    let frames = out.frames();
    assert!(frames.iter().any(|f| f.contains("[|]")));
    let last = frames.last().unwrap();
    assert!(last.starts_with("Building"));
    assert!(last.contains("[OK]"));
}

#[test]
fn spinner_success_frame_is_flushed_before_returning() {
    let out = Capture::new();
    let mut spin = Indicator::spinner("Deploying").sink(out.clone());
    spin.start().unwrap();
    spin.success().unwrap();
    // No sleep: the join barrier guarantees the frame is already there.
    assert!(out.last_frame().contains("[OK]"));
}

#[test]
fn spinner_pads_short_labels_to_display_width() {
    let out = Capture::new();
    let mut spin = Indicator::spinner("Up").sink(out.clone());
    spin.start().unwrap();
    spin.success().unwrap();

    let last = out.last_frame();
    // 2 label chars plus 28 pad dots fill the default width of 30.
    assert!(last.starts_with(&format!("Up{}[", ".".repeat(28))));
}

#[test]
fn spinner_long_label_keeps_minimum_pad() {
    let label = "A label well beyond the display width";
    let out = Capture::new();
    let mut spin = Indicator::spinner(label).sink(out.clone());
    spin.start().unwrap();
    spin.success().unwrap();

    assert!(out.last_frame().starts_with(&format!("{label}...[")));
}

#[test]
fn loading_terminated_inside_delay_writes_nothing() {
    let out = Capture::new();
    let mut load =
        Indicator::loading("Pinging", Frames::dots(), Duration::from_millis(500)).sink(out.clone());
    load.start().unwrap();
    thread::sleep(Duration::from_millis(10));
    load.success().unwrap();

    assert!(out.bytes().is_empty());
}

#[test]
fn loading_fail_inside_delay_also_writes_nothing() {
    let out = Capture::new();
    let mut load =
        Indicator::loading("Pinging", Frames::dots(), Duration::from_millis(500)).sink(out.clone());
    load.start().unwrap();
    load.fail().unwrap();

    assert!(out.bytes().is_empty());
}

#[test]
fn loading_past_delay_animates_then_erases() {
    let out = Capture::new();
    let mut load =
        Indicator::loading("Pinging", Frames::dots(), Duration::from_millis(10)).sink(out.clone());
    load.start().unwrap();
    thread::sleep(Duration::from_millis(150));
    load.success().unwrap();

    let text = out.text();
    assert!(out.frames().iter().any(|f| f.contains("Pinging")));
    // The erase overwrites frame, label, and spacing with blanks.
    let blank = " ".repeat(Frames::dots().first().len() + "Pinging".len() + 3);
    assert!(text.contains(&blank));
    assert!(text.ends_with("\r\n"));
}

#[test]
fn loading_zero_delay_skips_the_gate() {
    let out = Capture::new();
    let mut load =
        Indicator::loading("Warming up", Frames::bouncing(), Duration::ZERO).sink(out.clone());
    load.start().unwrap();
    thread::sleep(Duration::from_millis(50));
    load.success().unwrap();

    assert!(out.text().contains("Warming up"));
    assert!(out.text().ends_with("\r\n"));
}

#[test]
fn loading_erases_even_on_fail() {
    let out = Capture::new();
    let mut load =
        Indicator::loading("Probing", Frames::bouncing(), Duration::ZERO).sink(out.clone());
    load.start().unwrap();
    thread::sleep(Duration::from_millis(50));
    load.fail().unwrap();

    // No failure marker of any kind, just the erase.
    let text = out.text();
    assert!(!text.contains("FAIL"));
    assert!(text.ends_with("\r\n"));
}

#[test]
fn update_label_is_picked_up_by_later_frames() {
    let out = Capture::new();
    let mut spin = Indicator::spinner("first").sink(out.clone());
    spin.start().unwrap();
    spin.update_label("second");
    thread::sleep(Duration::from_millis(250));
    spin.success().unwrap();

    assert!(out.text().contains("second"));
    assert!(out.last_frame().starts_with("second"));
}

#[test]
fn lifecycle_violations_are_reported() {
    let mut bar = Indicator::bar("x").sink(Capture::new());
    assert_eq!(bar.update(0.5), Err(Error::NotStarted));
    assert_eq!(bar.success(), Err(Error::NotStarted));

    bar.start().unwrap();
    assert_eq!(bar.start(), Err(Error::AlreadyStarted));

    bar.success().unwrap();
    assert_eq!(bar.success(), Err(Error::AlreadyTerminated));
    assert_eq!(bar.fail(), Err(Error::AlreadyTerminated));
    assert_eq!(bar.update(0.5), Err(Error::AlreadyTerminated));
    assert_eq!(bar.start(), Err(Error::AlreadyTerminated));
}

#[test]
fn update_requires_a_bar() {
    let mut spin = Indicator::spinner("x").sink(Capture::new());
    spin.start().unwrap();
    assert_eq!(spin.update(0.5), Err(Error::WrongStyle));
    spin.success().unwrap();

    let mut load = Indicator::loading("x", Frames::dots(), Duration::ZERO).sink(Capture::new());
    load.start().unwrap();
    assert_eq!(load.update(0.5), Err(Error::WrongStyle));
    load.fail().unwrap();
}

#[test]
fn dropping_a_started_indicator_stops_the_renderer() {
    let out = Capture::new();
    let mut spin = Indicator::spinner("left behind").sink(out.clone());
    spin.start().unwrap();
    drop(spin);
    // The render thread sees the channel close and exits without a
    // terminal frame; give it a tick to notice.
    thread::sleep(Duration::from_millis(250));
    let text = out.text();
    assert!(!text.contains("OK"));
    assert!(!text.contains("FAIL"));
}
