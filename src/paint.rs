use owo_colors::OwoColorize;

/// Color tag for terminal outcome markers.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Tone {
    Success,
    Failure,
}

/// Decorates `text` with the ANSI color for `tone`.
pub(crate) fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Failure => text.red().to_string(),
    }
}
