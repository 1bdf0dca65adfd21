use std::sync::Arc;

/// An ordered, cyclic sequence of animation frames.
///
/// Sequences are immutable and non-empty; lookup past the end wraps
/// around, so a render loop can index with a bare tick counter:
///
/// ```rust
/// use tally_line::Frames;
///
/// let wheel = Frames::wheel();
/// assert_eq!(wheel.at(0), "|");
/// assert_eq!(wheel.at(4), "|");
/// ```
///
/// Clones share the underlying frame table.
#[derive(Clone, Debug)]
pub struct Frames {
    steps: Arc<[String]>,
}

impl Frames {
    /// Wheel drawn with pipes and slashes.
    pub fn wheel() -> Self {
        Self::custom(["|", "/", "-", "\\"])
    }

    /// Bouncing braille dots.
    pub fn bouncing() -> Self {
        Self::custom(["⠁", "⠂", "⠄", "⠂"])
    }

    /// Clock faces advancing two hours per step.
    pub fn clock() -> Self {
        Self::custom([
            "🕐 ", "🕑 ", "🕒 ", "🕓 ", "🕔 ", "🕕 ", "🕖 ", "🕗 ", "🕘 ", "🕙 ", "🕚 ",
        ])
    }

    /// Braille dots circling a rectangle.
    pub fn dots() -> Self {
        Self::custom(["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }

    /// Builds a sequence from custom frames.
    ///
    /// # Panics
    ///
    /// Panics if `steps` yields no frames.
    pub fn custom<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Arc<[String]> = steps.into_iter().map(Into::into).collect();
        assert!(!steps.is_empty(), "frame sequence must not be empty");
        Self { steps }
    }

    /// Frame for tick `i`; indexing wraps around the sequence.
    pub fn at(&self, i: usize) -> &str {
        &self.steps[i % self.steps.len()]
    }

    /// The first frame of the sequence.
    pub fn first(&self) -> &str {
        &self.steps[0]
    }

    /// Number of frames before the sequence repeats.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; sequences are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Frames {
    fn default() -> Self {
        Self::wheel()
    }
}
