/// Lifecycle misuse reported by [`Indicator`](crate::Indicator) operations.
///
/// Every variant marks a caller contract violation; code that drives the
/// indicator through its intended lifecycle (construct, [`start`], then
/// exactly one of [`success`] or [`fail`]) never sees one.
///
/// [`start`]: crate::Indicator::start
/// [`success`]: crate::Indicator::success
/// [`fail`]: crate::Indicator::fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `start` was called while the render thread is already running.
    #[error("indicator already started")]
    AlreadyStarted,

    /// `update`, `success`, or `fail` was called before `start`.
    #[error("indicator not started")]
    NotStarted,

    /// The indicator has already drawn its terminal frame.
    #[error("indicator already terminated")]
    AlreadyTerminated,

    /// `update` was called on an indicator that is not a bar.
    #[error("progress updates require a bar indicator")]
    WrongStyle,
}
