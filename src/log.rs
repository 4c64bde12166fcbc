//  LOG.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:05:40
//  Last edited:
//    16 Oct 2026, 09:12:31
//  Auto updated?
//    Yes
//
//  Description:
//!   Shims for the [`log`]-macros used by the automaton engine.
//!
//!   The library only depends on the [`log`](https://github.com/rust-lang/log)-crate when the
//!   `log`-feature is enabled. Without it, the macros below swallow their arguments entirely, so
//!   call sites don't have to `#[cfg]` every statement.
//


/***** LIBRARY *****/
/// Forwards to `log::debug!()` when the `log`-feature is enabled.
///
/// Used for coarse-grained events: an automaton being built, a verdict being reached.
#[cfg(feature = "log")]
macro_rules! debug {
    ($($t:tt)*) => {
        ::log::debug!($($t)*)
    };
}
/// Does nothing, because the `log`-feature is disabled.
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($t:tt)*) => {};
}
pub(crate) use debug;

/// Forwards to `log::trace!()` when the `log`-feature is enabled.
///
/// Used for every individual reset, step and enumerated candidate. Expect a lot of output.
#[cfg(feature = "log")]
macro_rules! trace {
    ($($t:tt)*) => {
        ::log::trace!($($t)*)
    };
}
/// Does nothing, because the `log`-feature is disabled.
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($t:tt)*) => {};
}
pub(crate) use trace;
