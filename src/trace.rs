//! Optional structured logging.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to
//! [`tracing::trace!`]. Without it the macro expands to nothing, so call
//! sites must only pass values that are already computed for other reasons.

macro_rules! trace_event {
    ($($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "flatview", $($argument)+);
        }
    };
}

pub(crate) use trace_event;
