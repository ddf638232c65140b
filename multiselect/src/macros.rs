#[cfg(feature = "tracing")]
macro_rules! mtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "multiselect", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! mtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! mdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "multiselect", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! mdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! mwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "multiselect", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! mwarn {
    ($($tt:tt)*) => {};
}
