#[cfg(feature = "tracing")]
macro_rules! otrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "overscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! otrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! odebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "overscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! odebug {
    ($($tt:tt)*) => {};
}
