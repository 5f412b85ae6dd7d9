// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg: tt)+) => {
        log::debug!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg: tt)+) => {};
}
