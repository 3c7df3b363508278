use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

/// Turns debug logging on or off for the whole process.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

// stdout carries the answer, so debug output goes to stderr
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::common::DEBUG.load(::std::sync::atomic::Ordering::Relaxed) {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_println;
