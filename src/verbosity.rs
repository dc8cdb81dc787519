// Global verbosity system for clean output control
use std::sync::atomic::{AtomicU8, Ordering};

pub const MAX_VERBOSITY: u8 = 2;

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

/// Set the global verbosity level, clamped to 0..=2
pub fn set_verbosity_level(level: u8) {
    let level = level.min(MAX_VERBOSITY);
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 0 {
        eprintln!("📢 Verbosity level: {} (0=quiet, 1=basic, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

pub fn is_enabled(level: u8) -> bool {
    get_verbosity_level() >= level
}

// Global verbosity macros that work anywhere
#[macro_export]
macro_rules! v_print {
    ($level:expr, $($arg:tt)*) => {
        if $crate::verbosity::is_enabled($level) {
            println!($($arg)*);
        }
    };
}

// Convenience macros
#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => { println!($($arg)*); };
}

#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!(1, $($arg)*); };
}

#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!(2, $($arg)*); };
}

// Always print errors regardless of verbosity
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*); };
}
