//! Error and warning reporting to stderr, in the `<file>:<line>: Error, <message>` wire
//! format. Errors are fatal: the driver exits with status 1 after the first one that
//! reaches [`Diagnostics::error`]. Warnings are non-fatal and simply accumulate.

use std::cell::Cell;
use std::path::PathBuf;

pub struct Diagnostics {
    file: PathBuf,
    had_error: Cell<bool>,
}

impl Diagnostics {
    pub fn new(file: impl Into<PathBuf>) -> Diagnostics {
        Diagnostics {
            file: file.into(),
            had_error: Cell::new(false),
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error.get()
    }

    /// Report a fatal error. Does not exit by itself: the driver checks [`had_error`]
    /// after each compilation phase and exits with status 1 if set.
    pub fn error(&self, line: usize, message: impl std::fmt::Display) {
        eprintln!("{}:{}: Error, {}", self.file.display(), line, message);
        self.had_error.set(true);
    }

    pub fn warning(&self, line: usize, message: impl std::fmt::Display) {
        eprintln!("{}:{}: Warning, {}", self.file.display(), line, message);
    }

    /// For conditions that indicate a bug in the compiler itself rather than in the
    /// input program. Always fatal, always exits immediately.
    pub fn internal(message: impl std::fmt::Display) -> ! {
        eprintln!("Internal compiler error: {message}");
        std::process::exit(2);
    }
}
