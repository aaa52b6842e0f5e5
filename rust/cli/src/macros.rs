//! Small macros shared by the command dispatch in `lib.rs`.

/// Writes one line to `$dest`; if the stream is gone there is nothing left to
/// report to, so the enclosing function returns [`exit_code::ERROR`].
///
/// [`exit_code::ERROR`]: crate::exit_code::ERROR
///
/// ```ignore
/// write_or_exit!(err, "Usage: highlow <command> [options]");
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
