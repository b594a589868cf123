use std::io::Write;

/// Flush both output streams, then terminate with `code`.
///
/// Termination waits on the flushes so a hook runner never sees a status
/// code before the report it belongs to.
pub fn terminate(code: i32) -> ! {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
    std::process::exit(code);
}
