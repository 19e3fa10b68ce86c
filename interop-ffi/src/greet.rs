//! Greeting entry point

use std::io::{self, Write};

use tracing::{info, warn};

/// Fixed text written by [`greet`]
pub const GREETING: &str = "Hello from Rust";

/// Write the greeting line to `out`
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    out.flush()
}

/// Print the greeting to stdout
///
/// Cannot fail from the caller's point of view: a broken stdout is logged
/// and otherwise ignored.
#[no_mangle]
pub extern "C" fn greet() {
    if let Err(e) = write_greeting(&mut io::stdout().lock()) {
        warn!(error = %e, "failed to write greeting");
        return;
    }
    info!(greeting = GREETING, "greeted caller");
}
