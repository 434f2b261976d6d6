//! Pluggable destinations for formatted log and diagnostic text.

/// A capability that accepts one fully formatted line of text.
///
/// Sinks take `&self` so implementations that record what they receive use
/// interior mutability; configs hold them as `Arc<dyn Sink>` so a caller can
/// keep a handle to a sink it supplied (e.g. a test capture sink). A sink
/// must not call back into the logging entry points of the config that owns
/// it.
pub trait Sink: Send + Sync {
    /// Delivers one formatted line. The text carries no trailing newline.
    fn accept(&self, text: &str);
}

/// The built-in log channel sink: writes each line to standard output.
#[derive(Debug, Default)]
pub struct ConsoleLog;

impl Sink for ConsoleLog {
    fn accept(&self, text: &str) {
        println!("{text}");
    }
}

/// The built-in diagnostic channel sink: writes each line to standard error.
#[derive(Debug, Default)]
pub struct ConsoleDiag;

impl Sink for ConsoleDiag {
    fn accept(&self, text: &str) {
        eprintln!("{text}");
    }
}
