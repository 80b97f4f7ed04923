/// Terminal state of a bootstrap run.
///
/// Every variant maps to a distinct process exit code; the codes are a
/// contract with wrapper scripts and supervisors and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A configuration file already exists; nothing to do here.
    ConfigFound,
    /// The configure page was served; configuration can proceed.
    Configured,
    /// No configuration exists and the user declined to initialise one.
    Declined,
    /// The one-shot web server could not be started.
    WebServerFailed,
    /// The bundled configure page is missing from this installation.
    ConfigurePageMissing,
    /// The web server terminated without reporting a result.
    WebOutcomeUnknown,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::ConfigFound | Outcome::Configured => 0,
            Outcome::Declined => 1,
            Outcome::WebServerFailed => 2,
            Outcome::ConfigurePageMissing => 3,
            Outcome::WebOutcomeUnknown => 4,
        }
    }
}
