use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::ConfigCandidates;
use crate::outcome::Outcome;
use crate::prompt;
use crate::web::{ConfigureServer, WebOutcome, CONFIGURE_PAGE_FILE, DEFAULT_BIND};

/// The first-run decision tree.
///
/// Reader and writer are injected so the whole flow can run against scripted
/// input in tests; the binary passes locked stdin and stdout.
pub struct Bootstrap {
    pub candidates: ConfigCandidates,
    pub configure_page: PathBuf,
    pub bind: String,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            candidates: ConfigCandidates::default(),
            configure_page: PathBuf::from(CONFIGURE_PAGE_FILE),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Bootstrap {
    /// Walk the tree to a terminal [`Outcome`]. Every path through here ends
    /// the process; the caller only maps the outcome to an exit code.
    pub async fn run(&self, input: &mut impl BufRead, output: &mut impl Write) -> Outcome {
        let _ = writeln!(output, "==Eternal Jukebox==");
        let _ = writeln!(output, "Attempting to load config...");

        if self.candidates.any_present() {
            return Outcome::ConfigFound;
        }

        let _ = writeln!(output, "Error: No config file detected");
        if !prompt::confirm(
            "Would you like to initialise a configuration (Y/n)?",
            input,
            output,
        ) {
            let _ = writeln!(
                output,
                "No config file detected, and no configuration will be initialised."
            );
            let _ = writeln!(output, "Terminating...");
            return Outcome::Declined;
        }

        let _ = writeln!(output, "Initialising a configuration...");
        if !prompt::confirm("Would you like to use a web browser (Y/n)?", input, output) {
            // Console-based configuration does not exist yet; the web form is
            // the only implemented editor.
            let _ = writeln!(
                output,
                "Console configuration is not available yet; rerun and choose the web browser option."
            );
            let _ = writeln!(output, "Terminating...");
            return Outcome::Declined;
        }

        match ConfigureServer::start_on(&self.bind, self.configure_page.clone()).await {
            Ok(server) => {
                let _ = writeln!(output, "Awaiting configuration at {}", server.configure_url());
                match server.wait().await {
                    Some(WebOutcome::Configured) => {
                        let _ = writeln!(output, "Configuration successful, starting up now...");
                        Outcome::Configured
                    }
                    Some(WebOutcome::PageMissing) => {
                        let _ = writeln!(output, "Configuration page could not be found, exiting...");
                        Outcome::ConfigurePageMissing
                    }
                    None => {
                        let _ = writeln!(
                            output,
                            "Web configuration ended without a result, exiting..."
                        );
                        Outcome::WebOutcomeUnknown
                    }
                }
            }
            Err(err) => {
                let _ = writeln!(output, "Server could not be started: {err}");
                Outcome::WebServerFailed
            }
        }
    }
}
