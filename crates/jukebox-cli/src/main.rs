use clap::Parser;
use jukebox_core::Bootstrap;

/// The bootstrap takes no flags of its own; the parser supplies --help and
/// --version and is the seam where application options would land.
#[derive(Debug, Parser)]
#[command(author, version, about = "First-run bootstrap for the EternalJukebox server.")]
struct JukeboxArgs {}

#[tokio::main]
async fn main() {
    env_logger::init();
    let _ = JukeboxArgs::parse();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let outcome = Bootstrap::default().run(&mut input, &mut output).await;
    log::debug!("bootstrap finished with {outcome:?}");

    std::process::exit(outcome.exit_code());
}
