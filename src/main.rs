use anyhow::Result;
use ransomchats::cli;

fn main() -> Result<()> {
    cli::init_logging();
    cli::run()
}
