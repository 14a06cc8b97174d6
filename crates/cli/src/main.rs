use clap::Parser;

use lockwatch_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    lockwatch_observability::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
