use {clap::Parser, puzzles::TaxiFare};

/// Reads a distance and prints the taxi fare with two decimals
#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    puzzles::set_debug(cli.debug);
    puzzles::execute::<TaxiFare>(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
