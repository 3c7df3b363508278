use {clap::Parser, puzzles::LeapYear};

/// Reads a year and prints YES for a leap year, NO otherwise
#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    puzzles::set_debug(cli.debug);
    puzzles::execute::<LeapYear>(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
