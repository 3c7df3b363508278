use {clap::Parser, puzzles::ReverseDigits};

/// Reads an unsigned number and prints it with its digits reversed
#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    puzzles::set_debug(cli.debug);
    puzzles::execute::<ReverseDigits>(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
