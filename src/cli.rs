use {
    clap::{Parser, Subcommand},
    puzzles::Task,
};

#[derive(Debug, Parser)]
#[command(about = "Small numeric puzzles: one number on stdin, one line on stdout")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (written to stderr)
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the fare for a ride of the given distance
    TaxiFare,
    /// Print YES if the given year is a leap year, NO otherwise
    LeapYear,
    /// Print the given number with its decimal digits reversed
    ReverseDigits,
}

impl From<Command> for Task {
    fn from(command: Command) -> Self {
        match command {
            Command::TaxiFare => Task::TaxiFare,
            Command::LeapYear => Task::LeapYear,
            Command::ReverseDigits => Task::ReverseDigits,
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    puzzles::set_debug(cli.debug);
    let task = Task::from(cli.command);
    task.execute(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
