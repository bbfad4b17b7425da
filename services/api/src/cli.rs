use crate::error::AppError;
use crate::report::{run_classify, run_samples, ClassifyArgs, Output, SamplesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "feedsieve",
    about = "Score feed posts for low-substance formatting and decide whether to hide them",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the verdict for one post read from a file or stdin
    Evaluate(ClassifyArgs),
    /// Print the full rule breakdown for one post read from a file or stdin
    Explain(ClassifyArgs),
    /// Run the built-in sample posts and print a report for each
    Samples(SamplesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_classify(args, Output::Verdict),
        Command::Explain(args) => run_classify(args, Output::Diagnostics),
        Command::Samples(args) => run_samples(args),
    }
}
