use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(
    name = "a11ylens",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")"),
    about = "Extract accessibility violations from test-runner output and render a report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the accessibility test command and write the violation report
    Run(RunArgs),
    /// Analyse previously captured test output
    Analyze(AnalyzeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for the snapshot and report
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seconds to wait for the test command before killing it
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Command line run through `sh -c`
    #[arg(long, conflicts_with = "command")]
    pub shell: Option<String>,

    /// Test command and arguments (after `--`)
    #[arg(last = true)]
    pub command: Vec<String>,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Captured output to analyse
    #[arg(default_value = "./reports/debug-output.txt")]
    pub input: String,

    /// Write the report and violations.json into this directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the rendered report to stdout
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
