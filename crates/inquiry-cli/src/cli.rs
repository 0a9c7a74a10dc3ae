//! CLI argument definitions for the inquiry tool.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use inquiry_cli::http::DEFAULT_ENDPOINT;

#[derive(Parser)]
#[command(
    name = "inquiry",
    version,
    about = "Contact inquiry form - validate fields and submit inquiries",
    long_about = "Validate contact inquiry fields against the form's rule chains\n\
                  and submit valid inquiries to the remote write endpoint."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the form fields and their validation rules.
    Fields,

    /// Validate a form without submitting it.
    Validate(FormArgs),

    /// Validate a form and submit the inquiry.
    Submit(SubmitArgs),
}

#[derive(Args)]
pub struct FormArgs {
    /// Full name (first and last).
    #[arg(long = "name", value_name = "NAME", default_value = "")]
    pub name: String,

    /// Email address.
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Subject of the inquiry (optional, never validated).
    #[arg(long, value_name = "SUBJECT", default_value = "")]
    pub subject: String,

    /// Message body.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub details: String,
}

#[derive(Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Endpoint receiving the inquiry payload.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Validate and print the payload without performing the network call.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
