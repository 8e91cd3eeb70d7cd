use clap::Parser;
use std::path::PathBuf;

/// Colour a raw iteration stream into headerless BGR samples.
#[derive(Debug, Parser)]
#[command(name = "raw_to_colour", version)]
pub struct ConvertArgs {
    #[arg(short, long, default_value = "result.raw")]
    pub input: PathBuf,

    #[arg(short, long, default_value = "result.rgb")]
    pub output: PathBuf,
}
