use clap::Parser;
use clap::error::ErrorKind;
use escape_field::{ConvertArgs, convert_raw_file};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = match ConvertArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            err.print().ok();
            return ExitCode::FAILURE;
        }
    };

    match convert_raw_file(&args.input, &args.output) {
        Ok(samples) => {
            println!("Converted {} samples to {}", samples, args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
