use clap::Parser;
use clap::error::ErrorKind;
use escape_field::{BmpFilePresenter, RenderArgs, RenderController};
use std::error::Error;
use std::process::ExitCode;

fn run(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let request = args.request();

    println!(
        "Image size: {}x{}, real [{}, {}], imaginary [{}, {}]",
        args.width, args.height, args.rmin, args.rmax, args.imin, args.imax
    );
    println!("Max iterations: {}", request.max_iterations);

    let mut controller = RenderController::new(BmpFilePresenter::new(), args.pool_config());
    let report = controller.generate(&request)?;

    println!("Threads: {}", report.threads);
    println!("Processing time: {:.6} sec", report.elapsed.as_secs_f64());

    controller.write(&args.output)?;
    if let Some(raw) = &args.raw {
        controller.write_raw(raw)?;
        println!("Raw iterations: {}", raw.display());
    }

    println!("Output file: {}", args.output.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match RenderArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            err.print().ok();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
