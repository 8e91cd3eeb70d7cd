use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::controllers::errors::ConvertError;
use crate::core::fractals::mandelbrot::palette::BandedPalette;
use crate::storage::raw_iterations::{RawStreamError, convert_raw_stream};

/// Colours the raw iteration stream at `input` into a headerless BGR file at
/// `output`, returning the number of samples written.
pub fn convert_raw_file(input: &Path, output: &Path) -> Result<u64, ConvertError> {
    info!("reading raw iterations from {}", input.display());
    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|source| ConvertError::input(input, source))?;

    info!("writing colour samples to {}", output.display());
    let mut writer = File::create(output)
        .map(BufWriter::new)
        .map_err(|source| ConvertError::output(output, source))?;

    let samples = convert_raw_stream(reader, &mut writer, &BandedPalette).map_err(|err| match err {
        RawStreamError::Read(source) => ConvertError::input(input, source),
        RawStreamError::Write(source) => ConvertError::output(output, source),
    })?;

    writer
        .flush()
        .map_err(|source| ConvertError::output(output, source))?;

    Ok(samples)
}
