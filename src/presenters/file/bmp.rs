use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Bgr;
use crate::core::data::raster_buffer::RasterBuffer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const FILE_TYPE: u16 = 0x4D42; // "BM"
const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const HEADER_LEN: u32 = FILE_HEADER_LEN + INFO_HEADER_LEN;
const PIXELS_PER_METRE: u32 = 1000;

/// The 14-byte file header and 40-byte info header of an uncompressed
/// 24-bit bitmap, each field at its exact wire width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub width: u32,
    pub height: u32,
    pub image_size: u32,
}

impl BmpHeader {
    pub fn for_raster(buffer: &RasterBuffer) -> io::Result<Self> {
        let size = buffer.size();
        let too_large = || {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}x{} raster does not fit a bitmap", size.width(), size.height()),
            )
        };

        let image_size = u32::try_from(buffer.buffer_size()).map_err(|_| too_large())?;
        let file_size = image_size.checked_add(HEADER_LEN).ok_or_else(too_large)?;

        Ok(Self {
            file_size,
            width: size.width(),
            height: size.height(),
            image_size,
        })
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN as usize] {
        let mut bytes = [0u8; HEADER_LEN as usize];
        let fields: [&[u8]; 16] = [
            &FILE_TYPE.to_le_bytes(),
            &self.file_size.to_le_bytes(),
            &0u16.to_le_bytes(),
            &0u16.to_le_bytes(),
            &HEADER_LEN.to_le_bytes(),
            &INFO_HEADER_LEN.to_le_bytes(),
            &self.width.to_le_bytes(),
            &self.height.to_le_bytes(),
            &1u16.to_le_bytes(),
            &((Bgr::BYTES as u16) * 8).to_le_bytes(),
            &0u32.to_le_bytes(),
            &self.image_size.to_le_bytes(),
            &PIXELS_PER_METRE.to_le_bytes(),
            &PIXELS_PER_METRE.to_le_bytes(),
            &0u32.to_le_bytes(),
            &0u32.to_le_bytes(),
        ];

        let mut offset = 0;
        for field in fields {
            bytes[offset..offset + field.len()].copy_from_slice(field);
            offset += field.len();
        }

        bytes
    }
}

/// Serializes `buffer` as a bitmap.
///
/// Rows are written unpadded in buffer order; bitmap readers treat the first
/// row as the bottom of the image, so the minimum imaginary bound ends up at
/// the bottom edge.
pub fn write_bmp<W: Write>(buffer: &RasterBuffer, writer: &mut W) -> io::Result<()> {
    let header = BmpHeader::for_raster(buffer)?;

    writer.write_all(&header.to_bytes())?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

pub struct BmpFilePresenter {}

impl FilePresenterPort for BmpFilePresenter {
    fn present(&self, buffer: &RasterBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        write_bmp(buffer, &mut writer)?;
        writer.into_inner().map_err(|err| err.into_error())?.sync_all()?;

        Ok(())
    }
}

impl Default for BmpFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl BmpFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
