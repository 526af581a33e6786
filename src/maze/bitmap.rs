use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::maze::error::MazeError;
use crate::maze::painter::Raster;

/// Taille des en-têtes BMP (fichier + BITMAPINFOHEADER).
const HEADER_SIZE: u32 = 14 + 40;
/// 72 DPI
const PIXELS_PER_METER: i32 = 2835;

/// Écrit l'image au format BMP 24 bits non compressé.
pub fn write_bmp<W: Write>(raster: &Raster, writer: &mut W) -> Result<(), MazeError> {
    let too_large = || MazeError::RasterTooLarge {
        width: raster.width(),
        height: raster.height(),
    };
    let width = i32::try_from(raster.width()).map_err(|_| too_large())?;
    let height = i32::try_from(raster.height()).map_err(|_| too_large())?;
    let row_size = raster
        .width()
        .checked_mul(3)
        .and_then(|bytes| bytes.checked_add(3))
        .map(|bytes| bytes & !3)
        .ok_or_else(too_large)?;
    let data_size = row_size
        .checked_mul(raster.height())
        .and_then(|size| u32::try_from(size).ok())
        .ok_or_else(too_large)?;
    let file_size = HEADER_SIZE.checked_add(data_size).ok_or_else(too_large)?;

    // En-tête fichier
    writer.write_all(b"BM")?;
    writer.write_u32::<LittleEndian>(file_size)?;
    writer.write_u16::<LittleEndian>(0)?;
    writer.write_u16::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(HEADER_SIZE)?;

    // BITMAPINFOHEADER
    writer.write_u32::<LittleEndian>(40)?;
    writer.write_i32::<LittleEndian>(width)?;
    writer.write_i32::<LittleEndian>(height)?;
    writer.write_u16::<LittleEndian>(1)?;
    writer.write_u16::<LittleEndian>(24)?;
    writer.write_u32::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(data_size)?;
    writer.write_i32::<LittleEndian>(PIXELS_PER_METER)?;
    writer.write_i32::<LittleEndian>(PIXELS_PER_METER)?;
    writer.write_u32::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(0)?;

    // Les lignes sont stockées de bas en haut, en BGR.
    let padding = vec![0u8; row_size - raster.width() * 3];
    for y in (0..raster.height()).rev() {
        for &[r, g, b] in raster.row(y) {
            writer.write_all(&[b, g, r])?;
        }
        writer.write_all(&padding)?;
    }
    writer.flush()?;
    Ok(())
}

/// Encode l'image BMP en mémoire.
pub fn encode_bmp(raster: &Raster) -> Result<Vec<u8>, MazeError> {
    let mut bytes = Vec::new();
    write_bmp(raster, &mut bytes)?;
    Ok(bytes)
}
