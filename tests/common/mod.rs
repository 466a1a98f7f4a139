//! Shared fixtures for the conversion tests: minimal 24-bit BMP files whose
//! dimensions `imagesize` can sniff from the header, so dataset trees can be
//! built without an image encoder. Pixels are zero-filled, which also makes
//! the byte-copy and imageData assertions deterministic.

use std::fs;
use std::path::Path;

// BITMAPFILEHEADER (14 bytes) + BITMAPINFOHEADER (40 bytes).
const HEADER_LEN: u32 = 54;

/// Write a BMP image of the given pixel dimensions, creating parent
/// directories as needed.
pub fn write_bmp(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }

    // Rows of 3-byte pixels, padded to a 4-byte boundary.
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_bytes = row_stride * height;
    let file_size = HEADER_LEN + pixel_bytes;

    let mut bmp = Vec::with_capacity(file_size as usize);
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&file_size.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes()); // reserved
    bmp.extend_from_slice(&HEADER_LEN.to_le_bytes()); // pixel data offset

    bmp.extend_from_slice(&40u32.to_le_bytes()); // info header size
    bmp.extend_from_slice(&(width as i32).to_le_bytes());
    bmp.extend_from_slice(&(height as i32).to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes()); // color planes
    bmp.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    bmp.extend_from_slice(&0u32.to_le_bytes()); // no compression
    bmp.extend_from_slice(&pixel_bytes.to_le_bytes());
    bmp.extend_from_slice(&2835u32.to_le_bytes()); // 72 dpi, horizontal
    bmp.extend_from_slice(&2835u32.to_le_bytes()); // 72 dpi, vertical
    bmp.extend_from_slice(&0u32.to_le_bytes()); // palette size
    bmp.extend_from_slice(&0u32.to_le_bytes()); // important colors

    bmp.resize(file_size as usize, 0);
    fs::write(path, bmp).expect("write bmp file");
}
