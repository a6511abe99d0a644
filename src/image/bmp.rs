use std::io::{self, Write};

/// Size of the `BITMAPFILEHEADER` block.
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the `BITMAPINFOHEADER` block.
pub const INFO_HEADER_SIZE: u32 = 40;

const MAGIC: [u8; 2] = *b"BM";
const BITS_PER_PIXEL: u16 = 24;

/// Bytes per pixel row once padded to a multiple of four.
pub fn row_stride(width: u16) -> usize {
    (width as usize * 3 + 3) / 4 * 4
}

/// The fields of the two BMP headers that vary or matter to readers.
/// Reserved, resolution and palette fields are always written as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl BmpHeader {
    /// Header for an uncompressed, bottom-up 24-bit image.
    /// Returns `None` when the file size does not fit the 32-bit size fields.
    pub fn new(width: u16, height: u16) -> Option<Self> {
        let pixel_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
        let image_size = row_stride(width)
            .checked_mul(height as usize)
            .and_then(|size| u32::try_from(size).ok())?;
        Some(BmpHeader {
            file_size: image_size.checked_add(pixel_offset)?,
            pixel_offset,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
        })
    }

    /// Serializes both headers, little-endian, exactly as they appear at the start of the file.
    pub fn to_bytes(&self) -> [u8; 54] {
        let mut bytes = [0u8; 54];
        // BITMAPFILEHEADER
        bytes[0..2].copy_from_slice(&MAGIC);
        bytes[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        bytes[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        // BITMAPINFOHEADER
        bytes[14..18].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        bytes[18..22].copy_from_slice(&self.width.to_le_bytes());
        bytes[22..26].copy_from_slice(&self.height.to_le_bytes());
        bytes[26..28].copy_from_slice(&self.planes.to_le_bytes());
        bytes[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        bytes[30..34].copy_from_slice(&self.compression.to_le_bytes());
        bytes[34..38].copy_from_slice(&self.image_size.to_le_bytes());
        bytes
    }

    /// Reads the headers back from the start of a BMP file.
    /// Returns `None` if the data is too short or does not start with `BM`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize || bytes[0..2] != MAGIC {
            return None;
        }
        let u16_at = |i: usize| Some(u16::from_le_bytes(bytes[i..i + 2].try_into().ok()?));
        let u32_at = |i: usize| Some(u32::from_le_bytes(bytes[i..i + 4].try_into().ok()?));
        let i32_at = |i: usize| Some(i32::from_le_bytes(bytes[i..i + 4].try_into().ok()?));

        Some(BmpHeader {
            file_size: u32_at(2)?,
            pixel_offset: u32_at(10)?,
            width: i32_at(18)?,
            height: i32_at(22)?,
            planes: u16_at(26)?,
            bits_per_pixel: u16_at(28)?,
            compression: u32_at(30)?,
            image_size: u32_at(34)?,
        })
    }
}

/// Writes `pixels` (row-major RGB triples, top row first) as a 24-bit BMP to `sink`.
///
/// The complete header goes out in a single write before any pixel data. Rows are written
/// bottom-up with each pixel in BGR order and zero padding to a four byte boundary.
pub fn write_bmp<W: Write + ?Sized>(
    pixels: &[u8],
    width: u16,
    height: u16,
    sink: &mut W,
) -> io::Result<()> {
    let header = BmpHeader::new(width, height).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("a {}x{} image is too large for a BMP file", width, height),
        )
    })?;
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "expected {} pixel bytes for a {}x{} image, got {}",
                expected,
                width,
                height,
                pixels.len()
            ),
        ));
    }

    sink.write_all(&header.to_bytes())?;

    let stride = row_stride(width);
    // Padding bytes stay zero, only the pixel part is overwritten per row
    let mut row = vec![0u8; stride];
    for line in pixels.chunks_exact((width as usize * 3).max(3)).rev() {
        for (dst, rgb) in row.chunks_exact_mut(3).zip(line.chunks_exact(3)) {
            dst.copy_from_slice(&[rgb[2], rgb[1], rgb[0]]);
        }
        sink.write_all(&row)?;
    }
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_stride() {
        assert_eq!(row_stride(5), 16);
        assert_eq!(row_stride(4), 12);
        assert_eq!(row_stride(7), 24);
        assert_eq!(row_stride(1), 4);
    }

    #[test]
    fn test_header_layout() {
        let bytes = BmpHeader::new(5, 7).unwrap().to_bytes();
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), 54 + 16 * 7);
        assert_eq!(&bytes[6..10], &[0, 0, 0, 0]);
        assert_eq!(u32::from_le_bytes(bytes[10..14].try_into().unwrap()), 54);
        assert_eq!(u32::from_le_bytes(bytes[14..18].try_into().unwrap()), 40);
        assert_eq!(u16::from_le_bytes(bytes[28..30].try_into().unwrap()), 24);
        assert!(bytes[38..54].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_header_parse() {
        let header = BmpHeader::new(41, 13).unwrap();
        assert_eq!(BmpHeader::parse(&header.to_bytes()), Some(header));
        assert_eq!(BmpHeader::parse(&[0u8; 20]), None);
        let mut bad_magic = header.to_bytes();
        bad_magic[0] = b'X';
        assert_eq!(BmpHeader::parse(&bad_magic), None);
    }

    #[test]
    fn test_rows_bottom_up_bgr_padded() {
        // 2x2 image: top row red, green; bottom row blue, white
        let pixels = [
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        let mut out = Vec::new();
        write_bmp(&pixels, 2, 2, &mut out).unwrap();
        assert_eq!(out.len(), 54 + 8 * 2);
        // Bottom row first: blue, white, two padding bytes
        assert_eq!(&out[54..62], &[255, 0, 0, 255, 255, 255, 0, 0]);
        // Then the top row: red, green
        assert_eq!(&out[62..70], &[0, 0, 255, 0, 255, 0, 0, 0]);
    }

    #[test]
    fn test_wrong_pixel_count() {
        let mut out = Vec::new();
        let err = write_bmp(&[0u8; 10], 2, 2, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        assert_eq!(BmpHeader::new(u16::MAX, u16::MAX), None);
        let header = BmpHeader::new(3841, 3841).unwrap();
        assert_eq!(header.file_size as usize, 54 + row_stride(3841) * 3841);

        // Rejected before the pixel buffer is even looked at
        let mut out = Vec::new();
        let err = write_bmp(&[], u16::MAX, u16::MAX, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("too large"));
        assert!(out.is_empty());
    }
}
