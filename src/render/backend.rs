/// A rendered frame as tightly packed, row-major RGB8 pixels.
///
/// Frames are values: rendering always produces a fresh one and nothing mutates it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, `width * height * 3` long.
    pub data: Vec<u8>,
}

impl FrameRgb {
    /// Drop the alpha channel of an opaque RGBA8 buffer.
    pub(crate) fn from_opaque_rgba8(width: u32, height: u32, rgba: &[u8]) -> Self {
        let mut data = Vec::with_capacity(rgba.len() / 4 * 3);
        for px in rgba.chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        self.data.get(i..i + 3).map(|p| [p[0], p[1], p[2]])
    }

    /// Stable 64-bit content digest (xxh3) over dimensions and pixels.
    pub fn digest(&self) -> u64 {
        let mut buf = Vec::with_capacity(8 + self.data.len());
        buf.extend_from_slice(&self.width.to_le_bytes());
        buf.extend_from_slice(&self.height.to_le_bytes());
        buf.extend_from_slice(&self.data);
        xxhash_rust::xxh3::xxh3_64(&buf)
    }

    /// Copy the pixels into an `image` buffer for encoding.
    pub fn to_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
