//! RGB pixel values carried through carving without quantization

/// A single RGB sample
///
/// Channels are conventionally 0-255 but are never clamped here, so a grid
/// loaded from text is written back exactly as it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub red: u32,
    /// Green channel
    pub green: u32,
    /// Blue channel
    pub blue: u32,
}

impl Pixel {
    /// Create a pixel from its three channels
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Squared colour distance between two pixels
    ///
    /// Channels are widened to `i128` before subtracting, so neither a darker
    /// `self` nor a full-range `u32` difference can wrap or overflow.
    pub const fn squared_difference(&self, other: &Self) -> i128 {
        let dr = self.red as i128 - other.red as i128;
        let dg = self.green as i128 - other.green as i128;
        let db = self.blue as i128 - other.blue as i128;
        dr * dr + dg * dg + db * db
    }

    /// Channels as an array in `[red, green, blue]` order
    pub const fn channels(&self) -> [u32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u32; 3]> for Pixel {
    fn from([red, green, blue]: [u32; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        let [red, green, blue] = rgb.0;
        Self::new(u32::from(red), u32::from(green), u32::from(blue))
    }
}
