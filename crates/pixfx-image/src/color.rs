/// An RGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use pixfx_image::Color;
///
/// let color = Color::from_packed(0x00ff8000);
///
/// assert_eq!(color, Color::new(255, 128, 0));
/// assert_eq!(color.to_packed(), 0xff8000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Pure red.
    pub const RED: Color = Color::new(255, 0, 0);

    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` integer.
    ///
    /// Only the low 24 bits are read, so `0xAARRGGBB` values coming from
    /// image codecs are accepted as well.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Pack the color into a `0xRRGGBB` integer.
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The channels as an array in `[r, g, b]` order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn color_packed() {
        let color = Color::new(0x12, 0x34, 0x56);
        assert_eq!(color.to_packed(), 0x123456);
        assert_eq!(Color::from_packed(0x123456), color);
    }

    #[test]
    fn color_packed_ignores_alpha() {
        assert_eq!(Color::from_packed(0xff000000), Color::BLACK);
        assert_eq!(Color::from_packed(0xffffffff), Color::WHITE);
    }

    #[test]
    fn color_array() {
        let rgb: [u8; 3] = Color::RED.into();
        assert_eq!(rgb, [255, 0, 0]);
        assert_eq!(Color::from([1, 2, 3]), Color::new(1, 2, 3));
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::new(255, 0, 16).to_string(), "#ff0010");
    }
}
