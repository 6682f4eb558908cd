/// An RGBA colour value. Cells, brushes, and all UI chrome use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Byte order matches the `pixels` frame layout.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// Brush colours offered in the palette strip, in display order.
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const PEAR: Rgba = Rgba::rgb(203, 255, 101);
pub const DARK_GREEN: Rgba = Rgba::rgb(0, 127, 0);
pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const GRAY: Rgba = Rgba::rgb(127, 127, 127);
pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
pub const ORANGE: Rgba = Rgba::rgb(255, 159, 0);
pub const OLIVE: Rgba = Rgba::rgb(127, 127, 0);
pub const PINK: Rgba = Rgba::rgb(255, 63, 255);
pub const VIOLET: Rgba = Rgba::rgb(127, 127, 255);
pub const CHARTREUSE: Rgba = Rgba::rgb(127, 255, 0);
pub const MAGENTA: Rgba = Rgba::rgb(255, 0, 127);

pub const BRUSH_COLORS: [Rgba; 16] = [
    BLACK, BLUE, RED, PEAR, DARK_GREEN, GREEN, YELLOW, WHITE, GRAY, CYAN, ORANGE, OLIVE, PINK,
    VIOLET, CHARTREUSE, MAGENTA,
];

// UI chrome colours.
pub const CANVAS: Rgba = Rgba::rgb(236, 252, 246);
pub const PANEL: Rgba = Rgba::rgb(250, 228, 230);
pub const ACCENT: Rgba = Rgba::rgb(255, 205, 182);
pub const INK: Rgba = Rgba::rgb(35, 26, 19);
