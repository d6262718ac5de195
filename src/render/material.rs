/// An sRGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }
}

/// Physically based, translucent plastic used for the die body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMaterial {
    /// Base colour.
    pub color: Color,
    /// Microfacet roughness, 0 is mirror-like.
    pub roughness: f32,
    /// 0 for dielectric, 1 for metal.
    pub metalness: f32,
    /// Fraction of light passing through the surface.
    pub transmission: f32,
    /// Thickness used for refraction through the volume.
    pub thickness: f32,
    /// Index of refraction.
    pub ior: f32,
    /// Strength of the lacquer layer on top.
    pub clearcoat: f32,
    /// Roughness of the lacquer layer.
    pub clearcoat_roughness: f32,
    /// Whether the body blends with what is behind it.
    pub transparent: bool,
}

impl Default for SurfaceMaterial {
    /// Red translucent plastic with a strong specular coat.
    fn default() -> Self {
        Self {
            color: Color::from_hex(0x00ff_1b1b),
            roughness: 0.2,
            metalness: 0.1,
            transmission: 0.7,
            thickness: 1.4,
            ior: 1.4,
            clearcoat: 0.75,
            clearcoat_roughness: 0.2,
            transparent: true,
        }
    }
}

/// Opaque material for the pips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipMaterial {
    /// Base colour.
    pub color: Color,
    /// Faint self-illumination so pips read on the dark side.
    pub emissive: Color,
}

impl Default for PipMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::from_hex(0x0011_1111),
        }
    }
}
