//! Lens kinds and the thin-lens image calculation.
//! To add a new kind, add it to the LensKind enum, give it a branch in
//! LensKind::retrieve_properties() and a sign in LensKind::image_distance()

use strum_macros::EnumIter;

use std::fmt;

/// Image position produced by the thin-lens formula. `Infinite` is the
/// valid result of a zero denominator, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageDistance {
    Finite(f32),
    Infinite,
}

impl ImageDistance {
    pub fn finite(&self) -> Option<f32> {
        match self {
            ImageDistance::Finite(d) => Some(*d),
            ImageDistance::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ImageDistance::Infinite)
    }
}

// Dropdown in the UI will be automatically populated with these options
#[derive(Debug, Clone, Copy, PartialEq, EnumIter)]
pub enum LensKind {
    Convex,
    Concave,
}

impl LensKind {
    /// Image distance from focal length and object distance.
    ///
    /// Convex: d_i = 1 / (1/f - 1/d_o). Concave: d_i = 1 / (1/f + 1/d_o).
    /// A zero focal length or object distance would make either reciprocal
    /// undefined, so both collapse to `Infinite`, as does an exactly-zero
    /// combined denominator (object at the focal point of a convex lens).
    pub fn image_distance(&self, focal_length: f32, object_distance: f32) -> ImageDistance {
        if focal_length == 0.0 || object_distance == 0.0 {
            return ImageDistance::Infinite;
        }
        let inverse = match self {
            LensKind::Convex => 1.0 / focal_length - 1.0 / object_distance,
            LensKind::Concave => 1.0 / focal_length + 1.0 / object_distance,
        };
        if inverse == 0.0 {
            ImageDistance::Infinite
        } else {
            ImageDistance::Finite(1.0 / inverse)
        }
    }

    pub fn properties(&self) -> LensProperties {
        self.retrieve_properties()
    }

    fn retrieve_properties(&self) -> LensProperties {
        match self {
            LensKind::Convex => LensProperties {
                name: "Convex",
                outline: (70, 110, 255),
                fill: (173, 216, 230),
            },
            LensKind::Concave => LensProperties {
                name: "Concave",
                outline: (160, 70, 215),
                fill: (255, 182, 193),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.properties().name
    }

    pub fn outline(&self) -> (u8, u8, u8) {
        self.properties().outline
    }

    pub fn fill(&self) -> (u8, u8, u8) {
        self.properties().fill
    }
}

impl Default for LensKind {
    fn default() -> Self {
        LensKind::Convex
    }
}

impl fmt::Display for LensKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LensProperties {
    pub name: &'static str,
    pub outline: (u8, u8, u8), // RGB
    pub fill: (u8, u8, u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn convex_reference_image_distance() {
        let d_i = LensKind::Convex.image_distance(10.0, 20.0);
        assert_relative_eq!(d_i.finite().unwrap(), 20.0, max_relative = 1e-6);
    }

    #[test]
    fn convex_object_at_focal_point_is_infinite() {
        assert!(LensKind::Convex.image_distance(10.0, 10.0).is_infinite());
    }

    #[test]
    fn concave_reference_image_distance() {
        let d_i = LensKind::Concave.image_distance(10.0, 20.0);
        assert_relative_eq!(d_i.finite().unwrap(), 20.0 / 3.0, max_relative = 1e-6);
    }

    #[test]
    fn zero_inputs_are_infinite() {
        assert!(LensKind::Convex.image_distance(0.0, 20.0).is_infinite());
        assert!(LensKind::Convex.image_distance(10.0, 0.0).is_infinite());
        assert!(LensKind::Concave.image_distance(0.0, 0.0).is_infinite());
    }

    #[test]
    fn concave_never_diverges_for_positive_inputs() {
        for d_o in [1.0_f32, 5.0, 10.0, 50.0] {
            let d_i = LensKind::Concave.image_distance(10.0, d_o);
            assert!(d_i.finite().unwrap() > 0.0);
        }
    }
}
