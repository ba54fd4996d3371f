//! Builds the render plan for a lens configuration: marker positions,
//! ray polylines and axis bounds, all in world coordinates (x in cm along
//! the optical axis, y in arbitrary height units).

pub mod lens;

use lens::{ImageDistance, LensKind};

use egui::{Pos2, Rangef, pos2};
use static_assertions::const_assert;

pub const FOCAL_LENGTH_DEFAULT: f32 = 10.0;
pub const OBJECT_DISTANCE_DEFAULT: f32 = 20.0;

/// Padding beyond the furthest marker when fitting the x axis.
pub const AXIS_MARGIN: f32 = 10.0;
/// Vertical extent of the diagram.
pub const HEIGHT_RANGE: Rangef = Rangef { min: -3.0, max: 3.0 };

pub const OBJECT_HEIGHT: f32 = 0.5;
pub const IMAGE_HEIGHT: f32 = -0.5;
pub const LENS_WIDTH: f32 = 2.0;
pub const LENS_HEIGHT: f32 = 6.0;

const_assert!(AXIS_MARGIN > 0.0);
const_assert!(HEIGHT_RANGE.min < HEIGHT_RANGE.max);
const_assert!(LENS_HEIGHT <= HEIGHT_RANGE.max - HEIGHT_RANGE.min);

/// Inputs for one diagram. Built fresh on every successful update,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensConfiguration {
    pub kind: LensKind,
    pub focal_length: f32,
    pub object_distance: f32,
}

impl Default for LensConfiguration {
    fn default() -> Self {
        LensConfiguration {
            kind: LensKind::default(),
            focal_length: FOCAL_LENGTH_DEFAULT,
            object_distance: OBJECT_DISTANCE_DEFAULT,
        }
    }
}

/// Everything the canvas needs to draw one diagram. Derived from a
/// [`LensConfiguration`] by [`Diagram::compute`] and replaced wholesale
/// on each update.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub config: LensConfiguration,
    pub image_distance: ImageDistance,
    pub object_marker: Pos2,
    pub image_marker: Option<Pos2>,
    /// Two illustrative rays from the object through the lens to the image,
    /// empty when the image is at infinity.
    pub rays: Vec<[Pos2; 3]>,
    pub x_bounds: Rangef,
}

impl Diagram {
    pub fn compute(config: LensConfiguration) -> Self {
        let image_distance = config
            .kind
            .image_distance(config.focal_length, config.object_distance);

        let object_x = -config.object_distance;
        let object_marker = pos2(object_x, OBJECT_HEIGHT);

        let (image_marker, rays) = match image_distance {
            ImageDistance::Finite(d_i) => {
                let image = pos2(d_i, IMAGE_HEIGHT);
                // One ray kinked below the lens centre, one above.
                let rays = vec![
                    [object_marker, pos2(0.0, 0.3), image],
                    [object_marker, pos2(0.0, 0.7), image],
                ];
                (Some(image), rays)
            }
            ImageDistance::Infinite => (None, Vec::new()),
        };

        let x_bounds = normalised(match image_distance {
            ImageDistance::Finite(d_i) => Rangef {
                min: object_x.min(-d_i) - AXIS_MARGIN,
                max: config.object_distance.max(d_i) + AXIS_MARGIN,
            },
            // Only the object extent when the image is at infinity.
            ImageDistance::Infinite => Rangef {
                min: object_x.min(config.object_distance) - AXIS_MARGIN,
                max: config.object_distance.max(object_x) + AXIS_MARGIN,
            },
        });

        Diagram {
            config,
            image_distance,
            object_marker,
            image_marker,
            rays,
            x_bounds,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Lens Type: {}, Focal Length: {} cm",
            self.config.kind,
            format_length(self.config.focal_length)
        )
    }
}

// Negative distances can invert the raw axis range.
fn normalised(range: Rangef) -> Rangef {
    if range.min <= range.max {
        range
    } else {
        Rangef::new(range.max, range.min)
    }
}

// Integral values keep one decimal ("10.0"), anything else prints as-is.
fn format_length(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
