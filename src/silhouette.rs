mod motion;
mod presets;

pub use motion::{lerp, parallax_offsets, FloatFrame, SHAPE_A_TRAVEL, SHAPE_B_TRAVEL};
pub use presets::{FloatIconSpec, ShapeKind, ShapePreset, Variant, VariantConfig};
