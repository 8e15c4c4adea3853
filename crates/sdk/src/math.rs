//! Engine math types passed by value across the native ABI
//!
//! Layouts mirror the engine's `FVector`, `FRotator` and `FLinearColor`.

/// 3D vector (`FVector`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Rotation in degrees (`FRotator`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Linear RGBA colour (`FLinearColor`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FLinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl FLinearColor {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque colour from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(std::mem::size_of::<FVector>(), 12);
        assert_eq!(std::mem::size_of::<FRotator>(), 12);
        assert_eq!(std::mem::size_of::<FLinearColor>(), 16);
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(FLinearColor::RED.a, 1.0);
        assert_eq!(FLinearColor::RED.r, 1.0);
    }
}
