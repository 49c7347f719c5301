use std::f32::consts::TAU;

/// Supplies the angle a sticker is frozen at when it is armed.
pub trait RotationSource {
    /// An angle in `[0, 2π)`
    fn next_rotation(&mut self) -> f32;
}

/// Uniformly random rotations, drawn from v4 UUID entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRotation;

/// The low 53 bits of a v4 UUID are untouched by its version and variant
/// fields, and fill an f64 mantissa exactly.
const MANTISSA_BITS: u32 = 53;

impl RotationSource for RandomRotation {
    fn next_rotation(&mut self) -> f32 {
        let bits = uuid::Uuid::new_v4().as_u128() & ((1u128 << MANTISSA_BITS) - 1);
        let unit = bits as f64 / (1u64 << MANTISSA_BITS) as f64;
        (unit * std::f64::consts::TAU) as f32 % TAU
    }
}

impl<F> RotationSource for F
where
    F: FnMut() -> f32,
{
    fn next_rotation(&mut self) -> f32 {
        self()
    }
}
