//! Spherical harmonics presets.
//!
//! Every constant here is folded at compile time by [`sqrt`].

pub use crate::function::sqrt::sqrt;

use std::f32::consts::PI;

/// The maximum degree of spherical harmonics
pub const SH_DEGREE_MAX: u32 = 3;

/// The count of spherical harmonics coefficients
pub const SH_COUNT_MAX: usize = (SH_DEGREE_MAX as usize + 1).pow(2);

/// `sqrt(pi)`
pub const SQRT_PI: f32 = sqrt(PI);
/// `sqrt(2)`
pub const SQRT_2: f32 = sqrt(2.0);
/// `sqrt(3)`
pub const SQRT_3: f32 = sqrt(3.0);
/// `sqrt(5)`
pub const SQRT_5: f32 = sqrt(5.0);
/// `sqrt(7)`
pub const SQRT_7: f32 = sqrt(7.0);
/// `sqrt(15)`
pub const SQRT_15: f32 = sqrt(15.0);
/// `sqrt(21)`
pub const SQRT_21: f32 = sqrt(21.0);
/// `sqrt(35)`
pub const SQRT_35: f32 = sqrt(35.0);
/// `sqrt(105)`
pub const SQRT_105: f32 = sqrt(105.0);

/// The real coefficients of orthonormalized spherical harmonics from degree 0 to 3
///
/// The coefficient of degree `L` and order `M` is at `L^2 + L + M`.
///
/// ## Examples
///
/// ```rust
/// use gausplat_harmonics::preset::spherical_harmonics::SH_COEF;
///
/// let target = [
///     0.28209479177387814,
///     -0.4886025119029199,
///     0.4886025119029199,
///     -0.4886025119029199,
///     1.0925484305920792,
///     -1.0925484305920792,
///     0.31539156525252005,
///     -1.0925484305920792,
///     0.5462742152960396,
///     -0.5900435899266435,
///     2.890611442640554,
///     -0.4570457994644658,
///     0.3731763325901154,
///     -0.4570457994644658,
///     1.445305721320277,
///     -0.5900435899266435,
/// ];
///
/// for (output, target) in SH_COEF.into_iter().zip(target) {
///     assert!((output as f64 - target).abs() < 1e-6, "{output} != {target}");
/// }
/// ```
pub const SH_COEF: [f32; SH_COUNT_MAX] = [
    // L = 0
    1.0 / (2.0 * SQRT_PI),
    // L = 1
    -(SQRT_3 / (2.0 * SQRT_PI)),
    SQRT_3 / (2.0 * SQRT_PI),
    -(SQRT_3 / (2.0 * SQRT_PI)),
    // L = 2
    SQRT_15 / (2.0 * SQRT_PI),
    -(SQRT_15 / (2.0 * SQRT_PI)),
    SQRT_5 / (4.0 * SQRT_PI),
    -(SQRT_15 / (2.0 * SQRT_PI)),
    SQRT_15 / (4.0 * SQRT_PI),
    // L = 3
    -(SQRT_2 * SQRT_35 / (8.0 * SQRT_PI)),
    SQRT_105 / (2.0 * SQRT_PI),
    -(SQRT_2 * SQRT_21 / (8.0 * SQRT_PI)),
    SQRT_7 / (4.0 * SQRT_PI),
    -(SQRT_2 * SQRT_21 / (8.0 * SQRT_PI)),
    SQRT_105 / (4.0 * SQRT_PI),
    -(SQRT_2 * SQRT_35 / (8.0 * SQRT_PI)),
];
