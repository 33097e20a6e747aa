//! Real spherical harmonics from degree 0 to 3.

pub use crate::{error::Error, preset::spherical_harmonics::*};

/// Evaluating the real spherical harmonics basis at a direction.
///
/// `(x, y, z)` should be a unit vector. It is neither checked nor
/// normalized, so other vectors give scaled values.
///
/// The value of degree `L` and order `M` is at [`sh_index`]`(L, M)`.
///
/// ## Examples
///
/// ```rust
/// use gausplat_harmonics::spherical_harmonics::{sh_basis, SH_COEF};
///
/// const NORTH: [f32; 16] = sh_basis(0.0, 0.0, 1.0);
///
/// assert_eq!(NORTH[0], SH_COEF[0]);
/// assert_eq!(NORTH[2], SH_COEF[2]);
/// assert_eq!(NORTH[6], SH_COEF[6] * 2.0);
/// ```
pub const fn sh_basis(
    x: f32,
    y: f32,
    z: f32,
) -> [f32; SH_COUNT_MAX] {
    let c = &SH_COEF;

    let xy = x * y;
    let yz = y * z;
    let xz = x * z;
    let xx = x * x;
    let yy = y * y;
    let zz = z * z;
    let xyz = xy * z;

    [
        // L = 0
        c[0],
        // L = 1
        c[1] * y,
        c[2] * z,
        c[3] * x,
        // L = 2
        c[4] * xy,
        c[5] * yz,
        c[6] * (3.0 * zz - 1.0),
        c[7] * xz,
        c[8] * (xx - yy),
        // L = 3
        c[9] * y * (3.0 * xx - yy),
        c[10] * xyz,
        c[11] * y * (5.0 * zz - 1.0),
        c[12] * z * (5.0 * zz - 3.0),
        c[13] * x * (5.0 * zz - 1.0),
        c[14] * (xx - yy) * z,
        c[15] * x * (xx - 3.0 * yy),
    ]
}

/// [`sh_basis`] for a direction in `[x, y, z]`.
#[inline]
pub const fn sh_basis_direction(
    direction: &[f32; 3],
) -> [f32; SH_COUNT_MAX] {
    sh_basis(direction[0], direction[1], direction[2])
}

/// The unit direction of polar angle `theta` and azimuth `phi` in radians.
///
/// `[sin(theta) * cos(phi), sin(theta) * sin(phi), cos(theta)]`
#[inline]
pub fn direction_from_polar(
    theta: f32,
    phi: f32,
) -> [f32; 3] {
    let (theta_sin, theta_cos) = theta.sin_cos();
    let (phi_sin, phi_cos) = phi.sin_cos();
    [theta_sin * phi_cos, theta_sin * phi_sin, theta_cos]
}

/// The flat index of degree `L` and order `M`, i.e., `L^2 + L + M`.
///
/// The order should be in `-degree..=degree`. It is only checked in debug
/// builds. See [`ShIndex::new`] for a checked one.
#[inline]
pub const fn sh_index(
    degree: u32,
    order: i32,
) -> usize {
    debug_assert!(
        order.unsigned_abs() <= degree,
        "order should be in -degree..=degree"
    );
    ((degree * degree + degree) as i32 + order) as usize
}

/// The degree and order of the flat `index`.
///
/// It is the inverse of [`sh_index`].
pub const fn sh_degree_order(index: usize) -> (u32, i32) {
    let mut degree = 0;
    while (degree + 1) * (degree + 1) <= index {
        degree += 1;
    }
    let order = index as i32 - (degree * degree + degree) as i32;
    (degree as u32, order)
}

/// A checked pair of degree and order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShIndex {
    degree: u32,
    order: i32,
}

impl ShIndex {
    /// The degree should be no more than [`SH_DEGREE_MAX`] and
    /// the order should be in `-degree..=degree`.
    pub fn new(
        degree: u32,
        order: i32,
    ) -> Result<Self, Error> {
        if degree > SH_DEGREE_MAX {
            return Err(Error::Validation(
                format!("degree ({degree})"),
                format!("no more than {SH_DEGREE_MAX}"),
            ));
        }
        if order.unsigned_abs() > degree {
            return Err(Error::Validation(
                format!("order ({order})"),
                format!("in -{degree}..={degree}"),
            ));
        }

        Ok(Self { degree, order })
    }

    /// The index should be less than [`SH_COUNT_MAX`].
    pub fn from_index(index: usize) -> Result<Self, Error> {
        if index >= SH_COUNT_MAX {
            return Err(Error::Validation(
                format!("index ({index})"),
                format!("less than {SH_COUNT_MAX}"),
            ));
        }

        let (degree, order) = sh_degree_order(index);
        Ok(Self { degree, order })
    }

    #[inline]
    pub const fn degree(&self) -> u32 {
        self.degree
    }

    #[inline]
    pub const fn order(&self) -> i32 {
        self.order
    }

    /// The flat index in [`sh_basis`] outputs.
    #[inline]
    pub const fn index(&self) -> usize {
        sh_index(self.degree, self.order)
    }

    /// Iterating over all indices in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=SH_DEGREE_MAX).flat_map(|degree| {
            let degree_i32 = degree as i32;
            (-degree_i32..=degree_i32).map(move |order| Self { degree, order })
        })
    }
}

impl From<ShIndex> for usize {
    #[inline]
    fn from(index: ShIndex) -> Self {
        index.index()
    }
}

impl TryFrom<usize> for ShIndex {
    type Error = Error;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
