//! Square root by Newton's method, evaluable at compile time.
//!
//! ## Examples
//!
//! ```rust
//! use gausplat_harmonics::function::sqrt::sqrt;
//!
//! const SQRT_2: f32 = sqrt(2.0);
//!
//! assert!((SQRT_2 - std::f32::consts::SQRT_2).abs() <= f32::EPSILON);
//! assert_eq!(sqrt(0.0), 0.0);
//! assert!(sqrt(-1.0).is_nan());
//! ```

/// The count of iterations allowed after the residual stops decreasing.
pub const NEWTON_EXTRA_ITERATION_MAX: u32 = 4;

macro_rules! newton_sqrt {
    ($(#[$meta:meta])* $name:ident, $abs:ident, $float:ty) => {
        $(#[$meta])*
        pub const fn $name(a: $float) -> $float {
            // NaN fails both comparisons
            let is_valid = 0.0 <= a && a < <$float>::INFINITY;
            if !is_valid {
                return <$float>::NAN;
            }
            if a == 0.0 {
                return 0.0;
            }

            // 2^32
            const SCALE_UP: $float = 4294967296.0;
            // 2^-32
            const SCALE_DOWN: $float = 1.0 / SCALE_UP;
            // 2^16
            const SCALE_UP_HALF: $float = 65536.0;
            // 2^-16
            const SCALE_DOWN_HALF: $float = 1.0 / SCALE_UP_HALF;

            // a = a_s * scale^2, a_s in [2^-32, 2^32]
            let mut a = a;
            let mut scale: $float = 1.0;
            while a > SCALE_UP {
                a *= SCALE_DOWN;
                scale *= SCALE_UP_HALF;
            }
            while a < SCALE_DOWN {
                a *= SCALE_UP;
                scale *= SCALE_DOWN_HALF;
            }

            // x_0 <- a
            let mut x = a;
            let mut extra_iteration_count = 0;
            loop {
                // x_(n+1) <- x_n - (x_n^2 - a) / (2 * x_n)
                let x_next = x - (x * x - a) * 0.5 / x;
                let residual = $abs(x * x - a);
                let residual_next = $abs(x_next * x_next - a);

                if residual_next < residual {
                    x = x_next;
                } else if extra_iteration_count < NEWTON_EXTRA_ITERATION_MAX {
                    x = x_next;
                    extra_iteration_count += 1;
                } else {
                    return x * scale;
                }
            }
        }
    };
}

newton_sqrt!(
    /// Square root of `a` in single precision.
    ///
    /// The result is `NaN` if `a` is negative, infinite, or `NaN`.
    /// `sqrt(0.0)` is exactly `0.0`.
    ///
    /// Newton–Raphson iteration on `x^2 - a` starting from `a`.
    /// It continues while the residual `|x^2 - a|` strictly decreases,
    /// then runs up to [`NEWTON_EXTRA_ITERATION_MAX`] more iterations
    /// before returning the current estimate.
    sqrt,
    abs_f32,
    f32
);

newton_sqrt!(
    /// Square root of `a` in double precision.
    ///
    /// Same iteration and stopping rule as [`sqrt`].
    sqrt_f64,
    abs_f64,
    f64
);

#[inline]
const fn abs_f32(x: f32) -> f32 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

#[inline]
const fn abs_f64(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}
