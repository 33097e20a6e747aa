//! Lobe geometry of spherical harmonics.
//!
//! A lobe is the surface `d * |Y(d)|` over unit directions `d`,
//! colored by the sign of `Y(d)`. It is sampled on a polar grid
//! and laid out as line strips, one per azimuth.

pub mod vertex;

pub use crate::spherical_harmonics::*;
pub use burn::config::Config;
pub use vertex::*;

use bytemuck::cast_slice;
use humansize::{format_size, BINARY};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::{f32::consts::PI, fmt};

/// The maximum of [`LobeSamplingOptions::resolution`]
pub const LOBE_RESOLUTION_MAX: u32 = 1 << 12;

/// The minimum of [`LobeSamplingOptions::resolution`]
pub const LOBE_RESOLUTION_MIN: u32 = 2;

/// The options for [`Lobe::sample`].
#[derive(Config, Copy, Debug)]
pub struct LobeSamplingOptions {
    /// Sample count along both polar angle and azimuth.
    ///
    /// It should be in [`LOBE_RESOLUTION_MIN`]..=[`LOBE_RESOLUTION_MAX`].
    #[config(default = 100)]
    pub resolution: u32,
    /// Distance between neighboring lobes in [`Lobe::offset`].
    #[config(default = 1.5)]
    pub spacing: f32,
}

/// The lobe of a single spherical harmonic.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Lobe {
    pub sh: ShIndex,
}

/// Sampled lobe geometry.
///
/// It is only made by [`Lobe::sample`], so each strip holds at least
/// [`LOBE_RESOLUTION_MIN`] vertices.
#[derive(Clone, PartialEq)]
pub struct LobeMesh {
    lobe: Lobe,
    /// The count of vertices in each strip.
    strip_len: usize,
    /// `[N_phi * N_theta]`
    vertices: Vec<LobeVertex>,
}

impl LobeSamplingOptions {
    /// Checking the options.
    pub fn validate(&self) -> Result<&Self, Error> {
        let resolution = self.resolution;
        if !(LOBE_RESOLUTION_MIN..=LOBE_RESOLUTION_MAX).contains(&resolution) {
            return Err(Error::Validation(
                format!("resolution ({resolution})"),
                format!("in {LOBE_RESOLUTION_MIN}..={LOBE_RESOLUTION_MAX}"),
            ));
        }
        if !self.spacing.is_finite() {
            return Err(Error::Validation(
                format!("spacing ({})", self.spacing),
                "finite".into(),
            ));
        }

        Ok(self)
    }
}

impl Default for LobeSamplingOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Lobe {
    #[inline]
    pub fn new(
        degree: u32,
        order: i32,
    ) -> Result<Self, Error> {
        Ok(Self {
            sh: ShIndex::new(degree, order)?,
        })
    }

    /// Iterating over all lobes in the order of [`sh_basis`] outputs.
    pub fn all() -> impl Iterator<Item = Self> {
        ShIndex::all().map(|sh| Self { sh })
    }

    /// The position of the lobe in a gallery of all lobes.
    ///
    /// Each degree is a row centered at the origin.
    /// The rows go downwards from `z = 2 * spacing`.
    pub fn offset(
        &self,
        spacing: f32,
    ) -> [f32; 3] {
        let degree = self.sh.degree() as f32;
        let order = self.sh.order() as f32;
        [order * spacing, 0.0, (2.0 - degree) * spacing]
    }

    /// Sampling the lobe on a polar grid.
    ///
    /// For `N = resolution`, the strip `i` holds the vertices at azimuth
    /// `phi = 2 * pi * i / (N - 1)` with polar angles
    /// `theta = pi * j / (N - 1)` for `j` in `0..N`.
    pub fn sample(
        &self,
        options: &LobeSamplingOptions,
    ) -> Result<LobeMesh, Error> {
        options.validate()?;

        // N
        let resolution = options.resolution as usize;
        // pi / (N - 1)
        let theta_step = PI / (resolution - 1) as f32;
        // 2 * pi / (N - 1)
        let phi_step = 2.0 * PI / (resolution - 1) as f32;
        let index = self.sh.index();

        let vertices = (0..resolution * resolution)
            .into_par_iter()
            .map(|k| {
                let (i, j) = (k / resolution, k % resolution);
                let direction = direction_from_polar(
                    j as f32 * theta_step,
                    i as f32 * phi_step,
                );
                let value = sh_basis_direction(&direction)[index];
                LobeVertex::new(&direction, value)
            })
            .collect::<Vec<_>>();

        let mesh = LobeMesh {
            lobe: *self,
            strip_len: resolution,
            vertices,
        };

        log::debug!(
            target: "gausplat::harmonics::lobe::sample",
            "degree ({}), order ({}), size ({})",
            self.sh.degree(),
            self.sh.order(),
            mesh.size_readable(),
        );

        Ok(mesh)
    }
}

/// Sampling all lobes placed at [`Lobe::offset`].
pub fn sample_gallery(
    options: &LobeSamplingOptions,
) -> Result<Vec<LobeMesh>, Error> {
    options.validate()?;

    let meshes = Lobe::all()
        .map(|lobe| {
            let mut mesh = lobe.sample(options)?;
            mesh.translate(lobe.offset(options.spacing));
            Ok(mesh)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    log::debug!(
        target: "gausplat::harmonics::lobe::sample_gallery",
        "lobe count ({})",
        meshes.len(),
    );

    Ok(meshes)
}

impl LobeMesh {
    #[inline]
    pub const fn lobe(&self) -> &Lobe {
        &self.lobe
    }

    /// The count of vertices in each strip.
    #[inline]
    pub const fn strip_len(&self) -> usize {
        self.strip_len
    }

    /// `[N_phi * N_theta]`
    #[inline]
    pub fn vertices(&self) -> &[LobeVertex] {
        &self.vertices
    }

    /// The line strips, each of [`Self::strip_len`] vertices.
    #[inline]
    pub fn strips(&self) -> impl Iterator<Item = &[LobeVertex]> {
        self.vertices.chunks_exact(self.strip_len)
    }

    #[inline]
    pub fn strip_count(&self) -> usize {
        self.vertices.len() / self.strip_len
    }

    /// Moving all vertices by `offset`.
    pub fn translate(
        &mut self,
        offset: [f32; 3],
    ) -> &mut Self {
        self.vertices.iter_mut().for_each(|vertex| {
            vertex
                .position
                .iter_mut()
                .zip(offset)
                .for_each(|(p, o)| *p += o);
        });
        self
    }

    /// The vertices as raw bytes for uploading.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Byte size of the vertices.
    #[inline]
    pub fn size(&self) -> usize {
        std::mem::size_of_val(self.vertices.as_slice())
    }

    /// Readable byte size of the vertices.
    #[inline]
    pub fn size_readable(&self) -> String {
        format_size(self.size(), BINARY.decimal_places(1))
    }
}

impl fmt::Debug for LobeMesh {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LobeMesh")
            .field("lobe", &self.lobe)
            .field("strip_len", &self.strip_len)
            .field("vertices.len()", &self.vertices.len())
            .field("size", &self.size_readable())
            .finish()
    }
}
