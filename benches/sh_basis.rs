//! ## Usage
//!
//! To run the benchmarks, execute the following command in the console:
//!
//! ```sh
//! cargo bench --bench sh-basis
//! ```

use divan::{black_box, Bencher};
use gausplat_harmonics::{
    function::sqrt::sqrt,
    lobe::{sample_gallery, Lobe, LobeSamplingOptions},
    spherical_harmonics::sh_basis_direction,
};

fn main() {
    divan::main();
}

mod newton_sqrt {
    use super::*;

    #[divan::bench(sample_count = 100, sample_size = 2)]
    fn newton(bencher: Bencher) {
        bencher.with_inputs(data::random_radicands()).bench_local_refs(|v| {
            v.iter().map(|a| sqrt(black_box(*a))).sum::<f32>()
        });
    }

    #[divan::bench(sample_count = 100, sample_size = 2)]
    fn library(bencher: Bencher) {
        bencher.with_inputs(data::random_radicands()).bench_local_refs(|v| {
            v.iter().map(|a| black_box(*a).sqrt()).sum::<f32>()
        });
    }
}

mod basis {
    use super::*;

    #[divan::bench(sample_count = 100, sample_size = 2)]
    fn directions(bencher: Bencher) {
        bencher
            .with_inputs(data::random_directions())
            .bench_local_refs(|v| {
                v.iter()
                    .map(|d| sh_basis_direction(black_box(d)))
                    .fold(0.0, |sum, values| sum + values[15])
            });
    }
}

mod lobe_sampling {
    use super::*;

    #[divan::bench(sample_count = 20)]
    fn sample() -> usize {
        let options = LobeSamplingOptions::default();
        Lobe::all()
            .next()
            .and_then(|lobe| lobe.sample(black_box(&options)).ok())
            .map_or(0, |mesh| mesh.size())
    }

    #[divan::bench(sample_count = 20)]
    fn gallery() -> usize {
        let options = LobeSamplingOptions::default();
        sample_gallery(black_box(&options)).map_or(0, |meshes| meshes.len())
    }
}

mod data {
    use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
    use rand_distr::UnitSphere;

    const SIZE: usize = 1 << 16;
    const RADICAND_MIN: f32 = 0.0;
    const RADICAND_MAX: f32 = 1e6;

    pub fn random_radicands() -> impl FnMut() -> Vec<f32> {
        || {
            StdRng::seed_from_u64(0)
                .sample_iter(Uniform::new_inclusive(RADICAND_MIN, RADICAND_MAX))
                .take(SIZE)
                .collect()
        }
    }

    pub fn random_directions() -> impl FnMut() -> Vec<[f32; 3]> {
        || {
            StdRng::seed_from_u64(0)
                .sample_iter(UnitSphere)
                .take(SIZE)
                .collect()
        }
    }
}
