use rand::Rng;

use crate::engine::error::ParticleError;

/// Per-mesh position buffers padded to a common length.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedPositions {
    /// Length shared by every buffer in `sets`.
    pub max_count: usize,
    pub sets: Vec<Vec<[f32; 3]>>,
}

impl PaddedPositions {
    pub fn is_empty(&self) -> bool {
        self.max_count == 0
    }
}

/// Pad every vertex set to the length of the longest one.
///
/// Slots inside a set's original range keep their coordinate. Slots past it take the
/// coordinate of a uniformly chosen vertex from the same set, so a morph between two
/// meshes never pulls particles towards a point that was not on the source mesh.
pub fn pad_vertex_sets<R: Rng + ?Sized>(
    sets: &[Vec<[f32; 3]>],
    rng: &mut R,
) -> Result<PaddedPositions, ParticleError> {
    let max_count = sets.iter().map(Vec::len).max().unwrap_or(0);

    let mut padded = Vec::with_capacity(sets.len());
    for (index, original) in sets.iter().enumerate() {
        if original.len() == max_count {
            padded.push(original.clone());
            continue;
        }
        if original.is_empty() {
            return Err(ParticleError::EmptyMesh { index });
        }

        let mut positions = Vec::with_capacity(max_count);
        positions.extend_from_slice(original);
        positions.extend(
            (original.len()..max_count).map(|_| original[rng.random_range(0..original.len())]),
        );
        padded.push(positions);
    }

    Ok(PaddedPositions {
        max_count,
        sets: padded,
    })
}

/// Independent per-particle scalars in `[0, 1)`, used for size variation.
pub fn random_sizes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    (0..count).map(|_| rng.random::<f32>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn ramp(len: usize, offset: f32) -> Vec<[f32; 3]> {
        (0..len)
            .map(|i| {
                let v = i as f32 + offset;
                [v, v * 2.0, -v]
            })
            .collect()
    }

    #[test]
    fn output_length_matches_longest_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let sets = vec![ramp(3, 0.0), ramp(11, 100.0), ramp(1, 500.0), ramp(7, 900.0)];

        let padded = pad_vertex_sets(&sets, &mut rng).unwrap();

        assert_eq!(padded.max_count, 11);
        assert_eq!(padded.sets.len(), sets.len());
        assert!(padded.sets.iter().all(|s| s.len() == 11));
    }

    #[test]
    fn original_prefix_is_preserved_exactly() {
        let mut rng = StdRng::seed_from_u64(42);
        let sets = vec![ramp(4, 0.25), ramp(9, 10.5)];

        let padded = pad_vertex_sets(&sets, &mut rng).unwrap();

        for (original, out) in sets.iter().zip(&padded.sets) {
            assert_eq!(&out[..original.len()], original.as_slice());
        }
    }

    #[test]
    fn padded_slots_come_from_the_same_mesh() {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sets = vec![ramp(5, 0.0), ramp(64, 1000.0), ramp(2, -50.0)];

            let padded = pad_vertex_sets(&sets, &mut rng).unwrap();

            for (original, out) in sets.iter().zip(&padded.sets) {
                for p in &out[original.len()..] {
                    assert!(original.contains(p), "seed {seed}: {p:?} not in source mesh");
                }
            }
        }
    }

    #[test]
    fn single_vertex_mesh_repeats_its_vertex() {
        let mut rng = StdRng::seed_from_u64(1);
        let single = vec![[0.5, -1.0, 2.0]];
        let sets = vec![single.clone(), ramp(5, 3.0)];

        let padded = pad_vertex_sets(&sets, &mut rng).unwrap();

        assert_eq!(padded.sets[0].len(), 5);
        assert!(padded.sets[0].iter().all(|p| *p == single[0]));
        assert_eq!(padded.sets[1], sets[1]);
    }

    #[test]
    fn full_length_mesh_passes_through() {
        let mut rng = StdRng::seed_from_u64(3);
        let sets = vec![ramp(6, 0.0), ramp(6, 7.0)];

        let padded = pad_vertex_sets(&sets, &mut rng).unwrap();

        assert_eq!(padded.sets, sets);
    }

    #[test]
    fn same_seed_gives_same_padding() {
        let sets = vec![ramp(3, 0.0), ramp(40, 1.0)];

        let a = pad_vertex_sets(&sets, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = pad_vertex_sets(&sets, &mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn empty_inputs() {
        let mut rng = StdRng::seed_from_u64(0);

        let none = pad_vertex_sets(&[], &mut rng).unwrap();
        assert!(none.is_empty());
        assert!(none.sets.is_empty());

        let all_empty = pad_vertex_sets(&[Vec::new(), Vec::new()], &mut rng).unwrap();
        assert_eq!(all_empty.max_count, 0);
        assert_eq!(all_empty.sets, vec![Vec::<[f32; 3]>::new(), Vec::new()]);
    }

    #[test]
    fn empty_mesh_next_to_populated_one_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let sets = vec![ramp(4, 0.0), Vec::new()];

        let err = pad_vertex_sets(&sets, &mut rng).unwrap_err();

        assert_eq!(err, ParticleError::EmptyMesh { index: 1 });
    }

    #[test]
    fn sizes_are_unit_interval() {
        let mut rng = StdRng::seed_from_u64(5);
        let sizes = random_sizes(10_000, &mut rng);

        assert_eq!(sizes.len(), 10_000);
        assert!(sizes.iter().all(|s| (0.0..1.0).contains(s)));
    }
}
