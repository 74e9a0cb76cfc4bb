#[cfg(test)]
mod tests {
    use rand::Rng;

    use hikari::{
        math::{Vec2, Vec3},
        sampling::{cosine_sample_hemisphere, generate_jitter, hash, seeded_engine},
    };

    fn draws(iteration: u32, pixel: u32, depth: u32) -> Vec<u32> {
        let mut rng = seeded_engine(iteration, pixel, depth);
        (0..8).map(|_| rng.gen::<u32>()).collect()
    }

    #[test]
    fn hash_spreads() {
        assert_ne!(hash(0), hash(1));
        assert_ne!(hash(1), hash(2));
        assert_eq!(hash(1234), hash(1234));
    }

    #[test]
    fn engine_is_deterministic() {
        assert_eq!(draws(3, 17, 2), draws(3, 17, 2));
        assert_eq!(draws(0, 0, 0), draws(0, 0, 0));
    }

    #[test]
    fn engine_streams_differ() {
        let base = draws(3, 17, 2);
        assert_ne!(base, draws(4, 17, 2));
        assert_ne!(base, draws(3, 18, 2));
        assert_ne!(base, draws(3, 17, 3));
    }

    #[test]
    fn jitter_stream_is_not_first_bounce_stream() {
        // Jitter uses depth 0, shading of bounce 0 uses depth 1
        for pixel in 0..16 {
            assert_ne!(draws(5, pixel, 0), draws(5, pixel, 1));
        }
    }

    #[test]
    fn engine_unit_floats() {
        let mut rng = seeded_engine(1, 2, 3);
        for _ in 0..1000 {
            let u: f32 = rng.gen();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn jitter_in_pixel() {
        let mut jitter = vec![Vec2::zeros(); 64 * 64];
        generate_jitter(5, &mut jitter);
        for j in &jitter {
            assert!(j.x >= -0.5 && j.x < 0.5);
            assert!(j.y >= -0.5 && j.y < 0.5);
        }
    }

    #[test]
    fn jitter_is_deterministic() {
        let mut a = vec![Vec2::zeros(); 256];
        let mut b = vec![Vec2::zeros(); 256];
        generate_jitter(7, &mut a);
        generate_jitter(7, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_changes_per_iteration() {
        let mut a = vec![Vec2::zeros(); 256];
        let mut b = vec![Vec2::zeros(); 256];
        generate_jitter(0, &mut a);
        generate_jitter(1, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn jitter_is_permutation_of_pixel_draws() {
        // Shuffling moves offsets around but never changes them
        let mut unshuffled: Vec<(u32, u32)> = (0..128u32)
            .map(|i| {
                let mut rng = seeded_engine(9, i, 0);
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                ((u - 0.5).to_bits(), (v - 0.5).to_bits())
            })
            .collect();
        let mut jitter = vec![Vec2::zeros(); 128];
        generate_jitter(9, &mut jitter);
        let mut shuffled: Vec<(u32, u32)> = jitter
            .iter()
            .map(|j| (j.x.to_bits(), j.y.to_bits()))
            .collect();
        unshuffled.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(unshuffled, shuffled);
    }

    #[test]
    fn empty_jitter() {
        let mut jitter: Vec<Vec2<f32>> = Vec::new();
        generate_jitter(0, &mut jitter);
        assert!(jitter.is_empty());
    }

    #[test]
    fn hemisphere_samples() {
        let mut rng = seeded_engine(0, 0, 1);
        for _ in 0..1000 {
            let d: Vec3<f32> = cosine_sample_hemisphere(Vec2::new(rng.gen(), rng.gen()));
            assert!(d.z >= 0.0);
            assert!((d.len() - 1.0).abs() < 1e-4);
        }
    }
}
