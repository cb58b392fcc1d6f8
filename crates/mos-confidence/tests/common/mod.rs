//! Shared test helpers: synthetic rating matrices
//!
//! Mirrors the demonstration data of a subjective experiment: each test
//! condition has an underlying success probability, linearly spaced over
//! (0, 1), and each subject's rating is `1 + Binomial(4, p)`.

use mos_core::RatingMatrix;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub fn synthetic_matrix(conditions: usize, subjects: usize, seed: u64) -> RatingMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<u8>> = (0..conditions)
        .map(|condition| {
            let p = (condition + 1) as f64 / (conditions + 1) as f64;
            (0..subjects)
                .map(|_| 1 + (0..4).map(|_| u8::from(rng.gen_bool(p))).sum::<u8>())
                .collect()
        })
        .collect();
    RatingMatrix::from_rows(&rows).unwrap()
}
