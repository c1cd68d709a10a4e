use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;


/// Builds a shuffled multiple-choice pool holding every correct value once,
/// padded with distractors from `all_values` up to `desired_size`. Empty
/// values are never used as distractors.
pub fn build_option_pool<R: Rng + ?Sized>(
    all_values: &[String],
    correct_values: &[String],
    desired_size: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<String> = correct_values.iter().unique().cloned().collect();
    let target_size = desired_size.max(pool.len().max(1));

    let mut distractors: Vec<&String> = all_values.iter().collect();
    distractors.shuffle(rng);
    for value in distractors {
        if pool.len() >= target_size {
            break;
        }
        if value.is_empty() || pool.contains(value) {
            continue;
        }
        pool.push(value.clone());
    }

    pool.shuffle(rng);
    pool
}
