//! Enumeration and set generators.

use crate::generator::GenerateError;
use mess_core::{FieldType, GeneratedValue};
use rand::seq::SliceRandom;
use rand::Rng;

/// Select exactly one option uniformly.
pub fn generate_enum<R: Rng>(
    rng: &mut R,
    options: &[String],
) -> Result<GeneratedValue, GenerateError> {
    options
        .choose(rng)
        .map(|option| GeneratedValue::Text(option.clone()))
        .ok_or(GenerateError::EmptyOptions(FieldType::Enum))
}

/// Select a random, possibly empty subset of the options.
///
/// Each option is kept with probability 1/2; kept options stay in their
/// original order.
pub fn generate_set<R: Rng>(rng: &mut R, options: &[String]) -> GeneratedValue {
    let items = options
        .iter()
        .filter(|_| rng.gen_bool(0.5))
        .cloned()
        .collect();

    GeneratedValue::Set(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_enum() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = options(&["a", "b", "c"]);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let value = generate_enum(&mut rng, &pool).unwrap();
            let s = value.as_str().unwrap().to_string();
            assert!(pool.contains(&s));
            seen.insert(s);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_generate_enum_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_enum(&mut rng, &[]),
            Err(GenerateError::EmptyOptions(FieldType::Enum))
        );
    }

    #[test]
    fn test_generate_set_subsets() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = options(&["x", "y"]);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let value = generate_set(&mut rng, &pool);
            let items = value.as_set().unwrap().to_vec();
            assert!(items.iter().all(|item| pool.contains(item)));
            seen.insert(items);
        }

        // Every subset is reachable, and "y" never precedes "x"
        let expected: HashSet<Vec<String>> = [
            vec![],
            options(&["x"]),
            options(&["y"]),
            options(&["x", "y"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_generate_set_preserves_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = options(&["a", "b", "c", "d", "e", "f"]);

        for _ in 0..200 {
            let value = generate_set(&mut rng, &pool);
            let positions: Vec<usize> = value
                .as_set()
                .unwrap()
                .iter()
                .map(|item| pool.iter().position(|p| p == item).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_generate_set_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_set(&mut rng, &[]), GeneratedValue::Set(vec![]));
    }
}
