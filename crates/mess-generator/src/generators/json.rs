//! JSON document generator.

use crate::generators::text::{generate_word, generate_words};
use rand::Rng;
use serde_json::{json, Map, Value};

/// Deepest nesting level of generated containers.
const MAX_DEPTH: usize = 2;

/// Generate a JSON object with exactly `num` top-level keys.
pub fn generate_json<R: Rng>(rng: &mut R, num: usize) -> Value {
    generate_object(rng, num, 0)
}

fn generate_object<R: Rng>(rng: &mut R, num: usize, depth: usize) -> Value {
    let mut object = Map::with_capacity(num);
    for i in 0..num {
        // Index suffix keeps keys distinct
        let key = format!("{}_{i}", generate_word(rng));
        object.insert(key, generate_member(rng, depth));
    }
    Value::Object(object)
}

fn generate_member<R: Rng>(rng: &mut R, depth: usize) -> Value {
    let containers = if depth < MAX_DEPTH { 2 } else { 0 };

    match rng.gen_range(0..5 + containers) {
        0 => json!(rng.gen_range(-1000i64..=1000)),
        1 => json!((rng.gen_range(-1000.0f64..1000.0) * 100.0).round() / 100.0),
        2 => json!(rng.gen_bool(0.5)),
        3 => {
            let num = rng.gen_range(1..=3);
            json!(generate_words(rng, num))
        }
        4 => Value::Null,
        5 => {
            let len = rng.gen_range(0..=3);
            Value::Array((0..len).map(|_| generate_member(rng, depth + 1)).collect())
        }
        _ => {
            let len = rng.gen_range(1..=3);
            generate_object(rng, len, depth + 1)
        }
    }
}
