//! Text generators: printable ASCII and lorem-style prose.

use rand::seq::SliceRandom;
use rand::Rng;

/// Vocabulary for words, sentences and paragraphs.
pub const WORDS: &[&str] = &[
    "a", "ac", "accumsan", "adipiscing", "aliquam", "aliquet", "amet", "ante", "arcu", "at",
    "augue", "bibendum", "blandit", "commodo", "consectetur", "consequat", "cras", "cursus",
    "dapibus", "diam", "dictum", "dolor", "donec", "dui", "egestas", "eget", "eleifend", "elit",
    "enim", "erat", "eros", "est", "et", "eu", "facilisis", "fames", "faucibus", "felis",
    "fermentum", "feugiat", "gravida", "habitasse", "iaculis", "id", "in", "integer", "ipsum",
    "justo", "lacus", "laoreet", "lectus", "leo", "ligula", "lorem", "magna", "massa", "mattis",
    "mauris", "metus", "mi", "morbi", "nec", "neque", "nibh", "nisi", "nisl", "non", "nulla",
    "nunc", "odio", "orci", "ornare", "pellentesque", "pharetra", "porta", "posuere", "praesent",
    "pretium", "purus", "quam", "quis", "rhoncus", "risus", "rutrum", "sagittis", "sapien",
    "sed", "sem", "semper", "sit", "sodales", "tellus", "tempor", "tincidunt", "tortor", "turpis",
    "ullamcorper", "ut", "varius", "vel", "velit", "vitae", "viverra", "volutpat", "vulputate",
];

/// Words per generated sentence, inclusive.
const SENTENCE_WORDS: (usize, usize) = (4, 12);

/// Sentences per generated paragraph, inclusive.
const PARAGRAPH_SENTENCES: (usize, usize) = (3, 6);

/// First and last printable ASCII characters.
const PRINTABLE: (u8, u8) = (0x20, 0x7E);

/// Generate printable ASCII with a length in `[min_length, max_length]`.
///
/// The caller guarantees `min_length <= max_length`.
pub fn generate_ascii<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> String {
    let length = rng.gen_range(min_length..=max_length);
    (0..length)
        .map(|_| char::from(rng.gen_range(PRINTABLE.0..=PRINTABLE.1)))
        .collect()
}

/// Pick one word from the vocabulary.
pub fn generate_word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("lorem")
}

/// Generate `num` words separated by spaces.
pub fn generate_words<R: Rng>(rng: &mut R, num: usize) -> String {
    (0..num)
        .map(|_| generate_word(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate one capitalized sentence ending with a period.
pub fn generate_sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(SENTENCE_WORDS.0..=SENTENCE_WORDS.1);
    let words = generate_words(rng, count);

    let mut chars = words.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    sentence.push('.');
    sentence
}

/// Generate `num` sentences separated by spaces.
pub fn generate_sentences<R: Rng>(rng: &mut R, num: usize) -> String {
    (0..num)
        .map(|_| generate_sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate `num` paragraphs separated by blank lines.
pub fn generate_paragraphs<R: Rng>(rng: &mut R, num: usize) -> String {
    (0..num)
        .map(|_| {
            let count = rng.gen_range(PARAGRAPH_SENTENCES.0..=PARAGRAPH_SENTENCES.1);
            generate_sentences(rng, count)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
