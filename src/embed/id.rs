//! Collision-avoidance suffixes for snippet element ids

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// A fresh random base-36 suffix.
///
/// Every generated snippet gets its own suffix so two snippets pasted into
/// the same host page address disjoint element ids. Collision resistance is
/// all that is needed here, not unpredictability.
pub fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
