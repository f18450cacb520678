use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Occurrence count of every distinct symbol in a text.
pub type Frequencies = FxHashMap<char, usize>;

/// Returns a frequency count of the input text. Uses parallelism when the text is over 64k.
/// An empty text gives an empty map.
pub fn freqs(text: &str) -> Frequencies {
    if text.len() > 64_000 {
        text.par_chars()
            .fold(Frequencies::default, |mut freqs, c| {
                *freqs.entry(c).or_insert(0) += 1;
                freqs
            })
            .reduce(Frequencies::default, |mut s, f| {
                f.into_iter()
                    .for_each(|(c, n)| *s.entry(c).or_insert(0) += n);
                s
            })
    } else {
        let mut freqs = Frequencies::default();
        text.chars().for_each(|c| *freqs.entry(c).or_insert(0) += 1);
        freqs
    }
}
