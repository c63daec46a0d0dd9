const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const REPLACEMENT: &str = "****";

/// Mask profane words in a chirp body.
///
/// Matching is case-insensitive on whole words split by single spaces, so
/// `Sharbert!` (punctuation attached) is left alone.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANE_WORDS
                .iter()
                .any(|bad| word.eq_ignore_ascii_case(bad))
            {
                REPLACEMENT
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
