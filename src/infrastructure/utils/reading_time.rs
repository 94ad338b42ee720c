const WORDS_PER_MINUTE: usize = 200;

/// Minutes needed to read `content`, counting whitespace separated tokens of
/// the raw string (markup included). Never less than one.
pub fn reading_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
