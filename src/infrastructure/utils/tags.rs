/// Splits comma separated tag input, trimming each entry and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_drops_blanks() {
        assert_eq!(parse_tags("a, b ,, c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags("rust,actix , rust"), vec!["rust", "actix", "rust"]);
        assert!(parse_tags(" , ,").is_empty());
        assert!(parse_tags("").is_empty());
    }
}
