//! Header lines: a run of 1 to 4 leading `+` followed by the header text

/// Deepest header level; longer `+` runs are ordinary paragraphs
pub const MAX_HEADER_LEVEL: u8 = 4;

/// Read a header line, returning its level and trimmed text
pub fn parse_header(line: &str) -> Option<(u8, &str)> {
    let rest = line.trim_start_matches('+');
    let run = line.len() - rest.len();
    if run == 0 || run > MAX_HEADER_LEVEL as usize {
        return None;
    }
    Some((run as u8, rest.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+A", Some((1, "A")))]
    #[case("++ Two words ", Some((2, "Two words")))]
    #[case("++++Four", Some((4, "Four")))]
    #[case("+++++Five", None)]
    #[case("Plain", None)]
    #[case(" +Indented", None)]
    #[case("+a+b", Some((1, "a+b")))]
    fn test_parse_header(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(parse_header(line), expected);
    }
}
