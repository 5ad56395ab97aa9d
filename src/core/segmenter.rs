use unicode_segmentation::UnicodeSegmentation;

/// Splits `text` into exactly `max` display units, one grapheme cluster each.
///
/// All whitespace is dropped first (`char::is_whitespace` covers the
/// ideographic space U+3000). Extra graphemes are cut off and missing ones
/// are padded with empty strings.
pub fn segment(text: &str, max: usize) -> Vec<String> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut units: Vec<String> = cleaned.graphemes(true).take(max).map(str::to_string).collect();
    units.resize(max, String::new());
    units
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_pads_short_words() {
        assert_eq!(segment("你好", 4), vec!["你", "好", "", ""]);
    }

    #[test]
    fn test_four_character_word() {
        let units = segment("汉日词典", 4);
        assert_eq!(units[0], "汉");
        assert_eq!(units[3], "典");
    }

    #[test]
    fn test_truncates_long_words() {
        assert_eq!(segment("中华人民共和国", 4), vec!["中", "华", "人", "民"]);
    }

    #[test]
    fn test_strips_whitespace() {
        let units = segment("中 国", 4);
        assert_eq!(units[0], "中");
        assert_eq!(units[1], "国");

        // Ideographic space and surrounding padding
        assert_eq!(segment("\u{3000}学\u{3000}生 ", 4), vec!["学", "生", "", ""]);
    }

    #[test]
    fn test_keeps_multi_code_point_units_whole() {
        // Astral plane ideograph (two UTF-16 units) and a combining sequence
        let units = segment("𠀋e\u{301}", 4);
        assert_eq!(units[0], "𠀋");
        assert_eq!(units[1], "e\u{301}");
        assert_eq!(units[2], "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment("", 4), vec![""; 4]);
        assert!(segment("abc", 0).is_empty());
    }

    proptest! {
        #[test]
        fn segment_always_returns_max_units(text in ".*", max in 0usize..12) {
            prop_assert_eq!(segment(&text, max).len(), max);
        }
    }
}
