use text_mask::{CaretGravity, CaretString, Mask};

fn fwd(s: &str, caret: usize, autocomplete: bool) -> CaretString {
    CaretString::new(s, caret, CaretGravity::Forward { autocomplete })
}

#[test]
fn test_rtl_fills_from_the_right() {
    let mask = Mask::new_rtl("[000]", &[]).unwrap();

    let result = mask.apply(&fwd("12", 2, false));
    assert_eq!(result.formatted_text.string, "12");
    assert_eq!(result.formatted_text.caret, 2);
    assert_eq!(result.extracted_value, "12");
    assert!(!result.complete);
}

#[test]
fn test_rtl_free_literal() {
    // mirrored format is "[000]+", the '+' fills in at the front
    let mask = Mask::new_rtl("+[000]", &[]).unwrap();
    assert_eq!(mask.format(), "[000]+");

    let result = mask.apply(&fwd("123", 3, false));
    assert_eq!(result.formatted_text.string, "123");
    assert_eq!(result.formatted_text.caret, 3);
    assert_eq!(result.extracted_value, "123");
    assert!(result.complete);
}

#[test]
fn test_rtl_separator() {
    let mask = Mask::new_rtl("[00].[00]", &[]).unwrap();

    let result = mask.apply(&fwd("1234", 4, false));
    assert_eq!(result.formatted_text.string, "12.34");
    assert_eq!(result.extracted_value, "1234");
    assert!(result.complete);

    // short input sticks to the right end of the format
    let result = mask.apply(&fwd("123", 3, false));
    assert_eq!(result.formatted_text.string, "1.23");
    assert_eq!(result.extracted_value, "123");
}

#[test]
fn test_rtl_caret_tracks_from_the_end() {
    let mask = Mask::new_rtl("[00].[00]", &[]).unwrap();

    // caret in the middle keeps its distance to the end
    let result = mask.apply(&fwd("1234", 2, false));
    assert_eq!(result.formatted_text.string, "12.34");
    assert_eq!(result.formatted_text.caret, 2);
}

#[test]
fn test_mirror_law() {
    // an rtl mask is the mirrored base mask run over reversed input
    for (format, mirrored, input) in [
        ("+[000]", "[000]+", "123"),
        ("[00].[00]", "[00].[00]", "1234"),
        ("ab[09]", "[90]ba", "ab12"),
    ] {
        let rtl = Mask::new_rtl(format, &[]).unwrap();
        let base = Mask::new(mirrored, &[]).unwrap();

        let len = input.chars().count();
        let rtl_result = rtl.apply(&fwd(input, len, false));

        let reversed: String = input.chars().rev().collect();
        let base_result = base.apply(&fwd(&reversed, 0, false));

        assert_eq!(
            rtl_result.formatted_text.string,
            base_result.formatted_text.string.chars().rev().collect::<String>(),
        );
        assert_eq!(
            rtl_result.extracted_value,
            base_result.extracted_value.chars().rev().collect::<String>(),
        );
        assert_eq!(rtl_result.affinity, base_result.affinity);
        assert_eq!(rtl_result.complete, base_result.complete);
    }
}

#[test]
fn test_rtl_escaped_brackets_stay_literal() {
    let mask = Mask::new_rtl("\\[[00]", &[]).unwrap();
    assert_eq!(mask.format(), "[00]\\[");
    assert_eq!(mask.placeholder(), "00[");
}

#[test]
fn test_caret_string_reversed() {
    let text = fwd("abcd", 1, false);
    let reversed = text.reversed();
    assert_eq!(reversed.string, "dcba");
    assert_eq!(reversed.caret, 3);

    // reversing twice restores the original
    assert_eq!(reversed.reversed(), text);
}
