use text_mask::{CaretGravity, CaretString, FormatError, Mask, Notation};

fn fwd(s: &str, caret: usize) -> CaretString {
    CaretString::new(s, caret, CaretGravity::Forward { autocomplete: false })
}

#[test]
fn test_builtin_slots() {
    let mask = Mask::new("[0][9][A][a][_][-]", &[]).unwrap();

    let result = mask.apply(&fwd("12abc3", 6));
    assert_eq!(result.extracted_value, "12abc3");
    assert!(result.complete);

    // optional slots skip without consuming
    let result = mask.apply(&fwd("1a2", 3));
    assert_eq!(result.extracted_value, "1a2");
    assert!(result.complete);
}

#[test]
fn test_nested_brackets_fail() {
    assert_eq!(Mask::new("[[00]", &[]).unwrap_err(), FormatError::NestedBrackets);
    assert_eq!(Mask::new("{{.}", &[]).unwrap_err(), FormatError::NestedBrackets);
    assert_eq!(
        Mask::new("[00]{a{b}", &[]).unwrap_err(),
        FormatError::NestedBrackets
    );
}

#[test]
fn test_unknown_slot_fails() {
    assert_eq!(Mask::new("[x]", &[]).unwrap_err(), FormatError::UnknownSlot('x'));

    // known once registered
    let x = [Notation::new('x', "xX", false)];
    assert!(Mask::new("[x]", &x).is_ok());
}

#[test]
fn test_validate() {
    assert!(Mask::validate("+[0] ([000])", &[]));
    assert!(!Mask::validate("[[00]", &[]));
    assert!(!Mask::validate("[q]", &[]));
    assert!(Mask::validate("[q]", &[Notation::new('q', "q", false)]));
}

#[test]
fn test_escaped_brackets() {
    // leading escaped bracket is a free literal
    let mask = Mask::new("\\[[00]\\]", &[]).unwrap();
    assert_eq!(mask.placeholder(), "[00]");

    let result = mask.apply(&fwd("12", 2));
    assert_eq!(result.formatted_text.string, "[12");
    assert_eq!(result.extracted_value, "12");
}

#[test]
fn test_escaped_curly() {
    let mask = Mask::new("\\{[00]\\}", &[]).unwrap();
    assert_eq!(mask.placeholder(), "{00}");
}

#[test]
fn test_mixed_block_split() {
    // [00Aa] splits into [00][Aa]; digits then letters
    let mask = Mask::new("[00Aa]", &[]).unwrap();

    let result = mask.apply(&fwd("12cd", 4));
    assert_eq!(result.formatted_text.string, "12cd");
    assert!(result.complete);

    // letters before the digit slots are dropped, not reordered
    let result = mask.apply(&fwd("ab12", 4));
    assert_eq!(result.formatted_text.string, "12");
    assert!(!result.complete);
}

#[test]
fn test_slot_reorder() {
    // optional digits sort behind the mandatory one: [909] -> [099]
    let mask = Mask::new("[909]", &[]).unwrap();

    let result = mask.apply(&fwd("1", 1));
    assert!(result.complete);
    assert_eq!(mask.acceptable_text_length(), 1);
    assert_eq!(mask.total_text_length(), 3);
}

#[test]
fn test_unclosed_group_dropped() {
    // an unclosed trailing group doesn't compile to anything
    let mask = Mask::new("ab[00", &[]).unwrap();
    assert_eq!(mask.placeholder(), "ab");
    assert_eq!(mask.total_value_length(), 0);
}

#[test]
fn test_ellipsis_after_open_bracket() {
    // inherits alphanumeric when there is no preceding slot
    let mask = Mask::new("[…]", &[]).unwrap();

    let result = mask.apply(&fwd("a1-b2", 5));
    assert_eq!(result.extracted_value, "a1b2");
    assert!(result.complete);
}

#[test]
fn test_ellipsis_inherits_letter() {
    let mask = Mask::new("[aa…]", &[]).unwrap();

    let result = mask.apply(&fwd("abcdef1", 7));
    assert_eq!(result.extracted_value, "abcdef");
}

#[test]
fn test_custom_notation_mandatory() {
    let dot = [Notation::new('.', "0123456789.", false)];
    let mask = Mask::new("[.......]", &dot).unwrap();

    let result = mask.apply(&fwd("192.168", 7));
    assert_eq!(result.formatted_text.string, "192.168");
    assert_eq!(result.extracted_value, "192.168");
}

#[test]
fn test_format_getter() {
    let mask = Mask::new("[00].[00]", &[]).unwrap();
    assert_eq!(mask.format(), "[00].[00]");
}
