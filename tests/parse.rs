use genie::{LeadingWhitespace, ParseError, Parser, parse};

#[test]
fn windows_line_endings() {
    let crlf = parse("hello = world\r\nfoo = bar\r\n").expect("failed to parse CRLF text");
    let lf = parse("hello = world\nfoo = bar\n").expect("failed to parse LF text");

    assert_eq!(crlf, lf);
    assert_eq!(crlf.count_all_entries(), 2);
    assert_eq!(crlf.get("foo"), "bar");
}

#[test]
fn bare_carriage_return_is_not_a_terminator() {
    let data = parse("key = a\rb\n").expect("failed to parse hardcoded text");

    assert_eq!(data.get("key"), "a\rb");
    assert_eq!(data.count_all_entries(), 1);
}

#[test]
fn blank_inputs() {
    for text in ["", "  ", "\n\n", "\r\n\n\n\r\n", "\t\n \t \n"] {
        let data = parse(text).expect("expected blank text to be valid");

        assert_eq!(data.count_all_entries(), 0, "{text:?}");
    }
}

#[test]
fn absent_keys_and_sections() {
    let data = parse("").expect("expected empty text to be valid");

    for (section, key) in [("", ""), ("", "  "), ("", "hello"), ("  ", "hello"), ("foo", "")] {
        assert_eq!(data.get_from_section(section, key), "");
    }
}

#[test]
fn section_with_surrounding_whitespace() {
    let data = parse("   [section]  \t \nkey = value").expect("failed to parse hardcoded text");

    assert_eq!(data.get_from_section("section", "key"), "value");
}

#[test]
fn leading_whitespace_is_ignored() {
    let text = r"
          key = value
      #FooBAR
   [section1]
         hello = world
 foo = bar

  # Test 123
    [section2]
        test = 123
";

    let data = parse(text).expect("failed to parse hardcoded text");

    assert_eq!(data.count_all_entries(), 4);
    assert_eq!(data.get("key"), "value");
    assert_eq!(data.get_from_section("section1", "hello"), "world");
    assert_eq!(data.get_from_section("section1", "foo"), "bar");
    assert_eq!(data.get_from_section("section2", "test"), "123");
}

#[test]
fn duplicate_keys_count_every_assignment() {
    let data = parse("key = 1\nkey = 2\n").expect("failed to parse hardcoded text");

    assert_eq!(data.get("key"), "2");
    assert_eq!(data.count_all_entries(), 2);
}

#[test]
fn error_cases() {
    let cases = [
        ("foo", ParseError::InvalidKey { line: 1 }),
        ("[section", ParseError::InvalidSectionDeclaration { line: 1 }),
        ("section]", ParseError::InvalidKey { line: 1 }),
        ("[section] # Comment?", ParseError::InvalidSectionDeclaration { line: 1 }),
        ("[[section]]\n", ParseError::InvalidSectionName { line: 1 }),
        ("[se]ct[ion]", ParseError::InvalidSectionName { line: 1 }),
        ("[]", ParseError::InvalidSectionName { line: 1 }),
        ("[key] = 123", ParseError::InvalidSectionDeclaration { line: 1 }),
        ("key= 123", ParseError::InvalidDelimiterSequence { line: 1 }),
        ("key =123", ParseError::InvalidDelimiterSequence { line: 1 }),
        ("k e y = 123", ParseError::InvalidKey { line: 1 }),
        ("k\te\ty = 123", ParseError::InvalidKey { line: 1 }),
        ("   foo", ParseError::InvalidKey { line: 1 }),
    ];

    for (text, expected) in cases {
        assert_eq!(parse(text), Err(expected), "{text:?}");
    }
}

#[test]
fn error_line_numbers_follow_crlf_normalization() {
    let error = parse("a = 1\r\n\r\n# comment\r\nb =2\r\n").expect_err("expected delimiter error");

    assert_eq!(error, ParseError::InvalidDelimiterSequence { line: 4 });
    assert_eq!(
        error.to_string(),
        "malformed syntax in line 4: invalid delimiter sequence"
    );
}

#[test]
fn strict_leading_whitespace() {
    let text = "key = value\n  other = value\n";

    assert!(parse(text).is_ok());
    assert_eq!(
        Parser::new(text)
            .leading_whitespace(LeadingWhitespace::Reject)
            .into_data(),
        Err(ParseError::InvalidKey { line: 2 })
    );
}
