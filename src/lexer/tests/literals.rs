#[cfg(test)]
mod tests {
    use crate::lexer::error::LexError;
    use crate::lexer::tokenize;
    use crate::lexer::tests::util::assert_stream;
    use crate::lexer::TOKEN::*;

    #[test]
    fn should_combine_multi_digit_and_fractional_numbers() {
        let tokens = tokenize(String::from("[123, 4.5, -6]")).unwrap();
        assert_stream(tokens, vec![
            LEFT_BRACKET, S2_NUM_LITERAL(123.0), COMMA, WHITESPACE, S2_NUM_LITERAL(4.5), COMMA, WHITESPACE,
            SUBTRACT, S2_NUM_LITERAL(6.0), RIGHT_BRACKET, EOF
        ]);
    }

    #[test]
    fn should_lex_both_quote_styles_with_escapes() {
        let tokens = tokenize(String::from(r#"'a' "b\"c" 'd\'e'"#)).unwrap();
        assert_stream(tokens, vec![
            STRING_LITERAL("a".into()), WHITESPACE, STRING_LITERAL("b\"c".into()), WHITESPACE, STRING_LITERAL("d'e".into()), EOF
        ]);
    }

    #[test]
    fn should_lex_comments() {
        let tokens = tokenize(String::from("// let [a] = b\n/* multi\n   line */")).unwrap();
        assert_stream(tokens, vec![
            COMMENT("let [a] = b".into()), NEWLINE, COMMENT_MLINE(vec!["multi".into(), "line".into()]), EOF
        ]);
    }

    #[test]
    fn should_lex_keyword_values() {
        let tokens = tokenize(String::from("true false null undefined")).unwrap();
        assert_stream(tokens, vec![TRUE, WHITESPACE, FALSE, WHITESPACE, KEYWORD_NULL, WHITESPACE, KEYWORD_UNDEFINED, EOF]);
    }

    #[test]
    fn should_fail_on_unterminated_string() {
        let err = tokenize(String::from("let [x] = ['a]")).unwrap_err();
        match err {
            LexError::UNTERMINATED_STRING(span, quote) => {
                assert_eq!(span.start, 11);
                assert_eq!(quote, '\'');
            }
            other => panic!("unexpected error {:?}", other)
        }
    }

    #[test]
    fn should_decode_hex_and_unicode_escapes() {
        let tokens = tokenize(String::from(r"'\x41\u0042\u{43}\uD83D\uDE00\v'")).unwrap();
        assert_stream(tokens, vec![STRING_LITERAL("ABC\u{1F600}\u{b}".into()), EOF]);
    }

    #[test]
    fn should_fail_on_invalid_escapes() {
        assert!(matches!(tokenize(String::from(r"'\x4g'")), Err(LexError::INVALID_ESCAPE(1, 4))));
        assert!(matches!(tokenize(String::from(r"'\u{}'")), Err(LexError::INVALID_ESCAPE(1, 5))));
        assert!(matches!(tokenize(String::from(r"'\uD83D'")), Err(LexError::INVALID_ESCAPE(1, _))));
    }

    #[test]
    fn should_fail_on_unterminated_block_comment() {
        assert!(matches!(tokenize(String::from("/* never closed")), Err(LexError::UNTERMINATED_COMMENT(_))));
    }

    #[test]
    fn should_fail_on_unknown_char() {
        assert!(matches!(tokenize(String::from("let a = #")), Err(LexError::UNEXPECTED_CHAR(8, '#'))));
    }
}
