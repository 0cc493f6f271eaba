//! Edge case tests for esp-lex

#[cfg(test)]
mod tests {
    use crate::{KeywordTable, LexErrorKind, Lexer, Token, TokenKind};
    use esp_util::Symbol;
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token> {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new(source, &keywords);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert!(lex_all("   \n\t  // only a comment").is_empty());
    }

    #[test]
    fn test_edge_bom_is_whitespace() {
        assert_eq!(kinds("\u{feff}x"), vec![TokenKind::Ident(Symbol::intern("x"))]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = kinds(&format!("var {} = 1;", name));
        assert!(t.contains(&TokenKind::Ident(Symbol::intern(&name))));
    }

    #[test]
    fn test_edge_keywords_as_written() {
        assert_eq!(
            kinds("this null true false"),
            vec![
                TokenKind::This,
                TokenKind::Null,
                TokenKind::True,
                TokenKind::False
            ]
        );
    }

    #[test]
    fn test_edge_crlf_sets_newline_once() {
        let tokens = lex_all("a\r\nb");
        assert!(tokens[1].newline_before);
        assert_eq!(tokens[1].span.line, 2);
    }

    #[test]
    fn test_edge_paragraph_separator_is_newline() {
        let tokens = lex_all("a\u{2029}b");
        assert!(tokens[1].newline_before);
    }

    #[test]
    fn test_edge_comment_between_restricted_tokens() {
        let tokens = lex_all("return // done\n x");
        assert!(tokens[1].newline_before);
    }

    #[test]
    fn test_edge_division_chain() {
        let t = kinds("a / b / c");
        assert_eq!(t[1], TokenKind::Slash);
        assert_eq!(t[3], TokenKind::Slash);
    }

    #[test]
    fn test_edge_dot_number_after_ident() {
        assert_eq!(
            kinds("a.5"),
            vec![TokenKind::Ident(Symbol::intern("a")), TokenKind::Number(0.5)]
        );
    }

    #[test]
    fn test_edge_string_with_all_escape_kinds() {
        let t = kinds(r#"'\x41B\103\n\
D'"#);
        assert_eq!(t, vec![TokenKind::String(Symbol::intern("ABC\nD"))]);
    }

    #[test]
    fn test_edge_error_position_on_later_line() {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new("a\n  b\n    'open", &keywords);
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!((err.line(), err.column()), (3, 5));
    }

    #[test]
    fn test_edge_hash_is_rejected() {
        let keywords = KeywordTable::new();
        let err = Lexer::new("#!", &keywords).next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('#'));
    }

    // ==================== PROPERTIES ====================

    proptest! {
        #[test]
        fn prop_lexer_terminates_without_panicking(source in "\\PC{0,64}") {
            let keywords = KeywordTable::new();
            let count = Lexer::new(&source, &keywords).take(1000).count();
            prop_assert!(count <= source.len() + 1);
        }

        #[test]
        fn prop_integers_roundtrip(n in 0u32..u32::MAX) {
            let text = n.to_string();
            let tokens = kinds(&text);
            prop_assert_eq!(tokens, vec![TokenKind::Number(f64::from(n))]);
        }

        #[test]
        fn prop_hex_roundtrip(n in 0u32..u32::MAX) {
            let tokens = kinds(&format!("0x{:x}", n));
            prop_assert_eq!(tokens, vec![TokenKind::Number(f64::from(n))]);
        }

        #[test]
        fn prop_spans_are_ordered(source in "[a-z0-9 +*/;(){}\\n]{0,48}") {
            let keywords = KeywordTable::new();
            let mut last_end = 0;
            for token in Lexer::new(&source, &keywords) {
                let Ok(token) = token else { break };
                prop_assert!(token.span.start >= last_end);
                prop_assert!(token.span.end > token.span.start);
                last_end = token.span.end;
            }
        }
    }
}
