//! Edge case tests for esp-par

#[cfg(test)]
mod tests {
    use crate::dump::dump_program;
    use crate::{
        parse_program, parse_program_with, ExprKind, ParseError, ParseOptions, StmtKind,
        SyntaxErrorKind,
    };
    use esp_lex::{KeywordTable, LexErrorKind};

    fn parse_with_depth(source: &str, max_depth: usize) -> Result<usize, ParseError> {
        let keywords = KeywordTable::new();
        let options = ParseOptions::default().with_max_depth(max_depth);
        parse_program_with(source, &keywords, options).map(|p| p.body.len())
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty source
    #[test]
    fn test_edge_empty_source() {
        let program = parse_program("").unwrap();
        assert!(program.body.is_empty());
        assert_eq!(program.span.start, 0);
        assert_eq!(program.span.end, 0);
    }

    /// EDGE CASE: Comments and whitespace only
    #[test]
    fn test_edge_comments_only() {
        let program = parse_program("  /* a */ \n // b\n\t").unwrap();
        assert!(program.body.is_empty());
    }

    /// EDGE CASE: Program span covers first to last token
    #[test]
    fn test_edge_program_span() {
        let program = parse_program("\n  a;\n  b  \n").unwrap();
        assert_eq!(program.span.start, 3);
        assert_eq!(program.span.end, 9);
        assert_eq!(program.span.line, 2);
        assert_eq!(program.span.end_line, 3);
    }

    /// EDGE CASE: Error position is 1-based
    #[test]
    fn test_edge_error_position() {
        let err = parse_program("var a = 1;\nvar b = ;").unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 9);
    }

    /// EDGE CASE: Lexer errors pass through unchanged
    #[test]
    fn test_edge_lex_error_passthrough() {
        match parse_program("a = 'oops") {
            Err(ParseError::Lex(e)) => assert_eq!(e.kind, LexErrorKind::UnterminatedString),
            other => panic!("expected lex error, got {:?}", other),
        }
        match parse_program("a = /abc") {
            Err(ParseError::Lex(e)) => assert_eq!(e.kind, LexErrorKind::UnterminatedRegex),
            other => panic!("expected lex error, got {:?}", other),
        }
    }

    /// EDGE CASE: Error after the end of an unclosed block
    #[test]
    fn test_edge_unclosed_block() {
        let err = parse_program("function f() {").unwrap_err();
        assert!(matches!(
            err.syntax_kind(),
            Some(SyntaxErrorKind::UnexpectedToken { .. })
        ));
        assert!(err.to_string().contains("end of input"));
    }

    /// EDGE CASE: Nesting within the limit parses
    #[test]
    fn test_edge_nesting_within_limit() {
        let source = format!("{}x{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(parse_with_depth(&source, 64).unwrap(), 1);
    }

    /// EDGE CASE: Deep nesting is an error, not a stack overflow
    #[test]
    fn test_edge_nesting_too_deep() {
        let source = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = parse_with_depth(&source, 32).unwrap_err();
        assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::NestingTooDeep(32)));

        let blocks = format!("{}{}", "{".repeat(10_000), "}".repeat(10_000));
        let err = parse_with_depth(&blocks, 32).unwrap_err();
        assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::NestingTooDeep(32)));

        let unary = format!("{}x", "!".repeat(10_000));
        assert!(parse_with_depth(&unary, 32).is_err());
    }

    /// Runs `f` on a thread with the default 2 MiB stack of spawned threads.
    fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
        std::thread::Builder::new()
            .stack_size(2 << 20)
            .spawn(f)
            .unwrap()
            .join()
            .unwrap()
    }

    /// EDGE CASE: Nesting up to the default limit fits a small thread stack
    #[test]
    fn test_edge_default_limit_on_small_stack() {
        let n = ParseOptions::DEFAULT_MAX_DEPTH - 2;
        let result = on_small_stack(move || {
            let source = format!("{}x{}", "(".repeat(n), ")".repeat(n));
            parse_program(&source).map(|p| p.body.len())
        });
        assert_eq!(result.unwrap(), 1);

        let result = on_small_stack(|| {
            let source = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
            parse_program(&source).map(|p| p.body.len())
        });
        assert_eq!(
            result.unwrap_err().syntax_kind(),
            Some(&SyntaxErrorKind::NestingTooDeep(ParseOptions::DEFAULT_MAX_DEPTH))
        );
    }

    /// EDGE CASE: Realistic deep code is within the default limit
    #[test]
    fn test_edge_deep_callbacks_and_objects() {
        let callbacks = on_small_stack(|| {
            let mut source = String::from("done();");
            for _ in 0..100 {
                source = format!("f(function () {{ {} }});", source);
            }
            parse_program(&source).map(|p| p.body.len())
        });
        assert_eq!(callbacks.unwrap(), 1);

        let objects = on_small_stack(|| {
            let source = format!("x = {}1{};", "{a: ".repeat(200), "}".repeat(200));
            parse_program(&source).map(|p| p.body.len())
        });
        assert_eq!(objects.unwrap(), 1);
    }

    /// EDGE CASE: Keywords as property names
    #[test]
    fn test_edge_keyword_property_names() {
        let program = parse_program("a.new.delete.class = {in: 1, typeof: 2}").unwrap();
        assert_eq!(
            dump_program(&program),
            "(= (. (. (. a new) delete) class) (object (in 1) (typeof 2)))"
        );
    }

    /// EDGE CASE: Escaped keyword is an identifier
    #[test]
    fn test_edge_escaped_keyword_identifier() {
        let program = parse_program("var \\u0069f = 1").unwrap();
        assert_eq!(dump_program(&program), "(var (= if 1))");
    }

    /// EDGE CASE: Regex after operators and keywords
    #[test]
    fn test_edge_regex_contexts() {
        assert_eq!(
            dump_program(&parse_program("x = a ? /b/ : /c/g").unwrap()),
            "(= x (? a /b/ /c/g))"
        );
        assert_eq!(
            dump_program(&parse_program("f(/a/, [/b/])").unwrap()),
            "(call f /a/ (array /b/))"
        );
        assert_eq!(
            dump_program(&parse_program("function f() { return /x/ }").unwrap()),
            "(function f () (return /x/))"
        );
        assert_eq!(
            dump_program(&parse_program("typeof /x/").unwrap()),
            "(typeof /x/)"
        );
    }

    /// EDGE CASE: Division after a closing bracket
    #[test]
    fn test_edge_division_after_paren() {
        assert_eq!(
            dump_program(&parse_program("(a) / 2 / b").unwrap()),
            "(/ (/ (group a) 2) b)"
        );
        assert_eq!(
            dump_program(&parse_program("x[0] / y").unwrap()),
            "(/ ([] x 0) y)"
        );
    }

    /// EDGE CASE: Labelled statement vs conditional
    #[test]
    fn test_edge_label_vs_conditional() {
        let program = parse_program("a ? b : c").unwrap();
        assert!(matches!(
            &program.body[0].kind,
            StmtKind::Expr(e) if matches!(e.kind, ExprKind::Conditional { .. })
        ));
        let program = parse_program("outer: for (;;) break outer").unwrap();
        assert!(matches!(program.body[0].kind, StmtKind::Labelled { .. }));
    }

    /// EDGE CASE: ASI between statements on separate lines
    #[test]
    fn test_edge_asi_newlines() {
        let program = parse_program("var a = 1\nvar b = 2\na = b\n").unwrap();
        assert_eq!(program.body.len(), 3);
    }

    /// EDGE CASE: No ASI inside a for head
    #[test]
    fn test_edge_no_asi_in_for_head() {
        let err = parse_program("for (a\nb;;) ;").unwrap_err();
        assert!(matches!(
            err.syntax_kind(),
            Some(SyntaxErrorKind::UnexpectedToken { .. })
        ));
    }

    /// EDGE CASE: Call on a new line continues the expression
    #[test]
    fn test_edge_call_across_newline() {
        let program = parse_program("a\n(b)").unwrap();
        assert_eq!(dump_program(&program), "(call a b)");
    }

    /// EDGE CASE: Numeric keys
    #[test]
    fn test_edge_numeric_keys() {
        let program = parse_program("x = {0x10: a, 1.5: b}").unwrap();
        assert_eq!(dump_program(&program), "(= x (object (16 a) (1.5 b)))");
    }
}
