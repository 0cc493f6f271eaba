//! End-to-end grammar tests through the public API.

use esp_lex::KeywordTable;
use esp_par::dump::{dump_expr, dump_program};
use esp_par::*;

fn dump(src: &str) -> String {
    dump_program(&parse_program(src).unwrap_or_else(|e| panic!("{}: {}", src, e)))
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(dump("1+2*3"), "(+ 1 (* 2 3))");
}

#[test]
fn return_then_newline_is_two_statements() {
    let program = parse_program("function f() { return\n1 }").unwrap();
    let StmtKind::Function(f) = &program.body[0].kind else {
        panic!("expected function");
    };
    assert_eq!(f.body.body.len(), 2);
    assert_eq!(f.body.body[0].kind, StmtKind::Return(None));
    assert!(matches!(f.body.body[1].kind, StmtKind::Expr(_)));

    let program = parse_program("return\n1").unwrap();
    assert_eq!(program.body.len(), 2);
    assert_eq!(program.body[0].kind, StmtKind::Return(None));
    assert_eq!(dump("return\n1"), "(return)\n1");
}

#[test]
fn slash_after_operand_is_division() {
    assert_eq!(dump("a = b / c / d"), "(= a (/ (/ b c) d))");
}

#[test]
fn slash_at_expression_start_is_regex() {
    let program = parse_program("/x/.test(y)").unwrap();
    let StmtKind::Expr(expr) = &program.body[0].kind else {
        panic!("expected expression");
    };
    let ExprKind::Call { callee, args } = &expr.kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 1);
    let ExprKind::Dot { object, property } = &callee.kind else {
        panic!("expected member access");
    };
    assert_eq!(property.as_str(), "test");
    assert!(matches!(object.kind, ExprKind::Regex { .. }));
    assert_eq!(dump_expr(object), "/x/");
}

#[test]
fn else_binds_to_nearest_if() {
    let program = parse_program("if (a) if (b) x(); else y();").unwrap();
    let StmtKind::If {
        consequent,
        alternate,
        ..
    } = &program.body[0].kind
    else {
        panic!("expected if");
    };
    assert!(alternate.is_none());
    assert!(matches!(
        consequent.kind,
        StmtKind::If {
            alternate: Some(_),
            ..
        }
    ));
}

#[test]
fn for_in_is_recognized_in_head() {
    let program = parse_program("for (x in y) ;").unwrap();
    assert!(matches!(program.body[0].kind, StmtKind::ForIn { .. }));

    let program = parse_program("for (;(x in y);) ;").unwrap();
    let StmtKind::For { init, test, update, .. } = &program.body[0].kind else {
        panic!("expected for");
    };
    assert!(init.is_none());
    assert!(update.is_none());
    let test = test.as_ref().map(|t| t.unparenthesized().kind.clone());
    assert!(matches!(
        test,
        Some(ExprKind::Binary {
            op: BinaryOp::In,
            ..
        })
    ));
}

#[test]
fn for_in_without_object_fails() {
    let err = parse_program("for (x in) ;").unwrap_err();
    assert!(matches!(
        err.syntax_kind(),
        Some(SyntaxErrorKind::UnexpectedToken { .. })
    ));
    assert_eq!(err.line(), 1);
    assert_eq!(err.column(), 10);
}

#[test]
fn parsing_is_repeatable() {
    let src = "var a = [1, , 2]; function f(x) { return x ? /r/g : a[0] / 2 }\nf(a)";
    let first = parse_program(src).unwrap();
    let second = parse_program(src).unwrap();
    assert_eq!(first, second);
    assert_eq!(dump_program(&first), dump_program(&second));
}

#[test]
fn shared_keyword_table() {
    let keywords = KeywordTable::new();
    let a = parse_program_with("var a = 1", &keywords, ParseOptions::default()).unwrap();
    let b = parse_program_with("a++", &keywords, ParseOptions::default()).unwrap();
    assert_eq!(a.body.len(), 1);
    assert_eq!(b.body.len(), 1);
}

#[test]
fn parser_struct_entry_point() {
    let keywords = KeywordTable::new();
    let parser = Parser::new("debugger", &keywords, ParseOptions::default());
    let program = parser.parse_program().unwrap();
    assert_eq!(program.body[0].kind, StmtKind::Debugger);
}

#[test]
fn realistic_program() {
    let src = r#"
        // Counter with accessors.
        function Counter(start) {
            var count = start || 0
            this.step = 1
            return {
                get value() { return count },
                set value(v) { count = v },
                next: function () {
                    count += this.step
                    return count
                }
            }
        }

        var c = new Counter(3), seen = []
        for (var k in c) seen[seen.length] = k
        try {
            if (typeof c.next !== "function") throw new Error("no next")
        } catch (e) {
            seen = null
        } finally {
            debugger
        }
        switch (c.value) {
            case 3:
            default:
                c.value = /\d+/.exec("x42")[0] / 2
        }
    "#;
    let program = parse_program(src).unwrap();
    assert_eq!(program.body.len(), 5);
    assert!(matches!(program.body[0].kind, StmtKind::Function(_)));
    assert!(matches!(program.body[2].kind, StmtKind::ForIn { .. }));
    assert!(matches!(program.body[3].kind, StmtKind::Try { .. }));
}

#[test]
fn error_display_carries_position() {
    let err = parse_program("var x = (1 + ;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: expected expression, found ';' at line 1, column 14"
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.span.column, 14);
}

#[test]
fn malformed_source_fails_identically_every_time() {
    let src = "var a = 1;\nfor (var x, y in z) ;";
    let first = parse_program(src).unwrap_err();
    let _ = parse_program("var ok = 1;").unwrap();
    let second = parse_program(src).unwrap_err();
    assert_eq!(first, second);
    assert_eq!((first.line(), first.column()), (2, 15));
}
