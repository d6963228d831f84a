use spi::{
    error::{Error, ErrorKind, LexError, ParseError, RuntimeError},
    interpret,
    interpreter::parser::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH},
};

fn assert_value(src: &str, expected: i64) {
    match interpret(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match interpret(src) {
        Ok(value) => panic!("Script {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong error for {src:?}: {e}");
            e
        },
    }
}

/// Floor division computed independently of the evaluator.
fn floor_div(x: i64, y: i64) -> i64 {
    let q = (x as f64 / y as f64).floor();
    q as i64
}

const SAMPLES: [i64; 10] = [0, 1, 2, 3, 7, 10, 42, 99, 1000, 123_456];

#[test]
fn single_integers() {
    for x in SAMPLES {
        assert_value(&x.to_string(), x);
    }
    assert_value("9223372036854775807", i64::MAX);
    assert_value("-9223372036854775808", i64::MIN);
    assert_value("007", 7);
}

#[test]
fn integer_pairs() {
    for x in SAMPLES {
        for y in SAMPLES {
            assert_value(&format!("{x} + {y}"), x + y);
            assert_value(&format!("{x} - {y}"), x - y);
            assert_value(&format!("{x} * {y}"), x * y);
            if y == 0 {
                assert_failure(&format!("{x} / {y}"), ErrorKind::DivisionByZero);
            } else {
                assert_value(&format!("{x} / {y}"), x / y);
            }
        }
    }
}

#[test]
fn full_signed_64_bit_range() {
    assert_value("-9223372036854775808", i64::MIN);
    assert_value("-9223372036854775807 - 1", i64::MIN);
    assert_value("9223372036854775808 - 1", i64::MAX);
    assert_value("-(9223372036854775808)", i64::MIN);
    assert_value("-9223372036854775808 / 2", i64::MIN / 2);
    assert_value("18446744073709551615 - 9223372036854775808", i64::MAX);
    for x in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        assert_value(&x.to_string(), x);
    }

    assert_failure("9223372036854775808", ErrorKind::Overflow);
    assert_failure("-(-9223372036854775808)", ErrorKind::Overflow);
    assert_failure("18446744073709551615 * 18446744073709551615", ErrorKind::Overflow);
    assert_failure("18446744073709551616", ErrorKind::Lex);
}

#[test]
fn floor_division_with_signs() {
    for (x, y) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (6, -3), (-6, 3), (1, -1000), (-1, 1000)] {
        assert_value(&format!("{x} / {y}"), floor_div(x, y));
    }
    assert_value("-7 / 2", -4);
    assert_value("7 / -2", -4);
    assert_value("-7 / -2", 3);
    assert_value("-1 / 3", -1);
}

#[test]
fn left_associativity() {
    assert_value("10 - 4 - 3", 3);
    assert_value("100 / 10 / 5", 2);
    assert_value("2 * 3 / 4", 1);
    for (a, b, c) in [(5, 3, 1), (9, 20, 4), (1, 1, 1), (123, 45, 67)] {
        assert_value(&format!("{a} - {b} - {c}"), (a - b) - c);
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 * 3 + 4 * 5", 26);
    assert_value("7 + 3 * (10 / (12 / (3 + 1) - 1))", 22);
    assert_value("((((42))))", 42);
}

#[test]
fn full_expressions() {
    for xs in [[1, 2, 3, 4, 5], [10, 20, 30, 40, 7], [3, 3, 3, 3, 3], [99, 1, 1, 50, 8]] {
        let src = format!("{} + {} * {} - {} / {}", xs[0], xs[1], xs[2], xs[3], xs[4]);
        assert_value(&src, xs[0] + xs[1] * xs[2] - xs[3] / xs[4]);
    }
}

#[test]
fn unary_operators() {
    assert_value("-5", -5);
    assert_value("+5", 5);
    assert_value("- - - + -5", 5);
    assert_value("5 - - - + - (3 + 4) - +2", 10);
    assert_value("-(2 + 3) * 4", -20);
    assert_value("--3", 3);
    for xs in [[4, 5, 6, 7], [10, 4, 4, 9], [100, 200, 300, 400]] {
        let src = format!("{} - - - + - ({} + {}) - +{}", xs[0], xs[1], xs[2], xs[3]);
        assert_value(&src, xs[0] + (xs[1] + xs[2]) - xs[3]);
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1+2", 3);
    assert_value("1 + 2", 3);
    assert_value(" 1  +   2 ", 3);
    assert_value("\t1\n+\r\n2 ", 3);
}

#[test]
fn results_are_deterministic() {
    for src in ["2 + 3 * 4", "1 / 0", "1 $ 2", "(1 + 2"] {
        assert_eq!(interpret(src), interpret(src));
    }
}

#[test]
fn lexical_errors() {
    let e = assert_failure("1 $ 2", ErrorKind::Lex);
    assert_eq!(e,
               Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                          position:  2, }));
    assert_failure("x", ErrorKind::Lex);
    assert_failure("BEGIN x := 5 END.", ErrorKind::Lex);
    assert_failure("1.5", ErrorKind::Lex);
    assert_failure("99999999999999999999", ErrorKind::Lex);
}

#[test]
fn lexical_error_wins_over_parse_error_after_it() {
    // The parser never gets to see the missing `)` past the bad character.
    assert_failure("(1 + #", ErrorKind::Lex);
}

#[test]
fn parse_errors() {
    assert_failure("(1 + 2", ErrorKind::Parse);
    assert_failure("1 +", ErrorKind::Parse);
    assert_failure("", ErrorKind::Parse);
    assert_failure("   ", ErrorKind::Parse);
    assert_failure("()", ErrorKind::Parse);
    assert_failure("* 2", ErrorKind::Parse);
    assert_failure("1 2", ErrorKind::Parse);
    assert_failure("(1 + 2))", ErrorKind::Parse);
}

#[test]
fn parse_error_names_expected_and_found() {
    let e = assert_failure("(1 + 2", ErrorKind::Parse);
    let Error::Parse(ParseError::UnexpectedToken { expected,
                                                   found,
                                                   position, }) = e
    else {
        panic!("expected an unexpected-token error");
    };
    assert_eq!(expected.len(), 1);
    assert_eq!(found.to_string(), "Token(EOF, )");
    assert_eq!(position, 6);
    assert_eq!(Error::Parse(ParseError::UnexpectedToken { expected, found, position }).to_string(),
               "Error at position 6: Expected RPAREN, got Token(EOF, ).");
}

#[test]
fn runtime_errors() {
    let e = assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_eq!(e, Error::Runtime(RuntimeError::DivisionByZero { position: 2 }));
    assert_failure("5 / (3 - 3)", ErrorKind::DivisionByZero);
    assert_failure("9223372036854775807 + 1", ErrorKind::Overflow);
    assert_failure("-9223372036854775807 - 2", ErrorKind::Overflow);
    assert_failure("4611686018427387904 * 2", ErrorKind::Overflow);
    assert_failure("(-9223372036854775807 - 1) / -1", ErrorKind::Overflow);
}

#[test]
fn errors_display_their_position() {
    let e = interpret("12 / (3 - 3)").unwrap_err();
    assert_eq!(e.to_string(), "Error at position 3: Division by zero.");
    let e = interpret("1 + a").unwrap_err();
    assert_eq!(e.to_string(), "Error at position 4: Unexpected character 'a'.");
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let parens = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_value(&parens(100), 1);
    assert_value(&parens(MAX_NESTING_DEPTH), 1);
    for n in [MAX_NESTING_DEPTH + 1, 500, 100_000] {
        let e = assert_failure(&parens(n), ErrorKind::Parse);
        assert!(matches!(e, Error::Parse(ParseError::NestingTooDeep { .. })));
    }

    let signs = |n: usize| format!("{}1", "-".repeat(n));
    assert_value(&signs(MAX_NESTING_DEPTH), 1);
    assert_failure(&signs(MAX_NESTING_DEPTH + 1), ErrorKind::Parse);
    assert_failure(&signs(100_000), ErrorKind::Parse);
}

#[test]
fn long_operator_chains_are_bounded() {
    let chain = |n: usize| format!("1{}", " + 1".repeat(n));
    assert_value(&chain(MAX_TREE_DEPTH - 1), 1024);
    let e = assert_failure(&chain(100_000), ErrorKind::Parse);
    assert!(matches!(e, Error::Parse(ParseError::NestingTooDeep { .. })));
    assert_failure(&format!("2{}", " * 1".repeat(MAX_TREE_DEPTH)), ErrorKind::Parse);
}

#[test]
fn errors_know_their_position() {
    assert_eq!(interpret("1 + x").unwrap_err().position(), Some(4));
    assert_eq!(interpret("(1 + 2").unwrap_err().position(), Some(6));
    assert_eq!(interpret("7 / (2 - 2)").unwrap_err().position(), Some(2));
    assert_eq!(interpret("1 2").unwrap_err().position(), Some(2));
}
