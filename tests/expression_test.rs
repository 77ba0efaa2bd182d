mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    r.enter("PRINT 1+2*3");
    assert_eq!(exec(&mut r), "7\n");
    r.enter("PRINT (1+2)*3");
    assert_eq!(exec(&mut r), "9\n");
}

#[test]
fn test_left_assoc() {
    let mut r = Runtime::default();
    r.enter("PRINT 100/10/5");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("PRINT 10-4-3");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_native_arithmetic() {
    let mut r = Runtime::default();
    for &(a, b) in &[(7, 3), (-12, 5), (0, 9), (46340, 46340), (-1, -2147483647)] {
        r.enter(&format!("LET A = {}", a));
        r.enter(&format!("LET B = {}", b));
        r.enter("PRINT A + B");
        r.enter("PRINT A - B");
        r.enter("PRINT A * B");
        let expected = format!("{}\n{}\n{}\n", a + b, a - b, a * b);
        assert_eq!(exec(&mut r), expected, "a={} b={}", a, b);
    }
}

#[test]
fn test_division_truncates() {
    let mut r = Runtime::default();
    r.enter("PRINT 7/2");
    assert_eq!(exec(&mut r), "3\n");
    r.enter("PRINT -7/2");
    assert_eq!(exec(&mut r), "-3\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    r.enter("LET Z = 0");
    r.enter("PRINT 5/Z");
    assert_eq!(exec(&mut r), "DIVIDE BY ZERO\n");
    r.enter("PRINT 1");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_overflow() {
    let mut r = Runtime::default();
    r.enter("PRINT 2147483647 + 1");
    assert_eq!(exec(&mut r), "OVERFLOW\n");
    r.enter("PRINT 2147483648");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("PRINT -2147483647 - 1");
    assert_eq!(exec(&mut r), "-2147483648\n");
}

#[test]
fn test_undefined_variable() {
    let mut r = Runtime::default();
    r.enter("PRINT Q");
    assert_eq!(exec(&mut r), "VARIABLE NOT DEFINED\n");
}

#[test]
fn test_case_sensitive_names() {
    let mut r = Runtime::default();
    r.enter("LET abc = 1");
    r.enter("LET ABC = 2");
    r.enter("PRINT abc * 10 + ABC");
    assert_eq!(exec(&mut r), "12\n");
}

#[test]
fn test_malformed() {
    let mut r = Runtime::default();
    r.enter("PRINT (1");
    r.enter("PRINT 1 +");
    r.enter("PRINT 1 2");
    r.enter("PRINT 1 % 2");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n".repeat(4));
}

#[test]
fn test_deep_nesting_is_an_error() {
    let mut r = Runtime::default();
    r.enter(&format!("PRINT {}1{}", "(".repeat(200), ")".repeat(200)));
    r.enter("PRINT 1");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n1\n");
    r.enter(&format!("10 LET X = {}1", "-".repeat(500)));
    r.enter("RUN");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
}

#[test]
fn test_long_line_is_an_error() {
    let mut r = Runtime::default();
    r.enter(&format!("PRINT {}1{}", "(".repeat(10_000), ")".repeat(10_000)));
    r.enter(&format!("10 LET X = {}1", "-".repeat(100_000)));
    r.enter("PRINT 2");
    assert_eq!(exec(&mut r), "LINE BUFFER OVERFLOW\nLINE BUFFER OVERFLOW\n2\n");
}

#[test]
fn test_nesting_within_limits() {
    let mut r = Runtime::default();
    r.enter(&format!("PRINT {}7{}", "(".repeat(50), ")".repeat(50)));
    r.enter(&format!("PRINT {}7", "-".repeat(51)));
    assert_eq!(exec(&mut r), "7\n-7\n");
}

#[test]
fn test_smallest_literal() {
    let mut r = Runtime::default();
    r.enter("PRINT -2147483648");
    assert_eq!(exec(&mut r), "-2147483648\n");
    r.enter("PRINT 0 - 2147483648");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("PRINT --2147483648");
    assert_eq!(exec(&mut r), "OVERFLOW\n");
}
