mod common;
use basic::mach::{Event, Runtime};
use common::*;

#[test]
fn test_run_empty() {
    let mut r = Runtime::default();
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_run_keeps_variables() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["LET A = 41", "10 PRINT A + 1", "RUN"]);
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_infinite_loop_keeps_running() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 LET X = 1", "20 PRINT X", "30 GOTO 10", "RUN"]);
    let mut printed = 0;
    while printed < 1000 {
        match r.execute(10) {
            Event::Print(s) => {
                assert_eq!(s, "1\n");
                printed += 1;
            }
            Event::Running => {}
            event => panic!("{:?}", event),
        }
    }
    assert!(r.is_running());
}

#[test]
fn test_infinite_loop_capped_by_limit() {
    let mut r = Runtime::with_line_limit(5);
    enter_all(&mut r, &["10 LET X = 1", "20 PRINT X", "30 GOTO 10", "RUN"]);
    assert_eq!(exec(&mut r), "1\n1\n1\n1\nEXECUTION LIMIT EXCEEDED\n");
    assert!(!r.is_running());
}

#[test]
fn test_run_resets_counts() {
    let mut r = Runtime::with_line_limit(3);
    enter_all(&mut r, &["10 PRINT 1", "RUN"]);
    assert_eq!(exec(&mut r), "1\n");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_cycles_exceeded() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 GOTO 10", "RUN"]);
    assert_eq!(exec_n(&mut r, 50), "\n50 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK\n");
}

#[test]
fn test_edit_while_stopped() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "20 GOTO 10", "RUN"]);
    assert_eq!(r.execute(1), Event::Print("1\n".to_string()));
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK\n");
    r.enter("20 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}
