//! Integration tests: drive operations, insistent runs and chains through the
//! public API with a recording sleeper.

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use common::{FakeOperation, RecordingSleeper};
use pollops_core::{
    chain, insist, operation, operation_from, ConfigError, DefaultOperation, Operation, PollError,
    RejectionError,
};

#[test]
fn operation_object_rejection_calls_catch_and_finally() {
    let calls = Rc::new(Cell::new(0));
    let sleeper = RecordingSleeper::default();
    let events = RefCell::new(Vec::new());

    operation_from(FakeOperation::new(Rc::clone(&calls), false).with_max_attempts(3))
        .sleeper(sleeper.shared())
        .catch(|reason| events.borrow_mut().push(format!("catch: {reason}")))
        .then(|_| events.borrow_mut().push("then".to_string()))
        .finally(|| events.borrow_mut().push("finally".to_string()))
        .proceed()
        .unwrap();

    assert_eq!(calls.get(), 3);
    assert_eq!(
        *events.borrow(),
        vec![
            "catch: verification exhausted after 3 attempt(s)".to_string(),
            "finally".to_string(),
        ]
    );
    assert_eq!(sleeper.waits(), vec![Duration::from_millis(10); 2]);
}

#[test]
fn operation_object_success_calls_then_and_finally() {
    let calls = Rc::new(Cell::new(0));
    let then_calls = Cell::new(0);
    let catch_calls = Cell::new(0);
    let finally_calls = Cell::new(0);

    operation_from(FakeOperation::new(Rc::clone(&calls), true).with_max_attempts(3))
        .sleeper(RecordingSleeper::default().shared())
        .then(|results| {
            assert_eq!(results.len(), 1);
            then_calls.set(then_calls.get() + 1);
        })
        .catch(|_| catch_calls.set(catch_calls.get() + 1))
        .finally(|| finally_calls.set(finally_calls.get() + 1))
        .proceed()
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!((then_calls.get(), catch_calls.get(), finally_calls.get()), (1, 0, 1));
}

#[test]
fn default_operation_object_runs_once() {
    let calls = Cell::new(0);
    operation_from(DefaultOperation::new(|| {
        calls.set(calls.get() + 1);
        Ok::<_, ()>(())
    }))
    .proceed()
    .unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn create_reports_configuration_and_invokes_nothing() {
    let calls = Cell::new(0);
    let op = operation(|| {
        calls.set(calls.get() + 1);
        Ok::<_, ()>(())
    })
    .max_attempts(3)
    .attempts_interval(Duration::from_millis(90))
    .create()
    .unwrap();

    assert_eq!(op.max_attempts(), 3);
    assert_eq!(op.attempts_interval(), Duration::from_millis(90));
    assert_eq!(calls.get(), 0);
}

#[test]
fn verify_false_calls_catch_never_then() {
    let failed = Cell::new(0);
    let succeeded = Cell::new(0);
    let done = Cell::new(0);

    operation(|| Ok::<_, ()>(()))
        .verify(|_: &()| false)
        .catch(|_| failed.set(failed.get() + 1))
        .then(|_| succeeded.set(succeeded.get() + 1))
        .finally(|| done.set(done.get() + 1))
        .proceed()
        .unwrap();

    assert_eq!((failed.get(), succeeded.get(), done.get()), (1, 0, 1));
}

#[test]
fn polling_until_value_is_ready() {
    let sleeper = RecordingSleeper::default();
    let ready_at = 4;
    let mut polls = 0u32;
    let seen = RefCell::new(Vec::new());

    operation(|| {
        polls += 1;
        Ok::<_, String>(polls >= ready_at)
    })
    .max_attempts(10)
    .attempts_interval(Duration::from_millis(200))
    .verify(|ready: &bool| *ready)
    .sleeper(sleeper.shared())
    .then(|results| *seen.borrow_mut() = results)
    .proceed()
    .unwrap();

    assert_eq!(*seen.borrow(), vec![false, false, false, true]);
    assert_eq!(sleeper.waits(), vec![Duration::from_millis(200); 3]);
}

#[test]
fn closure_error_propagates_out_of_proceed() {
    let finally_ran = Cell::new(false);
    let err = operation(|| Err::<(), _>("connection refused"))
        .max_attempts(5)
        .finally(|| finally_ran.set(true))
        .proceed()
        .unwrap_err();
    assert!(matches!(err, PollError::Operation("connection refused")));
    assert!(!finally_ran.get());
}

#[test]
fn invalid_attempts_fail_at_configuration() {
    let calls = Cell::new(0);
    let created = operation(|| {
        calls.set(calls.get() + 1);
        Ok::<_, ()>(())
    })
    .max_attempts(0)
    .create();
    assert!(matches!(created, Err(ConfigError::ZeroAttempts)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn insist_retries_falsy_results() {
    let calls = Cell::new(0);
    insist(|| {
        calls.set(calls.get() + 1);
        Ok::<_, String>(false)
    })
    .tries(3)
    .sleeper(RecordingSleeper::default().shared())
    .proceed()
    .unwrap();
    assert_eq!(calls.get(), 3);
}

#[test]
fn insist_breaks_on_error() {
    let calls = Cell::new(0);
    let result = insist(|| {
        calls.set(calls.get() + 1);
        Err::<bool, _>("Something went wrong")
    })
    .tries(3)
    .proceed();
    assert!(matches!(result, Err(PollError::Operation("Something went wrong"))));
    assert_eq!(calls.get(), 1);
}

#[test]
fn insist_catch_ignores_errors() {
    let calls = Cell::new(0);
    insist(|| {
        calls.set(calls.get() + 1);
        Err::<bool, _>("Something went wrong")
    })
    .catch_exceptions()
    .tries(3)
    .sleeper(RecordingSleeper::default().shared())
    .proceed()
    .unwrap();
    assert_eq!(calls.get(), 3);
}

#[test]
fn chain_catches_once_and_skips_the_rest() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let third = Rc::new(Cell::new(0));
    let caught = Cell::new(0);

    let report = chain([
        FakeOperation::new(Rc::clone(&first), true),
        FakeOperation::new(Rc::clone(&second), false),
        FakeOperation::new(Rc::clone(&third), true),
    ])
    .sleeper(RecordingSleeper::default().shared())
    .catch(|reason| {
        assert_eq!(reason, RejectionError::Exhausted { attempts: 1 });
        caught.set(caught.get() + 1);
    })
    .proceed()
    .unwrap();

    assert_eq!(caught.get(), 1);
    assert_eq!((first.get(), second.get(), third.get()), (1, 1, 0));
    assert!(report.rejected);
    assert_eq!(report.fulfilled, 1);
}
