//! Drive generated mocks through complete call protocols.
//!
//! The mocks under `store/` are real `chanmock` output for `store/traits.rs`:
//!
//! - `mocks_blocking.rs`: `--chan-size 0 --blocking-return --module blocking`
//! - `mocks_nonblocking.rs`: `--type Closer --chan-size 1 --module nonblocking`
//!
//! The generator's fixture test keeps both files in sync with the generator, so these tests compile and run the
//! code `chanmock` actually emits.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chanmock_rt::prelude::*;

include!("store/traits.rs");
include!("store/mocks_blocking.rs");
include!("store/mocks_nonblocking.rs");

use blocking::{MockCloser, MockStore, MockStoreCloseOutput};

#[test]
fn test_get_protocol_signal_inputs_then_outputs() {
    let mock = Arc::new(MockStore::new());
    let caller = {
        let mock = Arc::clone(&mock);
        thread::spawn(move || mock.get("k"))
    };

    assert!(mock.get_called.recv());
    assert_eq!(mock.get_input.key.recv(), "k");
    ret!(mock.get_output, "v".to_string(), nil()).unwrap();

    assert_eq!(caller.join().unwrap(), ("v".to_string(), None));
}

#[test]
fn test_get_with_present_optional_result() {
    let mock = Arc::new(MockStore::new());
    let caller = {
        let mock = Arc::clone(&mock);
        thread::spawn(move || mock.get("k2"))
    };

    assert!(mock.get_called.recv());
    assert_eq!(mock.get_input.key.recv(), "k2");
    ret!(mock.get_output, "v2".to_string(), Some("warn".to_string())).unwrap();

    assert_eq!(caller.join().unwrap(), ("v2".to_string(), Some("warn".to_string())));
}

#[test]
fn test_put_takes_mutable_receiver() {
    let mut mock = MockStore::new();
    thread::scope(|s| {
        let called = mock.put_called.clone();
        let key = mock.put_input.key.clone();
        let value = mock.put_input.value.clone();
        let ret0 = mock.put_output.ret0.clone();
        s.spawn(move || {
            assert!(called.recv());
            assert_eq!(key.recv(), "k");
            assert_eq!(value.recv(), vec![1, 2, 3]);
            ret!(ret0, true).unwrap();
        });
        assert!(mock.put("k".to_string(), vec![1, 2, 3]));
    });
}

#[test]
fn test_unnamed_param_does_not_clash_with_declared_one() {
    let mock = Arc::new(MockStore::new());
    let caller = {
        let mock = Arc::clone(&mock);
        thread::spawn(move || mock.tag(7, 300))
    };

    assert!(mock.tag_called.recv());
    assert_eq!(mock.tag_input.arg0_.recv(), 7u8);
    assert_eq!(mock.tag_input.arg0.recv(), 300u16);
    ret!(mock.tag_output, true).unwrap();
    caller.join().unwrap();
}

#[test]
fn test_supertrait_methods_are_mocked() {
    fn close_through_supertrait(closer: &dyn Closer) {
        closer.close();
    }

    let mock = Arc::new(MockStore::new());
    let caller = {
        let mock = Arc::clone(&mock);
        thread::spawn(move || close_through_supertrait(&*mock))
    };

    assert!(mock.close_called.recv());
    ret!(mock.close_output, true).unwrap();
    caller.join().unwrap();
}

#[test]
fn test_close_waits_for_gate() {
    let mock = Arc::new(MockCloser::new());
    let caller = {
        let mock = Arc::clone(&mock);
        thread::spawn(move || mock.close())
    };

    assert!(mock.close_called.recv());
    thread::sleep(Duration::from_millis(20));
    assert!(!caller.is_finished());

    ret!(mock.close_output, true).unwrap();
    caller.join().unwrap();
}

#[test]
fn test_close_without_blocking_returns_immediately() {
    let mock = nonblocking::MockCloser::new();
    mock.close();
    assert_eq!(mock.close_called.try_recv(), Some(true));
    assert_eq!(mock.close_called.try_recv(), None);
}

#[test]
fn test_stub_arity_is_checked_before_sending() {
    let mock = MockStore::new();
    let err = ret!(mock.get_output, "only one".to_string()).unwrap_err();
    assert_eq!(err, DispatchError::ArityMismatch { expected: 2, given: 1 });
    assert!(mock.get_output.ret0.is_empty());
}

#[test]
fn test_buffered_mock_does_not_block_caller() {
    let mock = MockStore {
        close_called: Chan::new(1),
        close_output: MockStoreCloseOutput {
            block_return: Chan::new(1),
        },
        ..MockStore::new()
    };
    ret!(mock.close_output, true).unwrap();
    mock.close();
    assert_eq!(mock.close_called.try_recv(), Some(true));
}
