// Traits the mocks in this directory are generated from. `tests/fixture_tests.rs` in the generator crate
// regenerates `mocks_blocking.rs` and `mocks_nonblocking.rs` from this file and fails when they drift.

pub trait Store: Closer {
    fn get(&self, key: &str) -> (String, Option<String>);
    fn put(&mut self, key: String, value: Vec<u8>) -> bool;
    fn tag(&self, _: u8, arg0: u16);
}

pub trait Closer {
    fn close(&self);
}
