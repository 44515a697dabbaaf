// This file was generated by chanmock. Do not edit this code by hand
// unless you *really* know what you're doing. Expect any changes made
// manually to be overwritten the next time chanmock regenerates it.

pub mod nonblocking {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Debug)]
    pub struct MockCloser {
        pub close_called: ::chanmock_rt::Chan<bool>,
    }
    impl MockCloser {
        pub fn new() -> Self {
            Self {
                close_called: ::chanmock_rt::Chan::new(1),
            }
        }
    }
    impl ::std::default::Default for MockCloser {
        fn default() -> Self {
            Self::new()
        }
    }
    impl Closer for MockCloser {
        fn close(&self) {
            self.close_called.send(true);
        }
    }
}
