// This file was generated by chanmock. Do not edit this code by hand
// unless you *really* know what you're doing. Expect any changes made
// manually to be overwritten the next time chanmock regenerates it.

pub mod blocking {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Debug)]
    pub struct MockStoreGetInput {
        pub key: ::chanmock_rt::Chan<<str as ::std::borrow::ToOwned>::Owned>,
    }
    #[derive(Debug)]
    pub struct MockStoreGetOutput {
        pub ret0: ::chanmock_rt::Chan<String>,
        pub ret1: ::chanmock_rt::Chan<Option<String>>,
    }
    impl ::chanmock_rt::ReturnSink for MockStoreGetOutput {
        fn shape(&self) -> ::chanmock_rt::SinkShape<'_> {
            ::chanmock_rt::SinkShape::Aggregate(
                ::std::vec![
                    & self.ret0 as & dyn ::chanmock_rt::Slot, & self.ret1 as & dyn
                    ::chanmock_rt::Slot
                ],
            )
        }
    }
    #[derive(Debug)]
    pub struct MockStorePutInput {
        pub key: ::chanmock_rt::Chan<String>,
        pub value: ::chanmock_rt::Chan<Vec<u8>>,
    }
    #[derive(Debug)]
    pub struct MockStorePutOutput {
        pub ret0: ::chanmock_rt::Chan<bool>,
    }
    impl ::chanmock_rt::ReturnSink for MockStorePutOutput {
        fn shape(&self) -> ::chanmock_rt::SinkShape<'_> {
            ::chanmock_rt::SinkShape::Aggregate(
                ::std::vec![& self.ret0 as & dyn ::chanmock_rt::Slot],
            )
        }
    }
    #[derive(Debug)]
    pub struct MockStoreTagInput {
        pub arg0_: ::chanmock_rt::Chan<u8>,
        pub arg0: ::chanmock_rt::Chan<u16>,
    }
    #[derive(Debug)]
    pub struct MockStoreTagOutput {
        pub block_return: ::chanmock_rt::Chan<bool>,
    }
    impl ::chanmock_rt::ReturnSink for MockStoreTagOutput {
        fn shape(&self) -> ::chanmock_rt::SinkShape<'_> {
            ::chanmock_rt::SinkShape::Aggregate(
                ::std::vec![& self.block_return as & dyn ::chanmock_rt::Slot],
            )
        }
    }
    #[derive(Debug)]
    pub struct MockStoreCloseOutput {
        pub block_return: ::chanmock_rt::Chan<bool>,
    }
    impl ::chanmock_rt::ReturnSink for MockStoreCloseOutput {
        fn shape(&self) -> ::chanmock_rt::SinkShape<'_> {
            ::chanmock_rt::SinkShape::Aggregate(
                ::std::vec![& self.block_return as & dyn ::chanmock_rt::Slot],
            )
        }
    }
    #[derive(Debug)]
    pub struct MockStore {
        pub get_called: ::chanmock_rt::Chan<bool>,
        pub get_input: MockStoreGetInput,
        pub get_output: MockStoreGetOutput,
        pub put_called: ::chanmock_rt::Chan<bool>,
        pub put_input: MockStorePutInput,
        pub put_output: MockStorePutOutput,
        pub tag_called: ::chanmock_rt::Chan<bool>,
        pub tag_input: MockStoreTagInput,
        pub tag_output: MockStoreTagOutput,
        pub close_called: ::chanmock_rt::Chan<bool>,
        pub close_output: MockStoreCloseOutput,
    }
    impl MockStore {
        pub fn new() -> Self {
            Self {
                get_called: ::chanmock_rt::Chan::new(0),
                get_input: MockStoreGetInput {
                    key: ::chanmock_rt::Chan::new(0),
                },
                get_output: MockStoreGetOutput {
                    ret0: ::chanmock_rt::Chan::new(0),
                    ret1: ::chanmock_rt::Chan::nullable(0),
                },
                put_called: ::chanmock_rt::Chan::new(0),
                put_input: MockStorePutInput {
                    key: ::chanmock_rt::Chan::new(0),
                    value: ::chanmock_rt::Chan::new(0),
                },
                put_output: MockStorePutOutput {
                    ret0: ::chanmock_rt::Chan::new(0),
                },
                tag_called: ::chanmock_rt::Chan::new(0),
                tag_input: MockStoreTagInput {
                    arg0_: ::chanmock_rt::Chan::new(0),
                    arg0: ::chanmock_rt::Chan::new(0),
                },
                tag_output: MockStoreTagOutput {
                    block_return: ::chanmock_rt::Chan::new(0),
                },
                close_called: ::chanmock_rt::Chan::new(0),
                close_output: MockStoreCloseOutput {
                    block_return: ::chanmock_rt::Chan::new(0),
                },
            }
        }
    }
    impl ::std::default::Default for MockStore {
        fn default() -> Self {
            Self::new()
        }
    }
    impl Store for MockStore {
        fn get(&self, key: &str) -> (String, Option<String>) {
            self.get_called.send(true);
            self.get_input.key.send(<str as ::std::borrow::ToOwned>::to_owned(key));
            (self.get_output.ret0.recv(), self.get_output.ret1.recv())
        }
        fn put(&mut self, key: String, value: Vec<u8>) -> bool {
            self.put_called.send(true);
            self.put_input.key.send(key);
            self.put_input.value.send(value);
            self.put_output.ret0.recv()
        }
        fn tag(&self, arg0_: u8, arg0: u16) {
            self.tag_called.send(true);
            self.tag_input.arg0_.send(arg0_);
            self.tag_input.arg0.send(arg0);
            self.tag_output.block_return.recv();
        }
    }
    impl Closer for MockStore {
        fn close(&self) {
            self.close_called.send(true);
            self.close_output.block_return.recv();
        }
    }
    #[derive(Debug)]
    pub struct MockCloserCloseOutput {
        pub block_return: ::chanmock_rt::Chan<bool>,
    }
    impl ::chanmock_rt::ReturnSink for MockCloserCloseOutput {
        fn shape(&self) -> ::chanmock_rt::SinkShape<'_> {
            ::chanmock_rt::SinkShape::Aggregate(
                ::std::vec![& self.block_return as & dyn ::chanmock_rt::Slot],
            )
        }
    }
    #[derive(Debug)]
    pub struct MockCloser {
        pub close_called: ::chanmock_rt::Chan<bool>,
        pub close_output: MockCloserCloseOutput,
    }
    impl MockCloser {
        pub fn new() -> Self {
            Self {
                close_called: ::chanmock_rt::Chan::new(0),
                close_output: MockCloserCloseOutput {
                    block_return: ::chanmock_rt::Chan::new(0),
                },
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
            self.close_output.block_return.recv();
        }
    }
}
