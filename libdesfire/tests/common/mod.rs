#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use libdesfire::test_support::{boxed_mock_with_responses, mock_card, wrap_native_response};
