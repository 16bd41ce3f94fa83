#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;
pub(crate) mod yaml_lint;

pub(crate) use test_context::TestContext;
