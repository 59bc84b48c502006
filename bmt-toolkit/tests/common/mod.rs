//! Shared fixture for integration tests

use bmt_toolkit::Toolkit;

pub fn toolkit() -> Toolkit {
    Toolkit::from_yaml(include_str!("../data/test-model.yaml")).expect("test model should load")
}
