pub use fstalk_test_utils::builders;
pub use fstalk_test_utils::{drain, init_tracing, ScriptedSource};
