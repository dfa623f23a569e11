//! bioventure-test-utils: fakes and fixtures shared by the workspace tests.

pub mod fake_backend;
pub mod fixtures;

pub use fake_backend::{FakeBackend, FakeReply, Gate, RecordedCall};
pub use fixtures::{sample_plan, sample_plan_json, scenario_context};
