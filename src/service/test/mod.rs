
mod schedule;

pub(crate) use executor::{ExecutorCall, StubExecutor};
