mod mock_runner;
mod process_runner;

pub use mock_runner::MockInferenceRunner;
pub use process_runner::CommandInferenceRunner;
