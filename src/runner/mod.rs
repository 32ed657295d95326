pub mod aggregate;
pub mod batch;
pub mod trial;

pub use batch::{run_batch, run_batch_parallel, BatchConfig, BatchOutput, BatchStats};
pub use trial::{run_trial, Trial};
