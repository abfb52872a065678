pub mod driver;
pub mod report;
pub mod workload;

pub use driver::Sim;
pub use report::Report;
pub use workload::Workload;
