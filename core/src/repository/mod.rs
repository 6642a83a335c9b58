pub mod file;
pub mod traits;

// Re-export
pub use file::{sample_state_amounts, FileRevenueRepository};
pub use traits::RevenueRepository;
