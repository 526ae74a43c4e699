pub mod batch;

pub use batch::process_pages_in_batches;
