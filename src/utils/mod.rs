pub mod file_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{ensure_output_dir, save_json_report, write_report_bytes};
pub use log_utils::{init_logging, log_run_banner, log_run_footer};
pub use url_utils::{display_name, page_url, read_page_slugs};
