pub mod log;
pub mod test_dirs;

pub use self::log::enable_logs;
