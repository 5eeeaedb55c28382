use env_logger::Env;
use std::env;

pub fn enable_logs(enable: bool) {
    if enable {
        if let Ok(_env) = env::var("RUST_LOG") {
            env_logger::try_init_from_env(Env::default()).ok();
        } else {
            env_logger::builder()
                .filter_level(log::LevelFilter::Debug)
                .filter(Some("actix_server"), log::LevelFilter::Warn)
                .filter(Some("actix_web"), log::LevelFilter::Info)
                .filter(Some("diesel_migrations"), log::LevelFilter::Warn)
                .format_timestamp_millis()
                .is_test(true)
                .try_init()
                .ok();
        }
    }
}
