use tessera_core::config::{BenchmarkMode, Config};

#[test]
fn test_init_is_idempotent() {
    let config = Config::default()
        .with_log_filter("warn")
        .with_benchmark(BenchmarkMode::On);

    config.init();
    config.init();

    tracing::warn!("logging installed");
}
