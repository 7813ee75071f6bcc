use crate::logging;
use crate::profiling::{ProfilingBackend, init_profiling};

/// Configuration for the Tessera editor UI runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub benchmark: BenchmarkMode,
    /// `tracing` filter directives applied by [`Config::init`].
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            benchmark: BenchmarkMode::Off,
            log_filter: logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn with_benchmark(mut self, mode: BenchmarkMode) -> Self {
        self.benchmark = mode;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Install logging and, if requested, profiling.
    pub fn init(&self) {
        logging::init_with_filter(&self.log_filter);

        match self.benchmark {
            BenchmarkMode::Off => {}
            BenchmarkMode::On => puffin::set_scopes_on(true),
            BenchmarkMode::WithWebserver => init_profiling(ProfilingBackend::PuffinHttp),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkMode {
    /// Benchmarking is disabled
    Off,
    /// Profiling scopes are recorded in-process
    On,
    /// Profiling scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebserver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.benchmark, BenchmarkMode::Off);
        assert_eq!(config.log_filter, logging::DEFAULT_FILTER);
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .with_benchmark(BenchmarkMode::On)
            .with_log_filter("trace");
        assert_eq!(config.benchmark, BenchmarkMode::On);
        assert_eq!(config.log_filter, "trace");
    }
}
