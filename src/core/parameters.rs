use std::collections::HashMap;

use tracing::warn;

pub const DEFAULT_BLOCK_SIZE: usize = 1024;
pub const DEFAULT_SAMPLE_RATE: usize = 48_000;

/// String-keyed configuration handed down from the hosting framework.
/// Individual renderer variants look up the options they recognize and
/// ignore the rest.
pub struct ParameterMap {
    entries: HashMap<String, String>,
}

impl ParameterMap {
    pub fn new() -> ParameterMap {
        ParameterMap {
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(|v| v.as_str()).unwrap_or(default)
    }

    pub fn get_usize(&self, key: &str, default: usize) -> usize {
        let Some(value) = self.entries.get(key) else {
            return default;
        };
        match value.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!(
                    "option \"{}\" has non-numeric value \"{}\", using {}",
                    key, value, default
                );
                default
            }
        }
    }
}

impl Default for ParameterMap {
    fn default() -> ParameterMap {
        ParameterMap::new()
    }
}

/// Process-wide audio constants, fixed for the renderer's entire run.
#[derive(Clone, Copy)]
pub struct RenderConfig {
    /// Samples per processing block
    pub block_size: usize,

    /// Samples per second
    pub sample_rate: usize,
}

impl RenderConfig {
    pub fn new(block_size: usize, sample_rate: usize) -> RenderConfig {
        assert!(block_size > 0);
        assert!(sample_rate > 0);
        RenderConfig {
            block_size,
            sample_rate,
        }
    }

    pub fn from_params(params: &ParameterMap) -> RenderConfig {
        RenderConfig::new(
            params.get_usize("block_size", DEFAULT_BLOCK_SIZE),
            params.get_usize("sample_rate", DEFAULT_SAMPLE_RATE),
        )
    }
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig::new(DEFAULT_BLOCK_SIZE, DEFAULT_SAMPLE_RATE)
    }
}
