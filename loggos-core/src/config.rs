use std::sync::LazyLock;

use derive_from_env::FromEnv;

/// Buffer sizes used by the default loggers, read from `LOGGOS_*` variables.
#[derive(FromEnv)]
#[from_env(prefix = "LOGGOS")]
#[allow(non_snake_case)]
pub struct LoggosConfig {
    #[from_env(default = "500")]
    pub LINE_BUFFER: usize,
    #[from_env(default = "500")]
    pub JSON_BUFFER: usize,
}

impl Default for LoggosConfig {
    fn default() -> Self {
        Self {
            LINE_BUFFER: 500,
            JSON_BUFFER: 500,
        }
    }
}

pub static LOGGOS_CONFIG: LazyLock<LoggosConfig> =
    LazyLock::new(|| LoggosConfig::from_env().unwrap_or_default());

#[test]
fn test_default_config() {
    let config = LoggosConfig::default();
    assert_eq!(config.LINE_BUFFER, 500);
    assert_eq!(config.JSON_BUFFER, 500);
}
