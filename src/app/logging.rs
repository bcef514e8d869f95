//! Diagnostic logging setup.

use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::domain::LogConfig;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "FORMLINK_LOG";

/// Level used until the config file has been read.
const BOOTSTRAP_LEVEL: &str = "warn";

/// Handle for narrowing or widening the filter once config is known.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Switch to `[log].level`. A `FORMLINK_LOG` directive stays in force.
    pub fn apply(&self, config: &LogConfig) {
        if self.from_env {
            return;
        }
        let _ = self.filter.reload(EnvFilter::new(crate_directive(&config.level)));
    }
}

/// Install the stderr subscriber before any config is read.
///
/// Returns `None` when a global subscriber already exists.
pub fn init() -> Option<LogHandle> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).ok();
    let from_env = env_filter.is_some();
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(crate_directive(BOOTSTRAP_LEVEL)));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok()?;

    Some(LogHandle { filter: handle, from_env })
}

fn crate_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME"), level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_targets_this_crate() {
        assert_eq!(crate_directive("debug"), "formlink=debug");
    }
}
