//! Console logging for the recipebox CLI
//!
//! `RUST_LOG` wins when set. Otherwise the server crates log at `info`
//! (or `debug` with `--debug`) and sqlx statement logging stays quiet.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
}

impl TracingConfig {
    fn default_directives(&self) -> &'static str {
        if self.debug {
            "recipebox=debug,recipebox_server=debug,tower_http=debug,sqlx=info"
        } else {
            "recipebox=info,recipebox_server=info,tower_http=info,sqlx=warn"
        }
    }

    fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(self.default_directives())?),
        }
    }
}

/// Install the global compact subscriber. Fails if one is already set.
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for debug in [false, true] {
            let config = TracingConfig { debug };
            assert!(EnvFilter::try_new(config.default_directives()).is_ok());
        }
    }

    #[test]
    fn debug_raises_server_level() {
        let quiet = TracingConfig { debug: false }.default_directives();
        let loud = TracingConfig { debug: true }.default_directives();
        assert!(quiet.contains("recipebox_server=info"));
        assert!(loud.contains("recipebox_server=debug"));
    }
}
