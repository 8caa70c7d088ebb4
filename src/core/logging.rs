use std::env;
use std::io;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Stdout carries the results, so diagnostics go to stderr and stay quiet
/// below WARN unless `RUST_LOG` asks for more.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

fn filter_from(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives.unwrap_or_default())
}

pub fn init() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter_from(directives.as_deref()))
        .with_target(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => debug!("Logging initialised"),
        Err(e) => eprintln!("Failed to init logging. {e}"),
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::filter_from;

    #[test]
    fn defaults_to_warn() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(filter_from(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn directives_raise_the_level() {
        assert_eq!(
            filter_from(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            filter_from(Some("trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
