use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trace how long has passed since `$start`, e.g. `trace_time!(start, "dijkstra", nodes = n)`
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Filter used when neither `RUST_LOG` nor `GRAPHTREE_LOG` is set.
///
/// `--log-level` wins over `--verbose`. A bare level such as `debug` is
/// applied to both graphtree crates; anything containing `=` is passed
/// through as a full filter.
fn default_filter(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(filter) if filter.contains('=') => filter.to_string(),
        Some(level) => format!("graphtree={level},graphtree_core={level}"),
        None if verbose => "graphtree=debug,graphtree_core=debug".to_string(),
        None => "graphtree=warn,graphtree_core=warn".to_string(),
    }
}

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` takes precedence, then `GRAPHTREE_LOG`, then the CLI flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHTREE_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, log_level)));

    let json_layer = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
    });
    let compact_layer = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiet_by_default() {
        assert_eq!(
            default_filter(false, None),
            "graphtree=warn,graphtree_core=warn"
        );
        assert_eq!(
            default_filter(true, None),
            "graphtree=debug,graphtree_core=debug"
        );
    }

    #[test]
    fn test_default_filter_bare_level_covers_both_crates() {
        assert_eq!(
            default_filter(true, Some("trace")),
            "graphtree=trace,graphtree_core=trace"
        );
    }

    #[test]
    fn test_default_filter_full_directive_is_kept() {
        assert_eq!(
            default_filter(false, Some("graphtree_core=info")),
            "graphtree_core=info"
        );
    }
}
