//! Tracing subscriber setup for binaries and demos.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset. Calling it again, or after
/// another subscriber was installed, is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init();
        super::init();
        tracing::info!("logging initialised twice");
    }
}
