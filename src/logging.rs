//! Logger setup for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose output is capped at warnings unless `RUST_LOG` asks otherwise.
const NOISY_MODULES: [&str; 3] = ["wgpu", "naga", "bevy_render"];

/// Level used when `RUST_LOG` is unset.
///
/// Verbose runs show the per-frame facing diagnostics logged at debug level.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn builder(verbose: bool) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(default_level(verbose));
    for module in NOISY_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    // Applied last so RUST_LOG directives win over the defaults above.
    builder.parse_env(Env::default());
    builder.format_timestamp_millis();
    builder
}

/// Installs the global logger.
///
/// Returns `false` when a logger was already installed, in which case the
/// existing one is kept.
#[must_use]
pub fn init(verbose: bool) -> bool {
    builder(verbose).try_init().is_ok()
}
