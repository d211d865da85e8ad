//! Logger initialisation for the command-line front end.

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Initializes the global logger.
///
/// When `verbose` is `true`, all debug messages are printed. Otherwise only
/// warnings and above are shown, so evaluation output stays clean.
/// `RUST_LOG` overrides either default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // `try_init` only fails if a logger was already set, which happens when
    // tests call `init` more than once.
    if builder.try_init().is_err() {
        debug!("logger already installed; keeping the existing one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn repeated_init_is_harmless() {
        init(false);
        init(true);
        log::warn!("still logging after a second init");
    }
}
