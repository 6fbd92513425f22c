use std::env;

use log::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;

pub static CONTAINEROFUNIQUE_MODULES: &[&str] = &[
    "containerofunique_collections",
    "containerofunique_log",
    "containerofunique_test_log",
];

pub const ENV: &str = "RUST_LOG";

/// Shorthand accepted in `RUST_LOG` for all of [`CONTAINEROFUNIQUE_MODULES`].
pub const WORKSPACE_TARGET: &str = "containerofunique";

pub trait TargetsExt {
    fn with_containerofunique_targets(self, level: LevelFilter) -> Self;
    fn with_env(self) -> Self;
    fn with_directives(self, directives: &str) -> Self;
}

impl TargetsExt for Targets {
    fn with_containerofunique_targets(mut self, level: LevelFilter) -> Targets {
        for &module in CONTAINEROFUNIQUE_MODULES.iter() {
            self = self.with_target(module, level);
        }
        self
    }

    fn with_env(self) -> Targets {
        match env::var(ENV) {
            Ok(v) => self.with_directives(&v),
            Err(env::VarError::NotPresent) => self,
            Err(env::VarError::NotUnicode(_)) => panic!("env var {ENV} contains non-UTF-8 value"),
        }
    }

    /// Applies comma separated `target=level` directives. A bare `level`
    /// sets the default level.
    fn with_directives(mut self, directives: &str) -> Targets {
        for dir in directives.split(',').filter(|dir| !dir.is_empty()) {
            let mut iter = dir.splitn(2, '=');
            let (target, level) = match (iter.next(), iter.next()) {
                (Some(first), Some(second)) => (Some(first), second),
                (Some(first), None) => (None, first),
                (_, _) => unreachable!(),
            };
            let level: LevelFilter = match level.parse() {
                Ok(l) => l,
                // Ignore invalid directives.
                Err(_) => continue,
            };
            if let Some(t) = target {
                if t == WORKSPACE_TARGET {
                    self = self.with_containerofunique_targets(level);
                } else {
                    self = self.with_target(t, level);
                }
            } else {
                self = self.with_default(level);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use log::{level_filters::LevelFilter, Level};
    use tracing_subscriber::filter::Targets;

    use super::TargetsExt;

    #[test]
    fn it_enables_all_workspace_targets() {
        let targets = Targets::new().with_containerofunique_targets(LevelFilter::DEBUG);
        assert!(targets.would_enable("containerofunique_collections", &Level::DEBUG));
        assert!(targets.would_enable("containerofunique_collections::unique_deque", &Level::INFO));
        assert!(!targets.would_enable("containerofunique_collections", &Level::TRACE));
        assert!(!targets.would_enable("other_crate", &Level::ERROR));
    }

    #[test]
    fn it_parses_directives() {
        let targets = Targets::new().with_directives("warn,containerofunique=trace,foo=info");
        assert!(targets.would_enable("containerofunique_log", &Level::TRACE));
        assert!(targets.would_enable("foo", &Level::INFO));
        assert!(!targets.would_enable("foo", &Level::DEBUG));
        assert!(targets.would_enable("bar", &Level::WARN));
        assert!(!targets.would_enable("bar", &Level::INFO));
    }

    #[test]
    fn it_ignores_invalid_directives() {
        let targets = Targets::new().with_directives("foo=loud,,bar=debug");
        assert!(!targets.would_enable("foo", &Level::ERROR));
        assert!(targets.would_enable("bar", &Level::DEBUG));
    }
}
