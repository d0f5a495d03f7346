use std::env;

use log::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;

pub static KLIST_MODULES: &[&str] = &[
    "klist_collections",
    "klist_log",
    "klist_test_log",
];

/// Pseudo-target expanding to every module in [`KLIST_MODULES`].
pub const KLIST_TARGET: &str = "klist";

pub const ENV: &str = "RUST_LOG";

pub trait TargetsExt {
    fn with_klist_targets(self, level: LevelFilter) -> Self;
    fn with_directives(self, directives: &str) -> Self;
    fn with_env(self) -> Self;
}

impl TargetsExt for Targets {
    fn with_klist_targets(mut self, level: LevelFilter) -> Targets {
        for &module in KLIST_MODULES.iter() {
            self = self.with_target(module, level);
        }
        self
    }

    /// Applies comma-separated `target=level` or bare `level` directives.
    fn with_directives(mut self, directives: &str) -> Targets {
        for dir in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let (target, level) = match dir.split_once('=') {
                Some((target, level)) => (Some(target), level),
                None => (None, dir),
            };
            let level: LevelFilter = match level.parse() {
                Ok(l) => l,
                // Ignore invalid directives.
                Err(_) => continue,
            };
            match target {
                Some(KLIST_TARGET) => self = self.with_klist_targets(level),
                Some(t) => self = self.with_target(t, level),
                None => self = self.with_default(level),
            }
        }
        self
    }

    fn with_env(self) -> Targets {
        let directives = match env::var(ENV) {
            Ok(v) => v,
            Err(env::VarError::NotPresent) => return self,
            Err(env::VarError::NotUnicode(_)) => panic!("env var {ENV} contains non-UTF-8 value"),
        };
        self.with_directives(&directives)
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn klist_targets_cover_all_modules() {
        let targets = Targets::new().with_klist_targets(LevelFilter::DEBUG);
        for module in KLIST_MODULES {
            assert!(targets.would_enable(module, &Level::DEBUG));
            assert!(!targets.would_enable(module, &Level::TRACE));
        }
        assert!(!targets.would_enable("other_crate", &Level::ERROR));
    }

    #[test]
    fn directives_are_applied_in_order() {
        let targets = Targets::new()
            .with_default(LevelFilter::INFO)
            .with_directives("warn,klist=trace,hyper=error");

        assert!(targets.would_enable("klist_collections", &Level::TRACE));
        assert!(targets.would_enable("klist_log", &Level::TRACE));
        assert!(!targets.would_enable("hyper", &Level::WARN));
        assert!(targets.would_enable("hyper", &Level::ERROR));
        assert!(!targets.would_enable("other_crate", &Level::INFO));
        assert!(targets.would_enable("other_crate", &Level::WARN));
    }

    #[test]
    fn invalid_directives_are_ignored() {
        let targets = Targets::new()
            .with_default(LevelFilter::INFO)
            .with_directives("klist_collections=loud, ,klist_log=debug");

        assert!(!targets.would_enable("klist_collections", &Level::DEBUG));
        assert!(targets.would_enable("klist_collections", &Level::INFO));
        assert!(targets.would_enable("klist_log", &Level::DEBUG));
    }
}
