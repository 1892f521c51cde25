//! Settings for the CLI, layered from files and environment.

use config::{Config, ConfigError, Environment, File};
use mortgage_calc_core::rate_solver::SolverConfig;
use mortgage_calc_core::rate_source::DEFAULT_ANNUAL_RATE_PERCENT;
use mortgage_calc_core::validation::InputLimits;
use mortgage_calc_core::{Compounding, Percent};
use serde::Deserialize;

/// CLI settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Convention used when a command does not name one
    #[serde(default)]
    pub compounding: Compounding,
    /// Where the default rate comes from when `--rate` is omitted
    #[serde(default)]
    pub rate_source: RateSourceConfig,
    /// Bisection settings for `solve-rate`
    #[serde(default)]
    pub solver: SolverConfig,
    /// Accepted input ranges
    #[serde(default)]
    pub limits: InputLimits,
}

impl Settings {
    /// Load settings. Later sources override earlier ones:
    /// 1. `config/mortcalc.{toml,yaml,json}`
    /// 2. `mortcalc.{toml,yaml,json}` in the working directory
    /// 3. the file passed with `--config`, which must exist
    /// 4. environment variables prefixed with `MORTCALC_` (`__` separates sections)
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/mortcalc").required(false))
            .add_source(File::with_name("mortcalc").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let config = builder.add_source(environment()).build()?;

        config.try_deserialize()
    }
}

/// `MORTCALC_COMPOUNDING`, `MORTCALC_SOLVER__MAX_ITERATIONS`, ...
fn environment() -> Environment {
    Environment::with_prefix("MORTCALC")
        .prefix_separator("_")
        .separator("__")
}

/// External rate lookup.
#[derive(Debug, Deserialize, Clone)]
pub struct RateSourceConfig {
    /// Endpoint answering `{"annual_rate_percent": <number>}`; unset means
    /// the fallback rate is used directly.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate_percent: Percent,
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_ms: default_timeout_ms(),
            fallback_rate_percent: default_fallback_rate(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    3_000
}

fn default_fallback_rate() -> Percent {
    DEFAULT_ANNUAL_RATE_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn from_env(vars: &[(&str, &str)]) -> Settings {
        let vars: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.compounding, Compounding::MonthlyEffective);
        assert_eq!(settings.rate_source.fallback_rate_percent, dec!(6.0));
        assert_eq!(settings.rate_source.timeout_ms, 3_000);
        assert!(settings.rate_source.url.is_none());
        assert_eq!(settings.solver.max_iterations, 500);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::builder()
            .set_override("compounding", "daily_thirty_day")
            .unwrap()
            .set_override("rate_source.url", "http://localhost:9000/rate")
            .unwrap()
            .set_override("solver.max_iterations", 50_i64)
            .unwrap()
            .build()
            .unwrap();
        let settings: Settings = config.try_deserialize().unwrap();

        assert_eq!(settings.compounding, Compounding::DailyThirtyDay);
        assert_eq!(settings.rate_source.url.as_deref(), Some("http://localhost:9000/rate"));
        assert_eq!(settings.rate_source.timeout_ms, 3_000);
        assert_eq!(settings.solver.max_iterations, 50);
        assert_eq!(settings.solver.upper_bound_percent, dec!(12.0));
    }

    #[test]
    fn test_single_underscore_prefix_env_vars() {
        let settings = from_env(&[
            ("MORTCALC_COMPOUNDING", "daily_thirty_day"),
            ("MORTCALC_SOLVER__MAX_ITERATIONS", "1"),
            ("MORTCALC_RATE_SOURCE__FALLBACK_RATE_PERCENT", "5.25"),
        ]);

        assert_eq!(settings.compounding, Compounding::DailyThirtyDay);
        assert_eq!(settings.solver.max_iterations, 1);
        assert_eq!(settings.rate_source.fallback_rate_percent, dec!(5.25));
        assert_eq!(settings.solver.upper_bound_percent, dec!(12.0));
    }

    #[test]
    fn test_unprefixed_env_vars_are_ignored() {
        let settings = from_env(&[("COMPOUNDING", "daily_thirty_day")]);
        assert_eq!(settings.compounding, Compounding::MonthlyEffective);
    }
}
