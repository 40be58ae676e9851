//! Command-line options shared by the bots

use std::time::Duration;

use clap::Args;

use super::beam::SearchConfig;
use super::error::Result;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Override the number of states kept per search level
    #[arg(long)]
    pub beam_width: Option<usize>,

    /// Override the number of turns searched ahead
    #[arg(long)]
    pub depth: Option<usize>,

    /// Stop deepening the search after this many milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Seed for tie-breaking randomness
    #[arg(long, default_value_t = 0x1234567890abcdef)]
    pub seed: u64,
}
impl SearchArgs {
    /// Apply the overrides on top of a bot's tuned defaults
    pub fn search_config(&self, defaults: SearchConfig) -> Result<SearchConfig> {
        SearchConfig::new(
            self.depth.unwrap_or(defaults.max_depth),
            self.beam_width.unwrap_or(defaults.beam_width),
            self.time_limit_ms.map(Duration::from_millis).or(defaults.time_limit),
        )
    }
}

/// Route log output to stderr, which the judge shows as debug output
pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn args() -> SearchArgs {
        SearchArgs { beam_width: None, depth: None, time_limit_ms: None, seed: 0 }
    }

    #[test]
    fn test_defaults_pass_through() {
        let defaults = SearchConfig::new(5, 8, Some(Duration::from_millis(40))).unwrap();
        assert_eq!(args().search_config(defaults).unwrap(), defaults);
    }

    #[test]
    fn test_overrides_are_validated() {
        let defaults = SearchConfig::new(5, 8, None).unwrap();
        let overridden = SearchArgs { beam_width: Some(3), time_limit_ms: Some(10), ..args() };
        let config = overridden.search_config(defaults).unwrap();
        assert_eq!(config.beam_width, 3);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.time_limit, Some(Duration::from_millis(10)));

        let invalid = SearchArgs { depth: Some(0), ..args() };
        assert!(matches!(invalid.search_config(defaults), Err(Error::InvalidConfiguration { .. })));
    }
}
