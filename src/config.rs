use std::env;

use anyhow::Context;
use anyhow::bail;

/// Default board size of a run
pub const DEFAULT_WIDTH: usize = 9;
pub const DEFAULT_HEIGHT: usize = 9;

pub const WIDTH_VAR: &str = "LIFEGRID_WIDTH";
pub const HEIGHT_VAR: &str = "LIFEGRID_HEIGHT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Config {
    /// The default configuration, with `LIFEGRID_WIDTH` and `LIFEGRID_HEIGHT` taking precedence
    /// when they are set.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(width) = lookup(WIDTH_VAR) {
            config.width = parse_dimension(WIDTH_VAR, &width)?;
        }

        if let Some(height) = lookup(HEIGHT_VAR) {
            config.height = parse_dimension(HEIGHT_VAR, &height)?;
        }

        Ok(config)
    }
}

fn parse_dimension(key: &str, value: &str) -> anyhow::Result<usize> {
    let n: usize = value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got \"{value}\""))?;

    if n == 0 {
        bail!("{key} must be a positive integer, got 0")
    }

    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::Config;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_to_nine_by_nine() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!((config.width, config.height), (9, 9));
    }

    #[test]
    fn environment_overrides() {
        let vars = [("LIFEGRID_WIDTH", "20"), ("LIFEGRID_HEIGHT", " 12 ")];
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!((config.width, config.height), (20, 12));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("LIFEGRID_WIDTH", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LIFEGRID_HEIGHT", "-3")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LIFEGRID_HEIGHT", "big")])).is_err());
    }
}
