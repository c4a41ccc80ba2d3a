//! Environment configuration for the backend

use anyhow::Context;
use quiz_core::{Extractor, NoiseFilter, QuizPrompt};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Server settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Extra noise rules appended to the defaults.
    pub extra_noise_patterns: Vec<String>,
    pub question_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            extra_noise_patterns: Vec::new(),
            question_count: quiz_core::prompt::DEFAULT_QUESTION_COUNT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let question_count = match lookup("QUIZ_QUESTION_COUNT") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("QUIZ_QUESTION_COUNT must be a positive number, got '{}'", raw)
            })?,
            None => defaults.question_count,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            extra_noise_patterns: lookup("QUIZ_EXTRA_NOISE_PATTERNS")
                .map(|raw| split_patterns(&raw))
                .unwrap_or_default(),
            question_count,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Extractor with the default noise rules plus the configured extras.
    pub fn extractor(&self) -> quiz_core::Result<Extractor> {
        let noise = NoiseFilter::default()
            .with_patterns(self.extra_noise_patterns.iter().map(String::as_str))?;
        Ok(Extractor::new(noise))
    }

    pub fn prompt(&self) -> QuizPrompt {
        QuizPrompt::new(self.question_count)
    }
}

fn split_patterns(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8000"),
            ("QUIZ_EXTRA_NOISE_PATTERNS", "^sure\\b; ;^alright"),
            ("QUIZ_QUESTION_COUNT", "10"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8000");
        assert_eq!(config.extra_noise_patterns, vec!["^sure\\b", "^alright"]);
        assert_eq!(config.prompt().question_count, 10);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_patterns_extend_extractor() {
        let config = Config {
            extra_noise_patterns: vec!["^sure\\b".to_string()],
            ..Config::default()
        };
        let extractor = config.extractor().unwrap();
        assert!(extractor.noise_filter().is_noise("Sure, quiz below"));
        assert!(extractor.noise_filter().is_noise("Here are the questions"));
    }

    #[test]
    fn test_invalid_pattern_fails_extractor() {
        let config = Config {
            extra_noise_patterns: vec!["(".to_string()],
            ..Config::default()
        };
        assert!(config.extractor().is_err());
    }
}
