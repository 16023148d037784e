use serde::Deserialize;
use std::{fs, path::Path};

/// Arguments passed to the bound diagnostic call in the driver.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DiagConfig {
    pub a: f32,
    pub b: i32,
}
impl Default for DiagConfig {
    fn default() -> Self {
        Self { a: 1.0, b: 2 }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub diag: DiagConfig,
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load from `path`, falling back to defaults on any error. The error, if
    /// any, is returned alongside so the caller can log it.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. Suspicious values, not hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if !self.diag.a.is_finite() {
            w.push(format!("diag.a {} is not finite", self.diag.a));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_reproduce_canonical_diag_args() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.diag.a, 1.0);
        assert_eq!(cfg.diag.b, 2);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn parse_nominal_config() {
        let sample = r"(
            diag: (a: 0.5, b: -3),
        )";
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = DemoConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.diag.a, 0.5);
        assert_eq!(cfg.diag.b, -3);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let sample = r"(diag: (b: 9))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = DemoConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.diag.a, 1.0);
        assert_eq!(cfg.diag.b, 9);
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = DemoConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg, DemoConfig::default());
    }

    #[test]
    fn validate_flags_non_finite_diag() {
        let cfg = DemoConfig {
            diag: DiagConfig {
                a: f32::NAN,
                b: 0,
            },
        };
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("diag.a")));
    }
}
