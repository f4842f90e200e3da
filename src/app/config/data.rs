use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ArcPath, ArcStr, log::LogLevel};

/// Options for path-based configuration values that can be accessed and modified.
#[derive(Debug, Clone, Copy)]
pub enum PathOpt {
    /// Directory where log files are stored
    LogDir,
}

/// Options for numeric configuration values that can be accessed and modified.
#[derive(Debug, Clone, Copy)]
pub enum USizeOpt {
    /// Maximum age of log files in days before they are deleted
    MaxAge,
    /// Timeout for network requests in seconds
    Timeout,
}

/// Options for string configuration values that can be accessed and modified.
#[derive(Debug, Clone, Copy)]
pub enum StrOpt {
    /// OMDb API key
    ApiKey,
    /// Root URL of the OMDb API
    BaseUrl,
    /// Search term of the default feed
    DefaultQuery,
    /// Type filter of the default feed (`movie`, `series`, `episode`)
    DefaultKind,
    /// Year filter of the default feed
    DefaultYear,
}

/// The configuration data structure that holds all configurable values.
///
/// Every field has a default, so a partial `config.toml` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    /// OMDb API key, overridden by `OMDB_API_KEY` and `--api-key`
    pub(crate) api_key: String,
    /// Root URL of the OMDb API
    pub(crate) base_url: String,
    /// Search term of the default feed
    pub(crate) default_query: String,
    /// Type filter of the default feed, empty for none
    pub(crate) default_kind: String,
    /// Year filter of the default feed, empty for none
    pub(crate) default_year: String,
    /// Directory where log files are stored
    pub(crate) log_dir: PathBuf,
    /// Minimum level printed to stderr on exit
    pub(crate) log_level: LogLevel,
    /// Maximum age of log files in days before they are deleted
    pub(crate) max_age: usize,
    /// Timeout for network requests in seconds
    pub(crate) timeout: usize,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.omdbapi.com/".to_string(),
            default_query: "2023".to_string(),
            default_kind: "movie".to_string(),
            default_year: "2023".to_string(),
            log_dir: PathBuf::from("/tmp/movie-info/logs"),
            log_level: LogLevel::Warning,
            max_age: 0,
            timeout: 30,
        }
    }
}

impl Data {
    pub fn path(&self, opt: PathOpt) -> ArcPath {
        match opt {
            PathOpt::LogDir => ArcPath::from(self.log_dir.as_path()),
        }
    }

    pub fn set_path(&mut self, opt: PathOpt, path: ArcPath) {
        match opt {
            PathOpt::LogDir => self.log_dir = path.to_path_buf(),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    pub fn usize(&self, opt: USizeOpt) -> usize {
        match opt {
            USizeOpt::MaxAge => self.max_age,
            USizeOpt::Timeout => self.timeout,
        }
    }

    pub fn set_usize(&mut self, opt: USizeOpt, value: usize) {
        match opt {
            USizeOpt::MaxAge => self.max_age = value,
            USizeOpt::Timeout => self.timeout = value,
        }
    }

    pub fn str(&self, opt: StrOpt) -> ArcStr {
        ArcStr::from(self.str_field(opt).as_str())
    }

    pub fn set_str(&mut self, opt: StrOpt, value: ArcStr) {
        let field = match opt {
            StrOpt::ApiKey => &mut self.api_key,
            StrOpt::BaseUrl => &mut self.base_url,
            StrOpt::DefaultQuery => &mut self.default_query,
            StrOpt::DefaultKind => &mut self.default_kind,
            StrOpt::DefaultYear => &mut self.default_year,
        };
        *field = value.to_string();
    }

    fn str_field(&self, opt: StrOpt) -> &String {
        match opt {
            StrOpt::ApiKey => &self.api_key,
            StrOpt::BaseUrl => &self.base_url,
            StrOpt::DefaultQuery => &self.default_query,
            StrOpt::DefaultKind => &self.default_kind,
            StrOpt::DefaultYear => &self.default_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_default_values() {
        let data = Data::default();
        assert_eq!(data.log_level(), LogLevel::Warning);
        assert_eq!(
            data.path(PathOpt::LogDir).to_str().unwrap(),
            "/tmp/movie-info/logs"
        );
        assert_eq!(data.usize(USizeOpt::MaxAge), 0);
        assert_eq!(data.usize(USizeOpt::Timeout), 30);
        assert_eq!(&*data.str(StrOpt::BaseUrl), "https://www.omdbapi.com/");
        assert_eq!(&*data.str(StrOpt::DefaultQuery), "2023");
        assert_eq!(&*data.str(StrOpt::DefaultKind), "movie");
        assert_eq!(&*data.str(StrOpt::DefaultYear), "2023");
        assert!(data.str(StrOpt::ApiKey).is_empty());
    }

    #[test]
    fn test_data_setters_and_getters() {
        let mut data = Data::default();

        data.set_log_level(LogLevel::Info);
        assert_eq!(data.log_level(), LogLevel::Info);

        let new_path = ArcPath::from(std::path::Path::new("/var/log"));
        data.set_path(PathOpt::LogDir, new_path.clone());
        assert_eq!(data.path(PathOpt::LogDir), new_path);

        data.set_usize(USizeOpt::Timeout, 5);
        assert_eq!(data.usize(USizeOpt::Timeout), 5);

        data.set_str(StrOpt::ApiKey, ArcStr::from("abc123"));
        assert_eq!(&*data.str(StrOpt::ApiKey), "abc123");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let data: Data = toml::from_str("api_key = \"k\"\ntimeout = 10\n").unwrap();
        assert_eq!(&*data.str(StrOpt::ApiKey), "k");
        assert_eq!(data.usize(USizeOpt::Timeout), 10);
        assert_eq!(&*data.str(StrOpt::DefaultKind), "movie");
        assert_eq!(data.log_level(), LogLevel::Warning);
    }

    #[test]
    fn test_data_serialization() {
        let mut data = Data::default();
        data.set_log_level(LogLevel::Error);
        data.set_usize(USizeOpt::MaxAge, 45);
        data.set_str(StrOpt::DefaultYear, ArcStr::from(""));

        let toml = toml::to_string_pretty(&data).unwrap();
        let deserialized: Data = toml::from_str(&toml).unwrap();
        assert_eq!(data, deserialized);
    }
}
