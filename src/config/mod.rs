//! Config loading module, settings in Rust Object Notation (RON) plus the two line account file.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 9, 2026

use super::{
    include::{
        clap_app, config_dir, default_format, from_str, io, read_to_string, AdaptiveFormat,
        Cleanup, ColoredHelp, Criterion, Deserialize, DirBuilder, Duplicate, LevelFilter,
        LogSpecBuilder, Logger, Naming, OpenOptions, PathBuf, ReconfigurationHandle, Result,
        Serialize, Write,
    },
    myerrors::ConfigError,
};

mod default;

use default::DEFAULT_CONFIG;

fn validate_pathbuf(to_validate: PathBuf, config_path_arg: &PathBuf) -> PathBuf {
    if to_validate.is_relative() && *config_path_arg == PathBuf::new() {
        let mut result = config_dir().unwrap_or_default();
        result.push("tgtgmon/");
        result.push(to_validate);
        result
    } else if to_validate.is_relative() && *config_path_arg != PathBuf::new() {
        let mut result = match config_path_arg.parent() {
            Some(cd) => (*cd).to_path_buf(),
            None => PathBuf::new(),
        };
        result.push(to_validate);
        result
    } else {
        to_validate
    }
}

/// Settings plus the account, and the logger handle that has to outlive the run.
pub struct Config {
    pub settings: ConfigFile,
    pub account: AccountFile,
    _logger: ReconfigurationHandle,
}

impl Config {
    /// Reads the cli args, the RON settings and the account file, and starts the logger.
    pub fn generate() -> Result<Self> {
        let args = clap_app!(tgtgmon =>
        (version: env!("CARGO_PKG_VERSION"))
        (author: "Curtis Jones <mail@curtisjones.ca>")
        (about: "program to watch too good to go favourites and post restocks to a webhook")
        (@arg CONFIG:  -c --config   +takes_value "Sets a custom config file.")
        (@arg ACCOUNT: -a --account  +takes_value "Override the account file named in the config."))
        .setting(ColoredHelp)
        .get_matches();
        // ~/.config/tgtgmon/config.ron or the platform equivalent.
        let default_config_path = match config_dir() {
            Some(mut cd) => {
                cd.push("tgtgmon/config.ron");
                cd
            }
            None => PathBuf::new(),
        };
        let config_path_arg = match args.value_of("CONFIG") {
            Some(cfg) => PathBuf::from(cfg),
            None => PathBuf::new(),
        };
        // a missing default settings file gets written out, a missing -c file is fatal.
        let mut settings = match ConfigFile::load(if config_path_arg == PathBuf::new() {
            &default_config_path
        } else {
            &config_path_arg
        }) {
            Ok(settings) => settings,
            Err(e) => {
                let e = e.downcast::<io::Error>()?;
                match e.as_ref().kind() {
                    io::ErrorKind::NotFound => {
                        if config_path_arg == PathBuf::new() {
                            // make sure the config dir is there before writing into it.
                            if let Some(dir) = default_config_path.parent() {
                                DirBuilder::new().recursive(true).create(dir)?;
                            }
                            OpenOptions::new()
                                .write(true)
                                .create(true)
                                .open(&default_config_path)?
                                .write_all(DEFAULT_CONFIG.as_bytes())?;
                            ConfigFile::parse(DEFAULT_CONFIG)?
                        } else {
                            return Err(e);
                        }
                    }
                    _ => return Err(e),
                }
            }
        };
        // logger first so the account problems below get logged.
        settings.log_file_dir = validate_pathbuf(settings.log_file_dir, &config_path_arg);
        let (file_log_level, _) = settings.file_log_level.to_usable();
        let (_, stdout_log_level) = settings.stdout_log_level.to_usable();
        let mut builder = LogSpecBuilder::new();
        builder.default(file_log_level);
        let _logger = Logger::with(builder.build())
            .log_to_file()
            .suppress_timestamp()
            .append()
            .directory(&settings.log_file_dir)
            .suffix("log")
            .duplicate_to_stdout(stdout_log_level)
            .format_for_files(default_format)
            .adaptive_format_for_stdout(AdaptiveFormat::Default)
            .rotate(
                Criterion::Size(51200),
                Naming::Numbers,
                Cleanup::KeepCompressedFiles(5),
            )
            .start()?;
        // now that the logger is up and running, load the account.
        settings.account_file_path = match args.value_of("ACCOUNT") {
            Some(acct) => PathBuf::from(acct),
            None => validate_pathbuf(settings.account_file_path, &config_path_arg),
        };
        let account = AccountFile::load(&settings.account_file_path)?;

        Ok(Config {
            settings,
            account,
            _logger,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub account_file_path: PathBuf,
    pub log_file_dir: PathBuf,
    pub file_log_level: LogLevel,
    pub stdout_log_level: LogLevel,
    pub api_base_url: String,
    pub request_timeout: u64,
    pub login_poll_delay: u64,
    pub monitor_delay: u64,
    pub rate_limit_delay: u64,
    pub favorites_page_size: u32,
    pub favorites_radius: f64,
}

impl ConfigFile {
    fn load(file: &PathBuf) -> Result<Self> {
        let input = read_to_string(file)?;
        Self::parse(&input)
    }
    fn parse(input: &str) -> Result<Self> {
        Ok(from_str::<Self>(input)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    None,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_usable(&self) -> (LevelFilter, Duplicate) {
        match self {
            Self::None => (LevelFilter::Off, Duplicate::None),
            Self::Info => (LevelFilter::Info, Duplicate::Info),
            Self::Warn => (LevelFilter::Warn, Duplicate::Warn),
            Self::Error => (LevelFilter::Error, Duplicate::Error),
        }
    }
}

/// The account to monitor: line one is the login email, line two the webhook to post to.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFile {
    pub email: String,
    pub webhook_url: String,
}

impl AccountFile {
    fn load(file: &PathBuf) -> Result<Self> {
        let input = read_to_string(file)?;
        Ok(Self::parse(&input)?)
    }
    pub fn parse(input: &str) -> std::result::Result<Self, ConfigError> {
        let mut lines = input.lines().map(str::trim);
        let email = match lines.next() {
            Some(e) if !e.is_empty() => e.to_string(),
            _ => return Err(ConfigError::MissingEmail),
        };
        let webhook_url = match lines.next() {
            Some(w) if !w.is_empty() => w.to_string(),
            _ => return Err(ConfigError::MissingWebhookUrl),
        };
        if !email.contains('@') {
            return Err(ConfigError::InvalidEmail(email));
        }
        if !(webhook_url.starts_with("https://") || webhook_url.starts_with("http://")) {
            return Err(ConfigError::InvalidWebhookUrl(webhook_url));
        }
        Ok(Self { email, webhook_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let settings = ConfigFile::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(settings.account_file_path, PathBuf::from("account"));
        assert_eq!(settings.api_base_url, "https://apptoogoodtogo.com");
        assert_eq!(settings.request_timeout, 10);
        assert_eq!(settings.login_poll_delay, 5);
        assert_eq!(settings.monitor_delay, 10);
        assert_eq!(settings.rate_limit_delay, 1000);
        assert_eq!(settings.favorites_page_size, 50);
        assert_eq!(settings.file_log_level, LogLevel::Info);
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let cfg = PathBuf::from("/etc/tgtgmon/config.ron");
        assert_eq!(
            validate_pathbuf(PathBuf::from("account"), &cfg),
            PathBuf::from("/etc/tgtgmon/account")
        );
        assert_eq!(
            validate_pathbuf(PathBuf::from("/srv/account"), &cfg),
            PathBuf::from("/srv/account")
        );
    }

    #[test]
    fn account_file_reads_two_lines() {
        let account =
            AccountFile::parse("  me@example.com \nhttps://discord.com/api/webhooks/1/abc\n")
                .unwrap();
        assert_eq!(account.email, "me@example.com");
        assert_eq!(account.webhook_url, "https://discord.com/api/webhooks/1/abc");
    }

    #[test]
    fn account_file_problems_are_reported() {
        assert_eq!(AccountFile::parse(""), Err(ConfigError::MissingEmail));
        assert_eq!(
            AccountFile::parse("me@example.com\n"),
            Err(ConfigError::MissingWebhookUrl)
        );
        assert_eq!(
            AccountFile::parse("me@example.com\n\n"),
            Err(ConfigError::MissingWebhookUrl)
        );
        assert_eq!(
            AccountFile::parse("nobody\nhttps://hook"),
            Err(ConfigError::InvalidEmail("nobody".to_string()))
        );
        assert_eq!(
            AccountFile::parse("me@example.com\nftp://hook"),
            Err(ConfigError::InvalidWebhookUrl("ftp://hook".to_string()))
        );
    }
}
