//! Simple submodule to just hold the &str of the default config file.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 9, 2026

pub static DEFAULT_CONFIG: &str = "ConfigFile(\n\
    \t// The two line account file: your email on the first line, the webhook url on the second.\n\
    \t// If it's relative it will be measured relative to the directory of the config file.\n\
    \taccount_file_path: \"account\",\n\
    \t// The directory to store logs in, one active and up to 5 zipped archives. If it's relative\n\
    \t// it will be measured relative to the directory of the config file.\n\
    \tlog_file_dir: \"logs\",\n\
    \t// File & Stdout log level use the same enum to make a choice. The levels of log detail are:\n\
    \t// None => Print no logs at all. \n\
    \t// Error => Print only error logs. The most severe events.\n\
    \t// Warn => Print Error & Warn level logs. Includes throttling and webhook trouble.\n\
    \t// Info => Print all logs that this program has. Login progress, every poll and every \n\
    \t// restock as well as all previously described logs. \n\
    \tfile_log_level: Info,\n\
    \tstdout_log_level: Info,\n\
    \t// Where the backend lives.\n\
    \tapi_base_url: \"https://apptoogoodtogo.com\",\n\
    \t// Seconds before a single request is given up on.\n\
    \trequest_timeout: 10,\n\
    \t// Seconds between checks while waiting for the login email to be clicked.\n\
    \tlogin_poll_delay: 5,\n\
    \t// Seconds between favourites checks.\n\
    \tmonitor_delay: 10,\n\
    \t// Seconds to back off when the favourites query gets throttled.\n\
    \trate_limit_delay: 1000,\n\
    \t// How many favourites to ask for and the search radius sent along with them.\n\
    \tfavorites_page_size: 50,\n\
    \tfavorites_radius: 30.0,\n\
)";
