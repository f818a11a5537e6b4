use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "appointments", bin_name = "appointments", version = get_version())]
#[command(about = "Store, list, search and delete appointment records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory that config.json and relative data paths resolve against
    /// (defaults to the executable's directory)
    #[arg(long, global = true, env = "APPOINTMENTS_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Record file to use instead of the configured one
    #[arg(long, global = true, env = "APPOINTMENTS_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a new appointment
    Add {
        #[arg(allow_hyphen_values = true)]
        client: String,
        #[arg(allow_hyphen_values = true)]
        service: String,
        #[arg(allow_hyphen_values = true)]
        staff: String,
        /// YYYY-MM-DD
        date: String,
        /// HH:MM, 24-hour
        time: String,
    },

    /// List appointments, optionally only those matching a fragment
    List {
        /// Case-insensitive text matched against every field
        #[arg(allow_hyphen_values = true)]
        fragment: Option<String>,
    },

    /// Delete the first appointment for a client at a date and time
    Delete {
        #[arg(allow_hyphen_values = true)]
        client: String,
        date: String,
        time: String,
    },
}
