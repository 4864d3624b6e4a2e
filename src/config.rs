use super::*;
use structopt::StructOpt;

/// Command line arguments
#[derive(Debug, StructOpt)]
#[structopt(name = "sitecheck", about = "Check site connectivity.")]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,

    /// URL to check for reachability
    #[structopt(long = "url")]
    url: String,

    /// Type of connectivity check (GET or POST)
    #[structopt(long = "type", possible_values = &["GET", "POST"])]
    check_type: String,

    /// Whether to use SSL (yes or no) when the URL carries no scheme
    #[structopt(long = "ssl", possible_values = &["yes", "no"])]
    ssl: String,
}

/// Config
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub check_type: String,
    pub use_ssl: bool,
    pub verbose: bool,
}

impl Config {
    pub fn get() -> Config {
        // parse the opts
        let opts: Opts = Opts::from_args();

        if opts.verbose {
            std::env::set_var("RUST_LOG", "sitecheck=debug");
        }

        pretty_env_logger::init();

        let config = Config {
            url: opts.url,
            check_type: opts.check_type,
            use_ssl: opts.ssl.eq_ignore_ascii_case("yes"),
            verbose: opts.verbose,
        };

        debug!("parsed config: {:?}", &config);
        config
    }
}
