use std::path::PathBuf;

use clap::{Arg, Command};

use crate::browser::SortKey;
use crate::tvmaze::DEFAULT_SHOWS_URL;

pub struct Options {
    pub url: String,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub log_file: Option<PathBuf>,
}

pub fn parse_args() -> Options {
    let matches = Command::new("showdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse the TVMaze show catalog in the terminal")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Endpoint returning a JSON array of shows")
                .value_name("URL")
                .num_args(1),
        )
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .help("Start with a search term applied (case-insensitive substring match)")
                .value_name("TERM")
                .num_args(1),
        )
        .arg(
            Arg::new("sort")
                .short('o')
                .long("sort")
                .help("Start sorted by: name-asc, name-desc, rating-asc or rating-desc")
                .value_name("CRITERION")
                .num_args(1),
        )
        .arg(
            Arg::new("log-file")
                .short('l')
                .long("log-file")
                .help("Append logs to this file (the terminal itself belongs to the UI)")
                .value_name("PATH")
                .num_args(1),
        )
        .get_matches();

    let url = matches
        .get_one::<String>("url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_SHOWS_URL.to_string());

    let search = matches.get_one::<String>("search").cloned();

    let mut sort = None;
    if let Some(raw) = matches.get_one::<String>("sort") {
        match SortKey::parse(raw) {
            Some(key) => sort = Some(key),
            None => eprintln!("Warning: Unknown sort criterion '{}', ignoring", raw),
        }
    }

    let log_file = matches.get_one::<String>("log-file").map(PathBuf::from);

    Options {
        url,
        search,
        sort,
        log_file,
    }
}
