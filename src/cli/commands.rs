//! CLI arguments

use crate::connectors::DEFAULT_CATALOG;
use crate::output::{FilenameTemplate, OutputType, DEFAULT_FILENAME_TEMPLATE};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Paginate through the Facebook Graph API
#[derive(Parser, Debug)]
#[command(name = "graph-paginate")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("targets")
        .required(true)
        .multiple(true)
        .args(["objects", "objects_file"])
))]
#[command(group(
    ArgGroup::new("token_sources")
        .required(true)
        .multiple(true)
        .args(["tokens", "tokens_file"])
))]
pub struct Cli {
    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------
    /// Output directory
    #[arg(short, long, default_value = ".", value_name = "DIRECTORY", help_heading = "Output")]
    pub destination: PathBuf,

    /// Output file type
    #[arg(long = "type", value_enum, default_value_t = OutputType::Json, help_heading = "Output")]
    pub output_type: OutputType,

    /// Output file name template ({endpoint}, {object}, {i}, {type})
    #[arg(long, default_value = DEFAULT_FILENAME_TEMPLATE, help_heading = "Output")]
    pub format: FilenameTemplate,

    /// Overwrite existing output files
    #[arg(long, help_heading = "Output")]
    pub overwrite: bool,

    /// Print progress information on standard error
    #[arg(short, long, help_heading = "Output")]
    pub verbose: bool,

    // ------------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------------
    /// API base URL [default: the catalog's base_url]
    #[arg(short, long, help_heading = "Requests")]
    pub url: Option<String>,

    /// Additional query parameter, e.g. -q fields id,message
    #[arg(
        short = 'q',
        long = "query-parameters",
        num_args = 2,
        value_names = ["KEY", "VALUE"],
        action = clap::ArgAction::Append,
        help_heading = "Requests"
    )]
    pub query_parameters: Vec<String>,

    /// Endpoint catalog: a built-in name or a YAML file
    #[arg(long, default_value = DEFAULT_CATALOG, value_name = "NAME|FILE", help_heading = "Requests")]
    pub endpoints: String,

    // ------------------------------------------------------------------------
    // Limits
    // ------------------------------------------------------------------------
    /// Initial request limit
    #[arg(short, long, default_value_t = 25, help_heading = "Limits")]
    pub limit: u64,

    /// Maximum request limit
    #[arg(long, default_value_t = 3000, help_heading = "Limits")]
    pub limit_max: u64,

    /// Limit multiplication factor
    #[arg(long, default_value_t = 2, help_heading = "Limits")]
    pub limit_factor: u64,

    // ------------------------------------------------------------------------
    // Tokens
    // ------------------------------------------------------------------------
    /// Pool of access tokens for performing requests
    #[arg(short, long, num_args = 1.., value_name = "TOKEN", help_heading = "Tokens")]
    pub tokens: Vec<String>,

    /// Read access tokens from a file, one per line
    #[arg(long, value_name = "FILENAME", help_heading = "Tokens")]
    pub tokens_file: Option<PathBuf>,

    // ------------------------------------------------------------------------
    // Targets
    // ------------------------------------------------------------------------
    /// Request endpoint (e.g. feed, posts, likes, comments)
    #[arg(short, long, help_heading = "Targets")]
    pub endpoint: String,

    /// Object IDs to retrieve data for
    #[arg(value_name = "ID", help_heading = "Targets")]
    pub objects: Vec<String>,

    /// Read object IDs from a file, one per line
    #[arg(long, value_name = "FILENAME", help_heading = "Targets")]
    pub objects_file: Option<PathBuf>,
}

impl Cli {
    /// `-q KEY VALUE` pairs in the order given
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query_parameters
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}
