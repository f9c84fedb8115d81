//! CLI runner - drives pagination for every object and writes the pages

use crate::cli::commands::Cli;
use crate::engine::{Pagination, RunStats};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, Transport};
use crate::loader::{load_catalog, EndpointDefinition};
use crate::output::{ensure_dir, serialize_page, write_page};
use crate::pagination::RampUp;
use crate::types::{Credential, Parameters, LIMIT_PARAM};
use futures::StreamExt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run with a reqwest-backed HTTP client
    pub async fn run(&self) -> Result<RunStats> {
        let client = HttpClient::new()?;
        self.run_with(&client).await
    }

    /// Run with the given transport
    pub async fn run_with<T: Transport + ?Sized>(&self, transport: &T) -> Result<RunStats> {
        let catalog = load_catalog(&self.cli.endpoints)?;
        let definition = catalog.get(&self.cli.endpoint).ok_or_else(|| {
            Error::usage(
                "--endpoint <ENDPOINT>",
                &self.cli.endpoint,
                format!("possible values: {}", catalog.names().join(", ")),
            )
        })?;

        let base_url = self
            .cli
            .url
            .clone()
            .or_else(|| catalog.base_url.clone())
            .ok_or_else(|| Error::config("No base URL: pass --url or set base_url in the catalog"))?;
        Url::parse(&base_url)?;

        if self.cli.limit_factor == 0 {
            return Err(Error::invalid_value("limit-factor", "must be at least 1"));
        }

        let objects = read_entries(&self.cli.objects, self.cli.objects_file.as_deref())?;
        if objects.is_empty() {
            warn!("No object IDs given, nothing to fetch");
            return Ok(RunStats::new());
        }
        let tokens = read_entries(&self.cli.tokens, self.cli.tokens_file.as_deref())?;
        if tokens.is_empty() {
            return Err(Error::CredentialsExhausted);
        }

        ensure_dir(&self.cli.destination)?;

        let params = self.parameters(definition);
        let ramp_up = RampUp::geometric(self.cli.limit_factor, self.cli.limit_max);

        let mut total = RunStats::new();
        for object in &objects {
            let url = format!(
                "{}/{}/{}",
                base_url.trim_end_matches('/'),
                object,
                definition.name
            );
            let stats = self
                .fetch_object(transport, &url, object, definition, &params, &tokens, ramp_up)
                .await?;

            info!(
                object = %object,
                pages = stats.pages,
                records = stats.records,
                error_pages = stats.error_pages,
                "Finished object"
            );
            total.pages += stats.pages;
            total.records += stats.records;
            total.error_pages += stats.error_pages;
        }

        Ok(total)
    }

    /// Endpoint defaults, then `-q` overrides, then the initial limit
    fn parameters(&self, definition: &EndpointDefinition) -> Parameters {
        let mut params = definition.params.clone();
        for (key, value) in self.cli.query_pairs() {
            params.set(key, value);
        }
        params.set(LIMIT_PARAM, self.cli.limit);
        params
    }

    #[allow(clippy::too_many_arguments)]
    async fn fetch_object<T: Transport + ?Sized>(
        &self,
        transport: &T,
        url: &str,
        object: &str,
        definition: &EndpointDefinition,
        params: &Parameters,
        tokens: &[Credential],
        ramp_up: RampUp,
    ) -> Result<RunStats> {
        let run = Pagination::new(
            transport,
            url,
            params.clone(),
            tokens.iter().cloned(),
            definition.pagination,
        )?
        .with_ramp_up(ramp_up);
        debug!(endpoint = run.endpoint(), pagination = %definition.pagination, "Starting pagination");

        let mut pages = std::pin::pin!(run.into_stream());
        let mut stats = RunStats::new();
        let extension = self.cli.output_type.extension();

        while let Some(page) = pages.next().await {
            let page = page?;
            let index = stats.pages + 1;

            let filename = self
                .cli
                .format
                .render(&definition.name, object, index, extension);
            let path = self.cli.destination.join(filename);
            let contents = serialize_page(&page, self.cli.output_type)?;
            write_page(&path, &contents, self.cli.overwrite)?;

            stats.add_page(page.record_count(), page.is_success());
            self.progress(&progress_line(object, stats.records, page.is_success()));
            if !page.is_success() {
                warn!(object = %object, page = index, status = page.status, "API returned an error status");
            }
        }
        self.progress("\n");

        Ok(stats)
    }

    /// Write progress to stderr when verbose
    fn progress(&self, message: &str) {
        if self.cli.verbose {
            let mut stderr = std::io::stderr();
            // Progress output is best-effort
            let _ = stderr.write_all(message.as_bytes());
            let _ = stderr.flush();
        }
    }
}

/// Progress line for one page
///
/// An error page ends the line so the warning logged for it starts on its own.
pub(crate) fn progress_line(object: &str, records: usize, success: bool) -> String {
    if success {
        format!("\r{object} {records}")
    } else {
        format!("\r{object} {records}\n")
    }
}

/// Collect entries from an inline list followed by a file, one per line
///
/// Entries are trimmed and blank lines are skipped. Duplicates are kept.
pub fn read_entries(inline: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut entries: Vec<String> = inline
        .iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect();

    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        entries.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }

    Ok(entries)
}
