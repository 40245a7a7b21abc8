mod cli;
mod echo;

use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow};
use clap::Parser;
use cli::{Cli, Command, GenerateArgs, LogFormat, OutputFormat, PublishArgs, PublishOptions};
use owo_colors::OwoColorize;
use postsmith_core::{
    DataPoints, Document, FetchConfig, GenerationRequest, Generator, GeneratorConfig, PublishOutcome, PublishPayload,
    PublishStatus, Publisher, PublisherConfig, ReferenceSource, document_to_json, extract_metadata, fetch_file,
    metadata_to_json,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

impl PublishOptions {
    fn publisher_config(&self) -> anyhow::Result<PublisherConfig> {
        let username = self
            .username
            .as_deref()
            .ok_or_else(|| anyhow!("--username (or WP_USERNAME) is required to publish"))?;
        let password = self
            .password
            .as_deref()
            .ok_or_else(|| anyhow!("--password (or WP_APPLICATION_PASSWORD) is required to publish"))?;

        let config =
            PublisherConfig::new(&self.base_url, username, password).context("Invalid publisher settings")?;
        Ok(config.with_timeout(self.timeout))
    }

    fn status(&self) -> anyhow::Result<PublishStatus> {
        self.status.parse().with_context(|| format!("Invalid --status: {}", self.status))
    }

    fn apply(&self, payload: PublishPayload) -> PublishPayload {
        payload
            .with_categories(self.categories.iter().copied())
            .with_tags(self.tags.iter().copied())
    }
}

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout stays
/// clean for the document.
fn init_tracing(verbose: u8, format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "postsmith=info",
        1 => "postsmith=debug",
        _ => "postsmith=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).with_writer(std::io::stderr).init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    if cli.verbose > 0 {
        echo::print_banner();
    }

    match cli.command {
        Command::Generate(args) => run_generate(args, cli.config.as_deref(), cli.verbose > 0).await,
        Command::Publish(args) => run_publish(args, cli.verbose > 0).await,
    }
}

async fn run_generate(args: GenerateArgs, config_path: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let total = if args.publish { 4 } else { 3 };

    if verbose {
        echo::print_step(1, total, "Loading configuration");
    }
    let config = GeneratorConfig::load(config_path).context("Failed to load configuration")?;
    tracing::debug!(path = ?config_path, organization = %config.organization, "configuration loaded");

    let mut request = GenerationRequest::new(&args.keyword).secondary_keywords(&args.secondary);
    if let Some(slug) = &args.slug {
        request = request.slug(slug);
    }
    if let Some(pairs) = &args.data_points {
        let points = DataPoints::parse(pairs).with_context(|| format!("Invalid --data-points: {}", pairs))?;
        request = request.data_points(points);
    }

    let source = match (&args.reference_text, &args.reference_url, &args.reference_file) {
        (Some(text), _, _) => Some(ReferenceSource::Text(text.clone())),
        (_, Some(url), _) => Some(ReferenceSource::Url(url.clone())),
        (_, _, Some(path)) => Some(ReferenceSource::File(path.clone())),
        _ => None,
    };

    if verbose {
        echo::print_step(2, total, &format!("Generating post for {}", args.keyword.bright_white()));
    }
    let generator = Generator::with_config(config);
    let document = match &source {
        Some(source) => {
            let fetch_config = FetchConfig { timeout: args.fetch_timeout, ..Default::default() };
            generator
                .generate_with_reference(request, source, &fetch_config)
                .await
                .context("Failed to generate document")?
        }
        None => generator.generate(&request).context("Failed to generate document")?,
    };

    if verbose {
        echo::print_document_summary(&document);
        echo::print_step(3, total, "Writing output");
    }
    write_document(&document, args.format, args.output.as_deref())?;

    if args.publish {
        if verbose {
            echo::print_step(4, total, "Publishing");
        }
        let options = &args.publish_options;
        let payload = options.apply(PublishPayload::from_document(&document, options.status()?));
        match send(options, payload).await? {
            PublishOutcome::DryRun(payload) => {
                echo::print_info(&format!("Dry run: {} would be sent as {}", payload.slug, payload.status))
            }
            PublishOutcome::Published(response) => echo::print_published(&response),
        }
    }

    Ok(())
}

fn write_document(document: &Document, format: OutputFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Html => document.render(),
        OutputFormat::Json => document_to_json(document, true),
    }
    .context("Failed to render document")?;

    match output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!(
                "Output written to {} ({})",
                path.display().bright_white(),
                echo::format_size(rendered.len())
            ));
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

async fn run_publish(args: PublishArgs, verbose: bool) -> anyhow::Result<()> {
    let options = &args.publish_options;

    if verbose {
        echo::print_step(1, 3, &format!("Reading {}", args.file.display().bright_white()));
    }
    let html = fetch_file(&args.file, &FetchConfig::default())
        .with_context(|| format!("Failed to read file: {}", args.file.display()))?;

    if verbose {
        echo::print_step(2, 3, "Extracting metadata");
    }
    let metadata = extract_metadata(&html)
        .with_context(|| format!("Failed to extract metadata from {}", args.file.display()))?;
    if verbose {
        echo::print_field("Title", &metadata.title);
        echo::print_field("Slug", &metadata.slug);
    }

    if verbose {
        echo::print_step(3, 3, if options.dry_run { "Building request (dry run)" } else { "Publishing" });
    }
    tracing::debug!(file = %args.file.display(), slug = %metadata.slug, "extracted metadata");
    let payload = options.apply(PublishPayload::from_metadata(&metadata, html, options.status()?));
    match send(options, payload).await? {
        PublishOutcome::DryRun(payload) => {
            println!("{}", metadata_to_json(&payload, true).context("Failed to serialize payload")?);
            echo::print_warning("Dry run: nothing was sent");
        }
        PublishOutcome::Published(response) => {
            println!("{}", metadata_to_json(&response, true).context("Failed to serialize response")?);
            echo::print_published(&response);
        }
    }

    Ok(())
}

async fn send(options: &PublishOptions, payload: PublishPayload) -> anyhow::Result<PublishOutcome> {
    let config = options.publisher_config()?;
    let endpoint = config.endpoint().context("Invalid publisher endpoint")?;
    let mut publisher = Publisher::new(config).context("Failed to create HTTP client")?;

    publisher
        .publish(payload, options.dry_run)
        .await
        .with_context(|| format!("Failed to publish to {}", endpoint))
}
