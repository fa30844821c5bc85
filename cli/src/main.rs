//! CLI entrypoint for SearchMind
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use searchmind_application::{
    AnswerOrchestrator, CredentialStore, FrameSink, OrchestrationParams, SubmissionOutcome,
};
use searchmind_domain::{Credential, OutputFormat, ProviderKey, ProviderKind};
use searchmind_infrastructure::{
    ConfigLoader, EnvCredentialStore, FileConfig, FileCredentialStore, LayeredCredentialStore,
    build_provider_set,
};
use searchmind_presentation::{
    Cli, ConsoleFrameSink, JsonFrameSink, RenderMode, SearchRepl, format_examples,
    set_color_enabled,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(&cli)?;

    info!("Starting SearchMind");

    if cli.examples {
        print!("{}", format_examples());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }
    set_color_enabled(config.output.color);

    // === Credentials ===
    let store = credential_store(&config);
    let perplexity_key = match cli.perplexity_key.as_deref() {
        Some(raw) => {
            let credential = Credential::new(raw).context("--perplexity-key is empty")?;
            if cli.remember_key {
                store
                    .set(ProviderKey::Perplexity, credential.clone())
                    .context("Failed to store the Perplexity key")?;
                info!("Stored Perplexity key");
            }
            Some(credential)
        }
        None => store.get(ProviderKey::Perplexity),
    };
    let gemini_key = store.get(ProviderKey::Gemini);

    // === Dependency Injection ===
    let params = orchestration_params(&cli, &config);
    if gemini_key.is_none() && params.forced_provider != Some(ProviderKind::SearchNative) {
        warn!(
            "No Gemini API key found; set {} or [providers.gemini] api_key",
            config.providers.gemini.api_key_env
        );
    }

    let providers =
        build_provider_set(&config, gemini_key).context("Failed to create HTTP clients")?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let sink: Arc<dyn FrameSink> = match format {
        OutputFormat::Stream => Arc::new(ConsoleFrameSink::stdout(RenderMode::Stream, !cli.quiet)),
        OutputFormat::Plain => Arc::new(ConsoleFrameSink::stdout(RenderMode::Plain, !cli.quiet)),
        OutputFormat::Json => Arc::new(JsonFrameSink::stdout(cli.quiet)),
    };

    let orchestrator = AnswerOrchestrator::new(providers, sink, params);

    // Chat mode
    if cli.chat {
        let repl = SearchRepl::new(orchestrator).with_credential(perplexity_key);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let submission = orchestrator.submit(&question, perplexity_key)?;
    info!("Answering with {} provider", submission.provider());

    match submission.wait().await {
        SubmissionOutcome::Done => Ok(ExitCode::SUCCESS),
        SubmissionOutcome::Errored => Ok(ExitCode::FAILURE),
        SubmissionOutcome::Superseded => bail!("Query was cancelled"),
    }
}

/// Install the stderr subscriber, plus a file writer for `--log-file`.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = cli.log_file.as_ref() else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(level))
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

/// Environment and config keys first, then keys stored with `--remember-key`.
fn credential_store(config: &FileConfig) -> LayeredCredentialStore {
    let mut store = LayeredCredentialStore::new()
        .with_layer(Arc::new(EnvCredentialStore::from_config(&config.providers)));
    if let Some(dir) = ConfigLoader::config_dir() {
        store = store.with_layer(Arc::new(FileCredentialStore::in_dir(dir)));
    }
    store
}

fn orchestration_params(cli: &Cli, config: &FileConfig) -> OrchestrationParams {
    let mut params = OrchestrationParams::default()
        .with_tool_calling(config.search.enabled && !cli.no_web_search)
        .with_tick(Duration::from_millis(config.presentation.tick_ms))
        .with_thinking_delay(Duration::from_millis(config.presentation.thinking_delay_ms));
    if let Some(seed) = config.presentation.seed {
        params = params.with_seed(seed);
    }
    if let Some(provider) = cli.provider {
        params = params.with_forced_provider(provider.into());
    }
    params
}
