//! HealthVoice CLI entry point

use std::process::ExitCode;

use clap::Parser;

use health_voice::cli::{
    app::{load_merged_config, run_process, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, InputSource, ProcessOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use health_voice::domain::config::AppConfig;
use health_voice::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        anthropic_api_key: None, // API keys come from env/file only
        openai_api_key: None,
        model: cli.model.clone(),
        language: cli.language.clone(),
        store_path: cli.store.as_ref().map(|p| p.to_string_lossy().to_string()),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Determine the input source
    let input = match (cli.audio, cli.text) {
        (Some(path), None) => InputSource::Audio(path),
        (None, Some(text)) => InputSource::Text(text),
        _ => {
            presenter.error("Provide an audio file or --text. See 'health-voice --help'");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = ProcessOptions {
        input,
        skip_clarification: cli.skip_clarification,
    };

    run_process(options, config).await
}
