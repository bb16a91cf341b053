//! Main app runner for one-shot processing

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::{
    AudioRecorder, ConfigStore, Extractor, LogStore, Transcriber,
};
use crate::application::{RecordingSessionUseCase, SessionOutcome};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    ClaudeExtractor, FileAudioSource, FixedTranscriber, JsonlLogStore, NullAudioSource,
    WhisperTranscriber, XdgConfigStore,
};

use super::args::{InputSource, ProcessOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one utterance through the pipeline
pub async fn run_process(options: ProcessOptions, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let anthropic_key = match config.anthropic_api_key.as_deref() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => {
            presenter.error(
                "Missing Anthropic API key. Set ANTHROPIC_API_KEY or run \
                 'health-voice config set anthropic_api_key <key>'",
            );
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let extractor = ClaudeExtractor::with_model(anthropic_key, config.model_or_default());
    let store = JsonlLogStore::new(store_path(&config));

    match options.input {
        InputSource::Audio(path) => {
            let openai_key = match config.openai_api_key.as_deref() {
                Some(key) if !key.is_empty() => key.to_string(),
                _ => {
                    presenter.error(
                        "Missing OpenAI API key for transcription. Set OPENAI_API_KEY or run \
                         'health-voice config set openai_api_key <key>'",
                    );
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            let recorder = FileAudioSource::new(path);
            let transcriber =
                WhisperTranscriber::with_language(openai_key, config.language_or_default());
            let use_case = RecordingSessionUseCase::new(recorder, transcriber, extractor, store);
            run_pipeline(use_case, options.skip_clarification, presenter).await
        }
        InputSource::Text(text) => {
            let use_case = RecordingSessionUseCase::new(
                NullAudioSource::new(),
                FixedTranscriber::new(text),
                extractor,
                store,
            );
            run_pipeline(use_case, options.skip_clarification, presenter).await
        }
    }
}

async fn run_pipeline<R, T, E, S>(
    use_case: RecordingSessionUseCase<R, T, E, S>,
    skip_clarification: bool,
    mut presenter: Presenter,
) -> ExitCode
where
    R: AudioRecorder,
    T: Transcriber,
    E: Extractor + 'static,
    S: LogStore,
{
    if let Err(e) = use_case.start().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.start_spinner("Verwerken...");
    let outcome = match use_case.stop().await {
        Ok(outcome) => outcome,
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match outcome {
        SessionOutcome::Saved(logs) => {
            presenter.spinner_success("Verwerkt");
            presenter.saved_batch(&logs);
            ExitCode::from(EXIT_SUCCESS)
        }
        SessionOutcome::NeedsClarification(question) => {
            presenter.spinner_success("Verwerkt, maar er is een vraag");
            presenter.clarification_question(&question);

            let answer = if skip_clarification {
                None
            } else {
                match read_answer() {
                    Ok(answer) => answer,
                    Err(e) => {
                        presenter.error(&format!("Failed to read answer: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            };

            match answer {
                Some(answer) => match use_case.submit_clarification(&answer).await {
                    Ok(saved) => {
                        if let Some(followup) = saved.ignored_followup {
                            presenter.warn(&format!(
                                "Vervolgvraag genegeerd: {}",
                                followup.question
                            ));
                        }
                        presenter.saved_batch(&saved.logs);
                        ExitCode::from(EXIT_SUCCESS)
                    }
                    Err(e) => {
                        presenter.error(&e.to_string());
                        ExitCode::from(EXIT_ERROR)
                    }
                },
                None => match use_case.skip_clarification().await {
                    Ok(logs) => {
                        presenter.info("Zonder verduidelijking opgeslagen");
                        presenter.saved_batch(&logs);
                        ExitCode::from(EXIT_SUCCESS)
                    }
                    Err(e) => {
                        presenter.error(&e.to_string());
                        ExitCode::from(EXIT_ERROR)
                    }
                },
            }
        }
    }
}

/// Prompt for a clarification answer. An empty line means skip.
fn read_answer() -> io::Result<Option<String>> {
    eprint!("> ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer.to_string()))
    }
}

fn store_path(config: &AppConfig) -> PathBuf {
    config
        .store_path
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(JsonlLogStore::default_path)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok().filter(|s| !s.is_empty()),
        openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
