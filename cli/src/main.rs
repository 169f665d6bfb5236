use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use decoder::{
    CHAT_APOLOGY, ChatEffect, ChatEvent, ChatFailure, ChatRequest, ChatState, PredictError, PredictionEffect,
    PredictionEvent, PredictionState, PredictionView, RequestFailure, SelectedImage,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    ReadImage { path: PathBuf, source: std::io::Error },
    #[error("invalid content type for upload: {0}")]
    InvalidMime(#[from] reqwest::Error),
    #[error("{0}")]
    Predict(PredictError),
    #[error("{}", CHAT_APOLOGY)]
    Chat(ChatFailure),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("health check failed: {0}")]
    Unreachable(String),
}

#[derive(Parser, Debug)]
#[command(name = "decoder-cli", about = "Food decoder command-line client")]
struct Cli {
    #[arg(long, env = "DECODER_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Upload a food photo and print its predicted name.
    Predict {
        /// Image file to classify.
        path: PathBuf,
    },
    /// Ask a free-text food question.
    Chat {
        /// Question words; joined with single spaces.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let result = match cli.command {
        Command::Ping => run_ping(&client, &cli.base_url).await,
        Command::Predict { path } => run_predict(&client, &cli.base_url, &path).await,
        Command::Chat { query } => run_chat(&client, &cli.base_url, query.join(" ")).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_ping(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let url = decoder::endpoint_url(base_url, "/healthz");
    let response = client.get(url).send().await.map_err(|e| CliError::Unreachable(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_predict(client: &reqwest::Client, base_url: &str, path: &Path) -> Result<(), CliError> {
    let image = image_from_path(path).await?;

    let state = PredictionState::default();
    let (state, _) = state.apply(PredictionEvent::ImageSelected(image));
    let (state, effect) = state.apply(PredictionEvent::Submitted);

    let state = match effect {
        Some(PredictionEffect::Upload(image)) => {
            let outcome = upload(client, base_url, &image).await?;
            state.apply(PredictionEvent::Settled(outcome)).0
        }
        None => state,
    };

    if let PredictionView::Predicted(label) = state.view() {
        println!("{label}");
        return Ok(());
    }
    Err(CliError::Predict(state.error.unwrap_or(PredictError::NoImageSelected)))
}

/// POST the file as multipart field `file`. Only local preparation errors are `Err`;
/// request failures come back as the settled outcome.
async fn upload(
    client: &reqwest::Client,
    base_url: &str,
    image: &SelectedImage<PathBuf>,
) -> Result<Result<String, RequestFailure>, CliError> {
    let bytes = tokio::fs::read(&image.handle)
        .await
        .map_err(|source| CliError::ReadImage { path: image.handle.clone(), source })?;
    let mut part = reqwest::multipart::Part::bytes(bytes).file_name(image.name.clone());
    if let Some(mime) = &image.mime {
        part = part.mime_str(mime)?;
    }
    let form = reqwest::multipart::Form::new().part(decoder::UPLOAD_FIELD, part);

    let url = decoder::endpoint_url(base_url, decoder::PREDICT_PATH);
    tracing::debug!(%url, name = %image.name, size = image.size, "uploading image");

    let response = match client.post(url).multipart(form).send().await {
        Ok(response) => response,
        Err(e) => return Ok(Err(RequestFailure::Transport(e.to_string()))),
    };
    let status = response.status().as_u16();
    if let Err(failure) = decoder::check_status(status) {
        return Ok(Err(failure));
    }
    let outcome = match response.text().await {
        Ok(body) => decoder::predict_outcome(status, &body),
        Err(e) => Err(RequestFailure::Transport(e.to_string())),
    };
    Ok(outcome)
}

async fn run_chat(client: &reqwest::Client, base_url: &str, query: String) -> Result<(), CliError> {
    let state = ChatState::default();
    let (state, _) = state.apply(ChatEvent::QueryEdited(query));
    let (state, effect) = state.apply(ChatEvent::Submitted);

    let Some(ChatEffect::Send(request)) = effect else {
        // Empty query: nothing to send, nothing to print.
        return Ok(());
    };

    let outcome = ask(client, base_url, &request).await;
    let (state, effect) = state.apply(ChatEvent::Settled(outcome));
    println!("{}", state.response);

    match effect {
        Some(ChatEffect::Log(failure)) => {
            tracing::error!(error = %failure, "chat request failed");
            Err(CliError::Chat(failure))
        }
        _ => Ok(()),
    }
}

async fn ask(client: &reqwest::Client, base_url: &str, request: &ChatRequest) -> Result<String, ChatFailure> {
    let url = decoder::endpoint_url(base_url, decoder::CHAT_PATH);
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| ChatFailure::Transport(e.to_string()))?;
    let body = response.text().await.map_err(|e| ChatFailure::Transport(e.to_string()))?;
    decoder::chat_outcome(&body)
}

async fn image_from_path(path: &Path) -> Result<SelectedImage<PathBuf>, CliError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| CliError::ReadImage { path: path.to_path_buf(), source })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SelectedImage {
        name,
        size: metadata.len(),
        mime: guess_mime(path),
        handle: path.to_path_buf(),
    })
}

/// MIME type from the file extension, when it names an image format.
fn guess_mime(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .map(|mime| mime.essence_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_mime_common_extensions() {
        assert_eq!(guess_mime(Path::new("samosa.JPG")).as_deref(), Some("image/jpeg"));
        assert_eq!(guess_mime(Path::new("dir/idli.png")).as_deref(), Some("image/png"));
        assert_eq!(guess_mime(Path::new("vada.webp")).as_deref(), Some("image/webp"));
    }

    #[test]
    fn guess_mime_unknown_or_missing_extension() {
        assert_eq!(guess_mime(Path::new("notes.txt")), None);
        assert_eq!(guess_mime(Path::new("photo")), None);
    }

    #[tokio::test]
    async fn image_from_path_reads_metadata() {
        let path = std::env::temp_dir().join(format!("decoder-cli-test-{}.jpg", std::process::id()));
        tokio::fs::write(&path, [0xff_u8, 0xd8, 0xff, 0xe0]).await.unwrap();

        let image = image_from_path(&path).await.unwrap();
        assert_eq!(image.size, 4);
        assert_eq!(image.mime.as_deref(), Some("image/jpeg"));
        assert!(image.name.ends_with(".jpg"));
        assert_eq!(image.handle, path);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn image_from_path_missing_file_errors() {
        let err = image_from_path(Path::new("/definitely/not/here.jpg")).await.unwrap_err();
        assert!(matches!(err, CliError::ReadImage { .. }));
    }

    #[test]
    fn predict_errors_display_user_message() {
        let status = CliError::Predict(PredictError::Request(RequestFailure::Status(500)));
        assert_eq!(status.to_string(), decoder::error::STATUS_FAILURE_MESSAGE);

        let missing = CliError::Predict(PredictError::NoImageSelected);
        assert_eq!(missing.to_string(), decoder::error::NO_IMAGE_MESSAGE);

        let transport = CliError::Predict(PredictError::Request(RequestFailure::Transport("refused".to_owned())));
        assert_eq!(transport.to_string(), "refused");
    }

    #[test]
    fn chat_error_displays_apology() {
        let err = CliError::Chat(ChatFailure::Service("quota".to_owned()));
        assert_eq!(err.to_string(), CHAT_APOLOGY);
    }

    #[test]
    fn cli_parses_chat_words() {
        let cli = Cli::try_parse_from(["decoder-cli", "chat", "what", "is", "dosa?"]).unwrap();
        let Command::Chat { query } = cli.command else {
            panic!("expected chat command");
        };
        assert_eq!(query.join(" "), "what is dosa?");
    }
}
