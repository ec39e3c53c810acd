use clap::Parser;
use rust_r2_client::config::{DEFAULT_ENV_FILE, StorageConfig};
use rust_r2_client::infrastructure::storage;
use rust_r2_client::models::UploadRequest;
use rust_r2_client::{ErrorPolicy, R2Endpoint, run};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file loaded into the environment before reading BUCKET, ACCOUNT_ID, KEY and SECRET
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Local file to upload
    #[arg(short, long, default_value = "klee.png")]
    file: PathBuf,

    /// Object key to upload under
    #[arg(short, long, default_value = "loli")]
    key: String,

    /// Content type stored with the object
    #[arg(long, default_value = "image/png")]
    content_type: String,

    /// Stop before listing if the upload fails
    #[arg(long)]
    abort_on_error: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // stdout is reserved for the listing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_r2_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match StorageConfig::load(&args.env_file) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = storage::setup_storage(&config, &R2Endpoint).await;

    let upload = UploadRequest {
        bucket_name: config.bucket_name.clone(),
        object_key: args.key,
        source_path: args.file,
        content_type: args.content_type,
    };
    let policy = if args.abort_on_error {
        ErrorPolicy::AbortOnFirstError
    } else {
        ErrorPolicy::BestEffort
    };

    let mut stdout = std::io::stdout().lock();
    match run(&client, &config.bucket_name, &upload, policy, &mut stdout).await {
        Ok(_) => {
            info!("🏁 Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
