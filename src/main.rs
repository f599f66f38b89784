use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vk_album_backup::config::{Config, DiskConfig, OutputConfig, VkConfig};
use vk_album_backup::pipeline;
use vk_album_backup::report::ConsoleReporter;

#[derive(Parser, Debug)]
#[command(
    name = "vk-album-backup",
    author,
    version,
    about = "Mirror a VK photo album to Yandex Disk and record a transfer manifest"
)]
struct Cli {
    /// VK user whose album should be mirrored; prompted for when omitted.
    #[arg(long)]
    user_id: Option<String>,

    /// Album to mirror; negative ids address the service albums.
    #[arg(long, default_value_t = -6)]
    album_id: i64,

    /// Destination folder on the storage backend.
    #[arg(long, default_value = "vk_images")]
    folder: String,

    /// Where to write the transfer manifest.
    #[arg(long, default_value = "data.json")]
    output: PathBuf,

    /// HTTP timeout in seconds for both API clients.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// VK API access token.
    #[arg(long, env = "VK_ACCESS_TOKEN", hide_env_values = true)]
    vk_token: Option<String>,

    /// Storage OAuth token; prompted for when omitted.
    #[arg(long, env = "DISK_ACCESS_TOKEN", hide_env_values = true)]
    disk_token: Option<String>,

    /// Suppress console reporting.
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vk_album_backup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let user_id = match cli.user_id {
        Some(value) => value,
        None => prompt("VK user id: ")?,
    };
    let disk_token = match cli.disk_token {
        Some(value) => value,
        None => prompt("Yandex Disk token: ")?,
    };

    let config = Config {
        vk: VkConfig {
            access_token: cli.vk_token.unwrap_or_default(),
            owner_id: user_id,
            album_id: cli.album_id,
            ..VkConfig::default()
        },
        disk: DiskConfig {
            access_token: disk_token,
            folder_name: cli.folder,
            ..DiskConfig::default()
        },
        output: OutputConfig {
            manifest_path: cli.output,
        },
        timeout_secs: cli.timeout_secs,
    };

    let reporter = Arc::new(ConsoleReporter::new(!cli.quiet));
    pipeline::run(&config, reporter).await?;
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(label.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
