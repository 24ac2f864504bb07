mod backup;
mod config;
mod disk;
mod error;
mod naming;
mod report;
mod vk;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use backup::Backuper;
use config::{Config, Credentials};
use disk::DiskClient;
use vk::VkClient;

#[derive(Parser)]
#[command(author, version, about = "A tool to back up VK photos to Yandex.Disk")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize with a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Path to config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Copy photos from VK to Yandex.Disk and write the upload report
    Backup {
        /// Path to config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { force, config } => {
            init_config(config, *force)?;
            Ok(())
        }
        Commands::Backup { config } => {
            let config_data = load_config(config)?;
            let credentials = Credentials::from_env()?;

            println!("Backing up photos...");
            println!("Owner id: {}", config_data.owner_id);
            println!("Album: {}", config_data.album_id);
            println!("Photo count: {}", config_data.photo_count);

            let vk = VkClient::new(credentials.vk_token);
            let disk = DiskClient::new(credentials.disk_token);
            let backuper = Backuper::new(vk, disk, PathBuf::from(&config_data.report_file));

            let summary = backuper
                .run(
                    &config_data.owner_id,
                    &config_data.album_id,
                    config_data.photo_count,
                )
                .await?;

            match &summary.report_file {
                Some(path) => {
                    println!(
                        "Uploaded {} photos ({} skipped)",
                        summary.uploaded(),
                        summary.failed()
                    );
                    println!("Report written to {}", path.display());
                }
                None => println!("No photos to upload."),
            }

            Ok(())
        }
    }
}

fn init_config(config_path_opt: &Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = Config::get_config_path(config_path_opt);

    if config_path.exists() && !force {
        println!("Config file already exists at {}", config_path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    config.save_to_file(&config_path)?;

    println!("Created config file at {}", config_path.display());
    println!("Fill in owner_id before running 'vkAlbum2disk backup'");
    Ok(())
}

fn load_config(config_path_opt: &Option<PathBuf>) -> Result<Config> {
    let config_path = Config::get_config_path(config_path_opt);

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run 'vkAlbum2disk init' to create one.",
            config_path.display()
        );
    }

    Config::load_from_file(&config_path)
}
