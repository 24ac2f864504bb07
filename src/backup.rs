//! End-to-end backup flow.
//!
//! The `Backuper` drives the whole pipeline: create the destination
//! folder on Disk, fetch the photo list from VK, and then, for each
//! photo strictly one at a time in fetch order, pick the largest
//! variant, derive a file name, and hand the variant's URL to Disk for
//! a server-side upload. A failed upload skips that photo and moves
//! on; only folder creation and the photo fetch abort the run. The
//! report is written exactly once, after the loop.
//!
//! Uploads are not parallelized: the date-suffix naming rule keys off
//! which like-counts have already been used, so processing order must
//! match fetch order.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};
use log::{info, warn};

use crate::disk::DiskClient;
use crate::naming;
use crate::report::{self, PhotoInfo};
use crate::vk::VkClient;

/// Result of one photo's trip through the pipeline
#[derive(Debug)]
pub enum UploadOutcome {
    /// Photo accepted by Disk under the given file name
    Uploaded(String),
    /// Photo skipped; carries the photo id and the reason
    Failed(i64, String),
}

/// What a finished run looked like
#[derive(Debug, Default)]
pub struct BackupSummary {
    /// Per-photo outcomes, in processing order
    pub outcomes: Vec<UploadOutcome>,
    /// Where the report landed; `None` when the album was empty and no
    /// report was written
    pub report_file: Option<PathBuf>,
}

impl BackupSummary {
    pub fn uploaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, UploadOutcome::Uploaded(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.uploaded()
    }
}

/// Responsible for copying photos from VK to Yandex.Disk
pub struct Backuper {
    vk: VkClient,
    disk: DiskClient,
    report_file: PathBuf,
}

impl Backuper {
    pub fn new(vk: VkClient, disk: DiskClient, report_file: PathBuf) -> Self {
        Self {
            vk,
            disk,
            report_file,
        }
    }

    /// Runs the pipeline for one owner and album.
    ///
    /// Folder creation and the photo fetch are prerequisites; an error
    /// in either aborts the run before any upload is attempted. An
    /// empty album is a successful no-op and leaves any report from a
    /// previous run untouched.
    pub async fn run(&self, owner_id: &str, album_id: &str, count: u32) -> Result<BackupSummary> {
        let folder = format!("backup_vk_photos_{owner_id}");

        self.disk
            .create_folder(&folder)
            .await
            .with_context(|| format!("Failed to create folder {folder} on Disk"))?;

        let photos = self
            .vk
            .get_photos(owner_id, album_id, count)
            .await
            .context("Failed to fetch photos from VK")?;

        if photos.is_empty() {
            info!("No photos to upload");
            return Ok(BackupSummary::default());
        }

        info!("Uploading {} photos to {folder}", photos.len());

        let mut seen_like_counts: HashSet<u64> = HashSet::new();
        let mut entries: Vec<PhotoInfo> = Vec::new();
        let mut outcomes: Vec<UploadOutcome> = Vec::new();

        for photo in &photos {
            let Some(variant) = naming::largest_variant(&photo.sizes) else {
                warn!("Photo {} has no size variants, skipping", photo.id);
                outcomes.push(UploadOutcome::Failed(
                    photo.id,
                    "no size variants".to_string(),
                ));
                continue;
            };

            let file_name = naming::file_name(
                photo.likes.count,
                upload_date(photo.date),
                &mut seen_like_counts,
            );
            let destination = format!("{folder}/{file_name}");

            match self.disk.upload_from_url(&destination, &variant.url).await {
                Ok(()) => {
                    info!("Uploaded photo {} as {file_name}", photo.id);
                    entries.push(PhotoInfo {
                        file_name: file_name.clone(),
                        size: variant.size_class.clone(),
                    });
                    outcomes.push(UploadOutcome::Uploaded(file_name));
                }
                Err(err) => {
                    warn!("Failed to upload photo {} as {file_name}: {err}", photo.id);
                    outcomes.push(UploadOutcome::Failed(photo.id, err.to_string()));
                }
            }
        }

        report::write_report(&self.report_file, &entries)
            .context("Failed to write the upload report")?;

        Ok(BackupSummary {
            outcomes,
            report_file: Some(self.report_file.clone()),
        })
    }
}

/// Converts a VK upload timestamp to a calendar date in the local
/// timezone, which is what date-suffixed file names embed.
fn upload_date(epoch_seconds: i64) -> NaiveDate {
    Local
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
