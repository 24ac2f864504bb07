#![allow(non_snake_case)]
//! # vkAlbum2disk
//!
//! A command-line tool that backs up a VK user's photos to a folder on
//! Yandex.Disk.
//!
//! The tool asks VK for up to N photos from one album, picks the
//! largest rendition of each, and tells Disk to fetch that rendition
//! straight from VK's CDN; no photo bytes pass through this process.
//! Every accepted upload is recorded, and the records are written to a
//! JSON report at the end of the run.
//!
//! ## Features
//!
//! - Server-side uploads: Disk downloads each photo from VK itself
//! - Like-count file naming with a date suffix on collisions
//! - Destination folder created on demand, reused when already present
//! - One bad photo never aborts the batch; failures are logged and skipped
//! - JSON report of uploaded file names and size classes

// Export modules for integration testing
pub mod backup;
pub mod config;
pub mod disk;
pub mod error;
pub mod naming;
pub mod report;
pub mod vk;

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::error::Error;
    use std::fs;
    use std::process::Command as StdCommand;
    use tempfile::TempDir;

    fn cargo_bin() -> Command {
        let cargo = StdCommand::new(env!("CARGO"))
            .arg("build")
            .output()
            .expect("Failed to build binary");

        assert!(cargo.status.success(), "Failed to build vkAlbum2disk");

        Command::cargo_bin("vkAlbum2disk").expect("Failed to find vkAlbum2disk binary")
    }

    #[test]
    fn test_config_generation() -> Result<(), Box<dyn Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        // Create a config file with init command
        let mut cmd = cargo_bin();
        cmd.arg("init").current_dir(temp_dir.path()).assert().success();

        // Check if config file exists
        assert!(config_path.exists(), "Config file should be created");

        // Read the config file content
        let content = fs::read_to_string(&config_path)?;
        assert!(content.contains("owner_id"), "Config should contain owner_id");
        assert!(content.contains("album_id"), "Config should contain album_id");
        assert!(
            content.contains("photo_count"),
            "Config should contain photo_count"
        );
        assert!(
            content.contains("report_file"),
            "Config should contain report_file"
        );

        Ok(())
    }

    #[test]
    fn test_init_command_with_force() -> Result<(), Box<dyn Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        // Create initial config
        let initial_content = "owner_id: \"keep-me\"";
        fs::write(&config_path, initial_content)?;

        // Run init command without force (should not overwrite)
        let mut cmd = cargo_bin();
        let output = cmd
            .arg("init")
            .current_dir(temp_dir.path())
            .assert()
            .success();

        // Check stdout for "already exists" message
        let stdout = String::from_utf8(output.get_output().stdout.clone())?;
        assert!(
            stdout.contains("Config file already exists"),
            "Should detect existing config"
        );

        // Check content wasn't changed
        let content = fs::read_to_string(&config_path)?;
        assert_eq!(
            content, initial_content,
            "Content should not be changed without --force"
        );

        // Run init command with force (should overwrite)
        let mut cmd = cargo_bin();
        cmd.arg("init")
            .arg("--force")
            .current_dir(temp_dir.path())
            .assert()
            .success();

        // Check content was changed
        let new_content = fs::read_to_string(&config_path)?;
        assert_ne!(
            new_content, initial_content,
            "Content should be changed with --force"
        );
        assert!(
            new_content.contains("photo_count"),
            "New config should contain photo_count"
        );

        Ok(())
    }

    #[test]
    fn test_init_with_custom_config_path() -> Result<(), Box<dyn Error>> {
        let temp_dir = TempDir::new()?;
        let custom_path = temp_dir.path().join("custom_config.yaml");

        // Run init with custom config path
        let mut cmd = cargo_bin();
        cmd.arg("init")
            .arg("--config")
            .arg(&custom_path)
            .assert()
            .success();

        // Check custom config was created
        assert!(custom_path.exists(), "Custom config file should be created");

        Ok(())
    }

    #[test]
    fn test_missing_config_error() -> Result<(), Box<dyn Error>> {
        let temp_dir = TempDir::new()?;
        let nonexistent_path = temp_dir.path().join("does_not_exist.yaml");

        // Run backup with nonexistent config path
        let mut cmd = cargo_bin();
        cmd.arg("backup")
            .arg("--config")
            .arg(&nonexistent_path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Config file not found"));

        Ok(())
    }

    #[test]
    fn test_backup_requires_tokens() -> Result<(), Box<dyn Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        let config_content = "owner_id: \"12345\"\nphoto_count: 3\n";
        fs::write(&config_path, config_content)?;

        // No VK_TOKEN in the environment and no .env in the temp dir, so
        // the run must stop before any network call.
        let mut cmd = cargo_bin();
        cmd.arg("backup")
            .arg("--config")
            .arg(&config_path)
            .current_dir(temp_dir.path())
            .env_remove("VK_TOKEN")
            .env_remove("YANDEX_DISK_TOKEN")
            .assert()
            .failure()
            .stderr(predicate::str::contains("VK_TOKEN"));

        Ok(())
    }

    #[test]
    fn test_backup_rejects_zero_photo_count() -> Result<(), Box<dyn Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(&config_path, "owner_id: \"12345\"\nphoto_count: 0\n")?;

        let mut cmd = cargo_bin();
        cmd.arg("backup")
            .arg("--config")
            .arg(&config_path)
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("photo_count"));

        Ok(())
    }
}
