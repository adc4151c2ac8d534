use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::submission::csv;

/// On-disk locations shared by every request: the image storage directory
/// and the append-only CSV log.
#[derive(Debug, Clone)]
pub struct Store {
    images_dir: PathBuf,
    csv_path: PathBuf,
}

impl Store {
    /// Create both directories and seed the log with its header if absent.
    /// An existing log is never rewritten.
    pub fn init(images_dir: &Path, layers_dir: &Path, csv_file: &str) -> io::Result<Self> {
        std::fs::create_dir_all(images_dir)?;
        std::fs::create_dir_all(layers_dir)?;

        let csv_path = layers_dir.join(csv_file);
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&csv_path)
        {
            Ok(mut file) => {
                io::Write::write_all(&mut file, csv::HEADER.as_bytes())?;
                tracing::info!("Created {}", csv_path.display());
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }

        Ok(Store {
            images_dir: images_dir.to_path_buf(),
            csv_path,
        })
    }

    pub fn from_config(config: &Config) -> io::Result<Self> {
        Self::init(&config.images_dir, &config.layers_dir, &config.csv_file)
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub async fn save_image(&self, stored_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.images_dir.join(stored_name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Append one already-terminated row in a single write. Concurrent
    /// appends are not serialized against each other.
    pub async fn append_row(&self, row: &str) -> io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .await?;
        file.write_all(row.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
