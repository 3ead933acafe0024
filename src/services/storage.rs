use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tokio::fs::{self, File};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Filename the background image is stored and served under.
pub const IMAGE_NAME: &str = "bg.jpg";

/// Metadata of the stored background image.
#[derive(Debug, Clone)]
pub struct BackgroundMeta {
    pub hash: String,
    pub size: u64,
}

/// Single-image store backed by the local filesystem.
///
/// A replacement is fully written to a staging file first and then renamed
/// over the live image. The rename is atomic on the same filesystem, and a
/// reader holding an open handle keeps the content it started with.
pub struct BackgroundStore {
    root: PathBuf,
    current: RwLock<Option<BackgroundMeta>>,
}

impl BackgroundStore {
    /// Opens the store, creating the data directory if needed. An image left
    /// behind by a previous run is picked up and re-hashed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .with_context(|| format!("failed to create data dir {}", root.display()))?;

        let image_path = root.join(IMAGE_NAME);
        let current = match File::open(&image_path).await {
            Ok(file) => Some(hash_file(file).await?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e).context("failed to open existing background"),
        };

        Ok(Self {
            root,
            current: RwLock::new(current),
        })
    }

    pub fn image_path(&self) -> PathBuf {
        self.root.join(IMAGE_NAME)
    }

    /// Streams `reader` into the store and makes it the current background,
    /// calculating its SHA256 hash on the fly. A failed write removes the
    /// staging file and leaves the current image untouched.
    pub async fn replace<R>(&self, mut reader: R) -> Result<BackgroundMeta>
    where
        R: AsyncRead + Unpin + Send,
    {
        let staging_path = self.root.join(format!(".staging-{}", Uuid::new_v4()));

        let meta = match write_staging(&staging_path, &mut reader).await {
            Ok(meta) => meta,
            Err(e) => {
                let _ = fs::remove_file(&staging_path).await;
                return Err(e);
            }
        };

        fs::rename(&staging_path, self.image_path())
            .await
            .context("failed to promote staging file")?;

        *self.current.write().await = Some(meta.clone());
        Ok(meta)
    }

    /// Metadata of the current background, if one has been uploaded.
    pub async fn current(&self) -> Option<BackgroundMeta> {
        self.current.read().await.clone()
    }

    /// Opens the current background for reading, along with its metadata.
    pub async fn open_current(&self) -> Result<Option<(File, BackgroundMeta)>> {
        let Some(meta) = self.current().await else {
            return Ok(None);
        };

        match File::open(self.image_path()).await {
            Ok(file) => Ok(Some((file, meta))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("failed to open background"),
        }
    }
}

async fn write_staging<R>(path: &Path, reader: &mut R) -> Result<BackgroundMeta>
where
    R: AsyncRead + Unpin + Send,
{
    let mut file = File::create(path)
        .await
        .context("failed to create staging file")?;
    let mut hasher = Sha256::new();
    let mut size: u64 = 0;
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        file.write_all(&buffer[..n]).await?;
        size += n as u64;
    }

    file.flush().await?;

    Ok(BackgroundMeta {
        hash: hex::encode(hasher.finalize()),
        size,
    })
}

async fn hash_file(mut file: File) -> Result<BackgroundMeta> {
    let mut hasher = Sha256::new();
    let mut size: u64 = 0;
    let mut buffer = [0u8; 8192];

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        size += n as u64;
    }

    Ok(BackgroundMeta {
        hash: hex::encode(hasher.finalize()),
        size,
    })
}
