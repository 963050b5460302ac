//! Export of the DNS TXT record as a downloadable text file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use cc_core::verification::{dns_txt_record, VerificationToken, DNS_TXT_FILE_NAME};

pub struct DnsRecordFile {
    path: PathBuf,
}

impl DnsRecordFile {
    /// File named [`DNS_TXT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DNS_TXT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the TXT record for `token`, replacing any previous export.
    pub async fn write(&self, token: &VerificationToken) -> anyhow::Result<PathBuf> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut file = fs::File::create(&self.path)
            .await
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        file.write_all(dns_txt_record(token).as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        file.sync_all()
            .await
            .with_context(|| format!("Failed to sync {}", self.path.display()))?;

        info!(path = %self.path.display(), "DNS TXT record exported");
        Ok(self.path.clone())
    }
}
