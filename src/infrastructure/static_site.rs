use std::path::{Path, PathBuf};

pub const TEMPLATE_FILE: &str = "index.html";

/// Directory holding the HTML template, the client bundle and the assets.
#[derive(Debug, Clone)]
pub struct StaticSite {
    root: PathBuf,
    template: PathBuf,
}

impl StaticSite {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let template = root.join(TEMPLATE_FILE);
        Self { root, template }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn template_path(&self) -> &Path {
        &self.template
    }

    /// Reads the template fresh on every call so a rebuilt client bundle is
    /// picked up without a restart.
    ///
    /// # Errors
    ///
    /// The I/O error of reading the template file.
    pub async fn read_template(&self) -> std::io::Result<String> {
        tokio::fs::read_to_string(&self.template).await
    }
}
