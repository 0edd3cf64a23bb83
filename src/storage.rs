use crate::model::Plan;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Persistance d'un plan généré entre deux invocations.
pub trait Storage {
    fn load(&self) -> anyhow::Result<Plan>;
    fn save(&self, plan: &Plan) -> anyhow::Result<()>;
}

/// Plan sérialisé en JSON dans un fichier unique.
///
/// L'écriture passe par un fichier temporaire du même répertoire puis un
/// rename : un plan existant n'est jamais laissé à moitié écrit, même si la
/// sauvegarde échoue en cours de route.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Répertoire du fichier cible, où doit vivre le fichier temporaire
    /// pour que le rename reste sur le même système de fichiers.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Plan> {
        let data =
            fs::read(&self.path).with_context(|| format!("no plan at {}", self.path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("{} does not hold a serialized plan", self.path.display()))
    }

    fn save(&self, plan: &Plan) -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir())
            .with_context(|| format!("temp file next to {}", self.path.display()))?;
        serde_json::to_writer_pretty(&mut tmp, plan)
            .with_context(|| format!("serializing plan {} for {}", plan.id.as_str(), plan.year))?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}
