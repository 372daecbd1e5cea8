//! Generation Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Validate the config through the gate
//! 2. Render the project plan
//! 3. Write it to the filesystem (rolling back on failure)
//! 4. Finalize (lock dependencies)

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProjectRenderer},
        services::finalizer::{FinalizeOutcome, Finalizer},
    },
    domain::{
        DomainValidator as validator, FsEntry, GenerationConfig, ProjectStructure,
        ValidationGate,
    },
    error::{PyskelError, PyskelResult},
};

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub package_name: String,
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
    pub finalize: FinalizeOutcome,
    pub generated_at: DateTime<Utc>,
}

/// Main generation service.
pub struct GenerationService {
    gate: ValidationGate,
    renderer: Box<dyn ProjectRenderer>,
    filesystem: Box<dyn Filesystem>,
    finalizer: Option<Finalizer>,
}

impl GenerationService {
    /// Create a service with the standard gate and no finalizer.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = GenerationService::new(
    ///     Box::new(PythonBlueprint::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// )
    /// .with_finalizer(Finalizer::new(resolver, Box::new(LocalFilesystem::new())));
    /// ```
    pub fn new(renderer: Box<dyn ProjectRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            gate: ValidationGate::standard(),
            renderer,
            filesystem,
            finalizer: None,
        }
    }

    /// Replace the validation gate.
    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.gate = gate;
        self
    }

    /// Run `finalizer` after every successful write.
    pub fn with_finalizer(mut self, finalizer: Finalizer) -> Self {
        self.finalizer = Some(finalizer);
        self
    }

    /// Run the gate only.
    pub fn validate(&self, config: &GenerationConfig) -> PyskelResult<()> {
        self.gate.validate(config).map_err(PyskelError::Domain)
    }

    /// Validate and render without touching the filesystem (beyond the
    /// existence check on the project root).
    #[instrument(skip_all, fields(output_dir = %output_dir.as_ref().display()))]
    pub fn plan(
        &self,
        config: &GenerationConfig,
        output_dir: impl AsRef<Path>,
    ) -> PyskelResult<ProjectStructure> {
        self.validate(config)?;

        let package_name = config.package_name()?;
        let root = output_dir.as_ref().join(package_name);

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let structure = self.renderer.render(config, &root)?;
        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }

    /// Generate a project under `output_dir/<package_name>`.
    #[instrument(
        skip_all,
        fields(
            run_id = tracing::field::Empty,
            output_dir = %output_dir.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        config: &GenerationConfig,
        output_dir: impl AsRef<Path>,
    ) -> PyskelResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        let structure = self.plan(config, output_dir)?;
        let package_name = config.package_name()?.to_string();
        info!(package = %package_name, entries = structure.entry_count(), "Project rendered");

        self.write_structure(&structure)?;

        let finalize = match &self.finalizer {
            Some(finalizer) => finalizer.run(structure.root())?,
            None => FinalizeOutcome::Skipped,
        };

        info!(package = %package_name, root = %structure.root().display(), "Generation completed");

        Ok(GenerationReport {
            run_id,
            package_name,
            root: structure.root().to_path_buf(),
            files: structure.files().map(|f| f.path.clone()).collect(),
            directories: structure.directories().map(|d| d.path.clone()).collect(),
            finalize,
            generated_at: Utc::now(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> PyskelResult<()> {
        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> PyskelResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
