//! Generate service - main application orchestrator.
//!
//! Coordinates one full multi-target run:
//! 1. Resolve the seed symbol (fatal if missing or ambiguous)
//! 2. Per target: run the closure, render every ClassMeta, write artifacts
//! 3. Report what was written
//!
//! Directory creation is idempotent and tolerated on failure (the write
//! that follows fails loudly if the directory is genuinely unusable).
//! Renderer output is written through unchanged — including diagnostic
//! text for broken templates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::application::services::closure::ClosureWalker;
use crate::application::services::symbol_index::{LookupError, SymbolIndex};
use crate::application::settings::EngineSettings;
use crate::domain::{ClassMeta, DomainError, GenerationTarget, Symbol};
use crate::error::{GantryError, GantryResult};

/// Summary of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub run_id: Uuid,
    pub seed: String,
    /// Paths of every artifact written, in emission order.
    pub artifacts: Vec<PathBuf>,
    /// Artifact count per target.
    pub per_target: BTreeMap<GenerationTarget, usize>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.artifacts.len()
    }
}

/// One artifact to render and write.
struct ArtifactPlan {
    template_id: &'static str,
    file_name: String,
    namespace: String,
    directories: Vec<PathBuf>,
    meta: ClassMeta,
}

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Run every requested target for one seed type.
    #[instrument(skip_all, fields(seed = %seed_name))]
    pub fn generate(
        &self,
        index: &SymbolIndex,
        seed_name: &str,
        settings: &EngineSettings,
        output_root: &Path,
        targets: &[GenerationTarget],
    ) -> GantryResult<GenerateReport> {
        let seed = self.resolve_seed(index, seed_name, settings)?;
        info!(seed = %seed.full_name, "seed resolved");

        let mut report = GenerateReport {
            run_id: Uuid::new_v4(),
            seed: seed.full_name.clone(),
            artifacts: Vec::new(),
            per_target: BTreeMap::new(),
        };

        for target in targets {
            let walker = ClosureWalker::new(index, *target);
            let (built, visited) = walker.run(&seed).map_err(GantryError::Domain)?;
            info!(target = %target, types = visited.len(), "closure resolved");

            let mut count = 0usize;
            for item in built {
                for plan in self.plan_artifacts(*target, item.meta, settings) {
                    let path = self.emit(&plan, output_root, settings)?;
                    report.artifacts.push(path);
                    count += 1;
                }
            }
            report.per_target.insert(*target, count);
        }

        info!(
            run_id = %report.run_id,
            artifacts = report.total(),
            "generation complete"
        );
        Ok(report)
    }

    fn resolve_seed(
        &self,
        index: &SymbolIndex,
        seed_name: &str,
        settings: &EngineSettings,
    ) -> GantryResult<Arc<Symbol>> {
        let namespace = settings.namespaces.domain.as_str();
        match index.find_by_name(seed_name, Some(namespace)) {
            Ok(symbol) => Ok(Arc::clone(symbol)),
            Err(LookupError::NotFound) => {
                warn!(seed = %seed_name, namespace = %namespace, "seed not found");
                Err(DomainError::SeedNotFound {
                    name: seed_name.into(),
                    namespace: namespace.into(),
                }
                .into())
            }
            Err(LookupError::Ambiguous { candidates }) => Err(DomainError::AmbiguousReference {
                name: seed_name.into(),
                candidates,
            }
            .into()),
        }
    }

    /// Lay out the artifacts one ClassMeta produces under a target.
    ///
    /// The base command additionally yields the two command-handler
    /// artifacts, rendered from a deep clone of the metadata carrying the
    /// contracts namespace as a supplemental import.
    fn plan_artifacts(
        &self,
        target: GenerationTarget,
        meta: ClassMeta,
        settings: &EngineSettings,
    ) -> Vec<ArtifactPlan> {
        let name = meta.name.clone();
        let ns = &settings.namespaces;
        let paths = &settings.paths;

        let commands_dirs = vec![
            PathBuf::from(&paths.contracts),
            PathBuf::from(&paths.contracts).join(format!("{name}s")),
            PathBuf::from(&paths.contracts)
                .join(format!("{name}s"))
                .join("Commands"),
        ];
        let commands_ns = format!("{}.{name}s.Commands", ns.contracts);

        match target {
            GenerationTarget::Configuration => vec![ArtifactPlan {
                template_id: "configuration",
                file_name: format!("{name}Configuration"),
                namespace: format!("{}.Configurations", ns.infrastructure),
                directories: vec![
                    PathBuf::from(&paths.infrastructure),
                    PathBuf::from(&paths.infrastructure).join("Configurations"),
                ],
                meta,
            }],
            GenerationTarget::BaseCommand => {
                let mut handler_meta = meta.clone();
                handler_meta.add_namespace(commands_ns.clone());
                let handler_ns = format!("{}.{name}s", ns.commands);

                vec![
                    ArtifactPlan {
                        template_id: "base_command",
                        file_name: format!("{name}BaseCommand"),
                        namespace: commands_ns.clone(),
                        directories: commands_dirs.clone(),
                        meta,
                    },
                    ArtifactPlan {
                        template_id: "create_handler",
                        file_name: format!("Create{name}CommandHandler"),
                        namespace: handler_ns.clone(),
                        directories: commands_dirs.clone(),
                        meta: handler_meta.clone(),
                    },
                    ArtifactPlan {
                        template_id: "update_handler",
                        file_name: format!("Update{name}CommandHandler"),
                        namespace: handler_ns,
                        directories: commands_dirs,
                        meta: handler_meta,
                    },
                ]
            }
            GenerationTarget::CreateCommand => vec![ArtifactPlan {
                template_id: "create_command",
                file_name: format!("Create{name}Command"),
                namespace: commands_ns,
                directories: commands_dirs,
                meta,
            }],
            GenerationTarget::UpdateCommand => vec![ArtifactPlan {
                template_id: "update_command",
                file_name: format!("Update{name}Command"),
                namespace: commands_ns,
                directories: commands_dirs,
                meta,
            }],
            GenerationTarget::GetQuery => vec![ArtifactPlan {
                template_id: "get_response",
                file_name: format!("{name}Response"),
                namespace: format!("{}.{name}s", ns.queries),
                directories: vec![
                    PathBuf::from(&paths.queries),
                    PathBuf::from(&paths.queries).join(format!("{name}s")),
                ],
                meta,
            }],
        }
    }

    /// Render one artifact and write it. Returns the written path.
    fn emit(
        &self,
        plan: &ArtifactPlan,
        output_root: &Path,
        settings: &EngineSettings,
    ) -> GantryResult<PathBuf> {
        for dir in &plan.directories {
            let full = output_root.join(dir);
            if let Err(e) = self.filesystem.create_dir_all(&full) {
                // Tolerated: the write below fails loudly if the
                // directory is genuinely unusable.
                error!(path = %full.display(), error = %e, "directory create failed");
            }
        }

        let content = self
            .renderer
            .render(plan.template_id, &plan.namespace, &plan.meta);

        let file = format!(
            "{}.{}",
            plan.file_name,
            settings.artifact_extension_or_default()
        );
        let target_dir = plan
            .directories
            .last()
            .cloned()
            .unwrap_or_else(PathBuf::new);
        let path = output_root.join(target_dir).join(file);

        self.filesystem.write_file(&path, &content)?;
        Ok(path)
    }
}
