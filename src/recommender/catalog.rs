use crate::models::LearningPath;

use super::ModuleCandidate;

/// Flattens every path's modules into recommendation candidates
///
/// Modules carry no tags of their own; each candidate inherits its owning
/// path's skill tags. Path order and module order are preserved. When nothing
/// can be collected a small built-in catalog is returned instead.
pub fn assemble(paths: &[LearningPath]) -> Vec<ModuleCandidate> {
    let candidates: Vec<ModuleCandidate> = paths
        .iter()
        .flat_map(|path| {
            path.module_titles()
                .map(move |title| ModuleCandidate::new(title, path.skill_tags.clone()))
        })
        .collect();

    if candidates.is_empty() {
        tracing::debug!(paths = paths.len(), "No modules in catalog, using built-in candidates");
        return default_catalog();
    }

    candidates
}

/// Candidates offered when no learning path has any modules
pub fn default_catalog() -> Vec<ModuleCandidate> {
    vec![
        ModuleCandidate::new("Advanced React", vec!["React".to_string()]),
        ModuleCandidate::new("Intro to Python", vec!["Python".to_string()]),
    ]
}
