//! The conversion orchestrator.
//!
//! One conversion fans out into N independent render-and-write tasks (one
//! per step, plus the index file and the package manifest). Every task works
//! on its own slice of the immutable [`LegacyApp`] and its own output path,
//! so no ordering between them matters; directory creation is idempotent and
//! safe to race. The aggregate resolves when every task resolves and fails on
//! the first task failure. There is no rollback of already-written files and
//! no cancellation guarantee for in-flight siblings.

use crate::error::ConvertError;
use crate::legacy::LegacyApp;
use crate::mapping::StepCategory;
use crate::render::{normalize_key, render_index, render_package_json, render_step};
use crate::template::TemplateSet;
use futures::future::{BoxFuture, try_join_all};
use std::path::Path;
use tracing::info;

/// Converts a legacy app into a file-per-step output tree.
///
/// Writes `triggers/<key>.js`, `searches/<key>.js` and `writes/<key>.js` for
/// every step, plus `index.js` and `package.json`, all under `output_dir`.
/// Templates are read from `templates_root`; a missing or unreadable
/// template aborts the whole conversion before anything is written.
pub async fn convert_app(
    app: &LegacyApp,
    templates_root: &Path,
    output_dir: &Path,
) -> Result<(), ConvertError> {
    let templates = TemplateSet::load(templates_root).await?;
    let templates = &templates;

    let mut tasks: Vec<BoxFuture<'_, Result<(), ConvertError>>> = Vec::new();
    for category in StepCategory::ALL {
        for (key, definition) in app.steps(category) {
            let path = output_dir
                .join(category.output_dir())
                .join(format!("{}.js", normalize_key(key)));
            tasks.push(Box::pin(async move {
                let content = render_step(category, definition, key, templates);
                write_file(&path, &content).await
            }));
        }
    }

    let index_path = output_dir.join("index.js");
    tasks.push(Box::pin(async move {
        let content = render_index(app, templates);
        write_file(&index_path, &content).await
    }));

    let manifest_path = output_dir.join("package.json");
    tasks.push(Box::pin(async move {
        let content = render_package_json(app, templates);
        write_file(&manifest_path, &content).await
    }));

    try_join_all(tasks).await?;
    Ok(())
}

/// Writes one generated file, creating parent directories as needed.
/// Emits a progress event before and after the write.
async fn write_file(path: &Path, content: &str) -> Result<(), ConvertError> {
    info!(path = %path.display(), "writing generated file");
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ConvertError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|source| ConvertError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "generated file written");
    Ok(())
}
