//! Generate static files

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::content::{ContentLoader, FsDetailSource};
use crate::generator::Generator;
use crate::Portfolio;

/// Generate the static site
pub async fn run(portfolio: &Portfolio) -> Result<()> {
    let start = Instant::now();

    let data = ContentLoader::new(portfolio).load().await?;
    tracing::info!(
        "Loaded {} skills, {} projects and {} career entries",
        data.skills.languages.len() + data.skills.frameworks.len() + data.skills.tools.len(),
        data.projects.len(),
        data.career.len()
    );

    let generator = Generator::new(portfolio)?;
    let source = FsDetailSource::new(portfolio);
    generator.generate(&data, &source).await?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch the content and regenerate on change
///
/// The configuration is re-read before every rebuild.
pub async fn watch(portfolio: &Portfolio) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for dir in [
        &portfolio.data_dir,
        &portfolio.detail_dir,
        &portfolio.static_dir,
    ] {
        if dir.exists() {
            watcher.watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = portfolio.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    while let Some(event) = rx.recv().await {
        if event
            .paths
            .iter()
            .all(|p| is_output(p, &portfolio.public_dir))
        {
            continue;
        }

        // Debounce: only rebuild if more than 500ms since last rebuild
        if last_rebuild.elapsed() <= Duration::from_millis(500) {
            continue;
        }

        tracing::info!("File changed, regenerating...");
        let result = match Portfolio::new(&portfolio.base_dir) {
            Ok(fresh) => run(&fresh).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::error!("Generation failed: {:#}", e);
        }
        last_rebuild = Instant::now();
    }

    Ok(())
}

/// Files written by the generator itself never trigger a rebuild
fn is_output(path: &Path, public_dir: &Path) -> bool {
    path.starts_with(public_dir)
}
