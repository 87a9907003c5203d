//! `hazard-record asset` command.

use std::path::Path;

use crate::assets::{AssetLoader, ExtensionAssetLoader};
use crate::config::Settings;
use crate::context::ServiceContext;

/// Execute the `asset` command.
///
/// # Errors
///
/// Returns an error string if the asset kind is not registered or the file
/// cannot be read.
pub fn run(ctx: &ServiceContext, settings: &Settings, path: &Path) -> Result<(), String> {
    let loader = ExtensionAssetLoader::new(ctx, &settings.asset_extensions);
    let asset = loader.load_asset(path).map_err(|e| e.to_string())?;
    println!("{} ({}, {} bytes)", asset.path().display(), asset.extension(), asset.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn ctx() -> ServiceContext {
        ServiceContext::with_fs(
            MemoryFileSystem::new()
                .with_file("/ui/App.vue", "<template/>")
                .with_file("/ui/icon.svg", "<svg/>"),
        )
    }

    fn settings(extensions: &[&str]) -> Settings {
        Settings {
            store_dir: PathBuf::from("/records"),
            asset_extensions: extensions.iter().map(|e| (*e).to_string()).collect(),
        }
    }

    #[test]
    fn loads_default_extension() {
        assert!(run(&ctx(), &settings(&[]), Path::new("/ui/App.vue")).is_ok());
    }

    #[test]
    fn honours_configured_extensions() {
        assert!(run(&ctx(), &settings(&[]), Path::new("/ui/icon.svg")).is_err());
        assert!(run(&ctx(), &settings(&["svg"]), Path::new("/ui/icon.svg")).is_ok());
    }
}
