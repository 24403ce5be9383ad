//! Generate a placeholder `cameras.json` from a folder of images.
//!
//! Cameras are laid out on a circle around the origin with identity
//! orientation, which is enough to preview a photo set in the viewer before
//! real poses are available.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use viewer_core::{circle_layout, is_image_file, CameraManifest};

#[derive(Parser, Debug)]
#[command(name = "make-cameras", about = "Write cameras.json for a folder of images")]
struct Args {
    /// Directory containing the images
    #[arg(long, default_value = "imgs")]
    imgs: PathBuf,

    /// Output file
    #[arg(long, default_value = "cameras.json")]
    out: PathBuf,

    /// Radius of the camera circle
    #[arg(long, default_value_t = 1.0)]
    radius: f32,
}

fn list_images(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        bail!("{} folder not found; create it and add images", dir.display());
    }
    let mut files: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image_file(path))
        .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
        .collect();
    files.sort();
    Ok(files)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let images = list_images(&args.imgs)?;
    if images.is_empty() {
        bail!("no image files found in {}", args.imgs.display());
    }
    log::debug!("[make-cameras] images: {:?}", images);

    let manifest = CameraManifest {
        cameras: circle_layout(&images, args.radius),
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&args.out, json).with_context(|| format!("writing {}", args.out.display()))?;

    log::info!(
        "[make-cameras] wrote {} cameras to {}",
        manifest.cameras.len(),
        args.out.display()
    );
    Ok(())
}
