//! Command line entry point reporting entity centers for a demo scene.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use collision::{init_logging, Scene};
use log::{info, warn};

/// Report entity centers for a 2D collision demo scene
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON scene file; the built-in demo scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,
}

/// Scene selected by the arguments: the file when given, else the demo.
fn scene_for(args: &Args) -> Result<Scene> {
    args.scene.as_ref().map_or_else(
        || Ok(Scene::demo()),
        |path| Scene::load(path).with_context(|| format!("loading scene {}", path.display())),
    )
}

fn run(args: &Args) -> Result<()> {
    let world = scene_for(args)?.into_world();
    for (id, entity) in world.iter() {
        let sprite = entity.sprite_rect();
        if sprite.is_unspecialized() {
            warn!("entity {id} has no sprite bounds; center equals position");
        }
        info!(
            "entity {id}: position {} sprite {:?} center {}",
            entity.position(),
            sprite.rect(),
            entity.center()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}
