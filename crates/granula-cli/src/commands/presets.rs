//! Preset management commands.
//!
//! Provides commands to list, show, save, and manage spray presets.

use super::common::{ControlArgs, load_preset};
use anyhow::Context;
use clap::{Args, Subcommand};
use granula_config::{
    FACTORY_PRESET_NAMES, SprayPreset, ensure_user_presets_dir, factory_presets,
    get_factory_preset, list_user_presets, preset_name_from_path, user_config_dir,
    user_presets_dir,
};
use granula_spray::SprayEffect;
use std::path::PathBuf;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save control settings as a user preset
    Save {
        /// Name for the new preset
        name: String,

        /// Preset to start from (defaults to the effect defaults)
        #[arg(long)]
        from: Option<String>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        #[command(flatten)]
        controls: ControlArgs,

        /// Fixed seed stored with the preset
        #[arg(long)]
        seed: Option<u32>,

        /// Overwrite if preset already exists
        #[arg(long)]
        force: bool,
    },

    /// Delete a user preset
    Delete {
        /// Preset name to delete
        name: String,

        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },

    /// Copy a factory preset to user presets for customization
    Copy {
        /// Factory preset name
        source: String,

        /// New preset name (optional, uses source name if not specified)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            from,
            description,
            controls,
            seed,
            force,
        } => save_preset(&name, from.as_deref(), description, &controls, seed, force),
        PresetsCommand::Delete { name, force } => delete_preset(&name, force),
        PresetsCommand::Copy { source, name } => copy_preset(&source, name.as_deref()),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    let show_factory = !user_only;
    let show_user = !factory_only;

    if show_factory {
        println!("Factory Presets:");
        println!("================");
        for (id, preset) in FACTORY_PRESET_NAMES.iter().zip(factory_presets()) {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {id:12} {:12} - {desc}", preset.name);
        }
        println!();
    }

    if show_user {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: granula presets save <name> --spray 60\n");
        } else {
            for path in user_presets {
                let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".into());
                match SprayPreset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {name:25} - {desc}");
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "skipping preset");
                        println!("  {name:25} - (error loading)");
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
        println!();
    }

    println!("Sample Rate: {} Hz", preset.sample_rate);
    match preset.seed {
        Some(seed) => println!("Seed:        {seed}"),
        None => println!("Seed:        (default)"),
    }
    println!();

    println!("Controls:");
    for (index, value) in preset.controls.values().into_iter().enumerate() {
        if let Some(desc) = SprayEffect::descriptor(index) {
            println!(
                "  {:12} {:>7.2}{:2} ({})",
                desc.name,
                value,
                desc.unit.suffix(),
                desc.string_id
            );
        }
    }
    println!();

    println!("Command line:");
    println!("  {}", preset_to_args(&preset));

    Ok(())
}

fn save_preset(
    name: &str,
    from: Option<&str>,
    description: Option<String>,
    controls: &ControlArgs,
    seed: Option<u32>,
    force: bool,
) -> anyhow::Result<()> {
    if name.contains(['/', '\\']) {
        anyhow::bail!("Preset name '{name}' must not contain path separators.");
    }

    let mut preset = match from {
        Some(base) => load_preset(base)?,
        None => SprayPreset::default(),
    };
    preset.name = name.to_string();
    if description.is_some() {
        preset.description = description;
    }
    if seed.is_some() {
        preset.seed = seed;
    }
    controls.apply_to(&mut preset.controls)?;
    preset.validate()?;

    let preset_path = ensure_user_presets_dir()?.join(format!("{name}.toml"));
    if preset_path.exists() && !force {
        anyhow::bail!("Preset '{name}' already exists. Use --force to overwrite.");
    }

    preset
        .save(&preset_path)
        .with_context(|| format!("Failed to save preset '{name}'"))?;

    println!("Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}

fn delete_preset(name: &str, force: bool) -> anyhow::Result<()> {
    let preset_path = user_preset_path(name);

    if !preset_path.exists() {
        if get_factory_preset(name).is_some() {
            anyhow::bail!("Cannot delete factory preset '{name}'. Factory presets are built-in.");
        }
        anyhow::bail!("User preset '{name}' not found.");
    }

    if !force {
        anyhow::bail!("Use --force to confirm deletion of preset '{name}'.");
    }

    std::fs::remove_file(&preset_path)
        .with_context(|| format!("Failed to delete {}", preset_path.display()))?;
    println!("Deleted preset '{name}'.");

    Ok(())
}

fn copy_preset(source: &str, new_name: Option<&str>) -> anyhow::Result<()> {
    let mut preset = get_factory_preset(source)
        .with_context(|| format!("Factory preset '{source}' not found."))?;

    let target_name = new_name.unwrap_or(source);
    let preset_path = ensure_user_presets_dir()?.join(format!("{target_name}.toml"));

    if preset_path.exists() {
        anyhow::bail!(
            "Preset '{target_name}' already exists in user presets. Choose a different name with --name."
        );
    }

    preset.name = target_name.to_string();
    preset.description = preset.description.take().map(|desc| format!("{desc} (copy)"));
    preset.save(&preset_path)?;

    println!("Copied factory preset '{source}' to user preset '{target_name}'");
    println!("Path: {}", preset_path.display());

    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Preset Directories:");
    println!("===================");
    println!();
    println!("User presets: {}", user_presets_dir().display());
    println!("Config dir:   {}", user_config_dir().display());

    Ok(())
}

fn user_preset_path(name: &str) -> PathBuf {
    user_presets_dir().join(format!("{name}.toml"))
}

/// Flags for `granula process` that reproduce the preset.
fn preset_to_args(preset: &SprayPreset) -> String {
    let c = preset.controls;
    let mut args = format!(
        "--spray {} --shape {} --pitch {} --mix {} --speed {}",
        c.spray, c.grain_shape, c.pitch, c.mix, c.loop_speed
    );
    if let Some(seed) = preset.seed {
        args.push_str(&format!(" --seed {seed}"));
    }
    args
}
