//! File-based spray rendering command.

use super::common::{ControlArgs, load_preset};
use anyhow::Context;
use clap::Args;
use granula_config::SprayPreset;
use granula_core::{Effect, linear_to_db};
use granula_io::{StereoSamples, WavSpec, read_wav_stereo, write_wav_stereo};
use granula_spray::SprayEffect;
use granula_spray::effect::DEFAULT_LOOP_SECONDS;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or TOML file; flags below override its values
    #[arg(short, long)]
    preset: Option<String>,

    #[command(flatten)]
    controls: ControlArgs,

    /// Seed for grain placement and pitch draws
    #[arg(long)]
    seed: Option<u32>,

    /// Length of the capture loop in seconds
    #[arg(long, default_value_t = DEFAULT_LOOP_SECONDS)]
    loop_seconds: f32,

    /// Seconds of silence appended so trailing grains can ring out
    #[arg(long, default_value_t = 0.0)]
    tail: f32,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

impl ProcessArgs {
    fn check(&self) -> anyhow::Result<()> {
        if self.block_size == 0 {
            anyhow::bail!("--block-size must be at least 1");
        }
        if !matches!(self.bit_depth, 16 | 24 | 32) {
            anyhow::bail!("--bit-depth must be 16, 24, or 32, got {}", self.bit_depth);
        }
        if !(self.loop_seconds.is_finite() && self.loop_seconds > 0.0) {
            anyhow::bail!("--loop-seconds must be positive, got {}", self.loop_seconds);
        }
        if !(self.tail.is_finite() && self.tail >= 0.0) {
            anyhow::bail!("--tail must be zero or positive, got {}", self.tail);
        }
        Ok(())
    }

    /// The preset (or defaults) with every command-line override applied.
    fn resolve_preset(&self) -> anyhow::Result<SprayPreset> {
        let mut preset = match &self.preset {
            Some(name) => load_preset(name)?,
            None => SprayPreset::default(),
        };
        self.controls.apply_to(&mut preset.controls)?;
        if let Some(seed) = self.seed {
            preset.seed = Some(seed);
        }
        Ok(preset)
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    args.check()?;
    let preset = args.resolve_preset()?;

    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let sample_rate = spec.sample_rate as f32;
    println!(
        "  {} frames, {} ch, {} Hz, {:.2}s",
        samples.len(),
        spec.channels,
        spec.sample_rate,
        samples.duration_secs(spec.sample_rate)
    );
    let input_levels = Levels::of(&samples);

    let tail_frames = (args.tail * sample_rate).round() as usize;
    samples.pad(tail_frames);

    let mut effect = SprayEffect::with_loop_seconds(sample_rate, args.loop_seconds);
    if let Some(seed) = preset.seed {
        effect = effect.with_seed(seed);
    }
    preset.apply(&mut effect);
    effect.reset();

    let controls = preset.controls;
    println!(
        "Spraying with '{}': spray {:.0}%, shape {:.0}%, pitch {:.0}%, mix {:.0}%, speed {:.2}x",
        preset.name,
        controls.spray,
        controls.grain_shape,
        controls.pitch,
        controls.mix,
        controls.loop_speed
    );
    tracing::debug!(
        seed = ?preset.seed,
        loop_seconds = args.loop_seconds,
        block_size = args.block_size,
        tail_frames,
        "render setup"
    );

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let total = samples.len();
    let block_size = args.block_size;
    for (i, (left, right)) in samples
        .left
        .chunks_mut(block_size)
        .zip(samples.right.chunks_mut(block_size))
        .enumerate()
    {
        effect.process_block_stereo(left, right);
        pb.set_position(((i + 1) * block_size).min(total) as u64);
    }

    pb.finish_with_message("done");

    let output_levels = Levels::of(&samples);
    let stats = effect.stats();

    println!("\nStats:");
    println!("  Input:  {input_levels}");
    println!("  Output: {output_levels}");
    println!("  Grains: {} spawned, {} dropped", stats.spawned, stats.dropped);

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &samples, out_spec)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    tracing::info!(
        output = %args.output.display(),
        frames = samples.len(),
        spawned = stats.spawned,
        "render complete"
    );
    println!("Done!");

    Ok(())
}

/// RMS and peak of a buffer, for the summary.
struct Levels {
    rms: f32,
    peak: f32,
}

impl Levels {
    fn of(samples: &StereoSamples) -> Self {
        Self {
            rms: samples.rms(),
            peak: samples.peak(),
        }
    }
}

impl std::fmt::Display for Levels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RMS {:.1} dB, Peak {:.1} dB",
            linear_to_db(self.rms),
            linear_to_db(self.peak)
        )
    }
}
