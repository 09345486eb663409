//! Command-line interface for batch layout of image directories

use crate::io::configuration::{OUTPUT_SUFFIX, PREVIEW_CROP_MARGIN, PREVIEW_SUFFIX};
use crate::io::discovery::discover_images;
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::io::plan::PlacementPlan;
use crate::io::preview::export_preview;
use crate::io::progress::ProgressManager;
use crate::io::settings::LayoutSettings;
use clap::Parser;
use log::{LevelFilter, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "heartcollage")]
#[command(
    author,
    version,
    about = "Lay out image directories as heart-shaped collages"
)]
/// Command-line arguments for the layout tool
pub struct Cli {
    /// Directories of images to lay out (one plan per directory)
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<PathBuf>,

    /// Number of points to place instead of the discovered image count
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Canvas width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Footprint side length in pixels
    #[arg(short, long)]
    pub footprint: Option<u32>,

    /// Maximum overlap between footprints, in percent
    #[arg(short = 'o', long)]
    pub max_overlap: Option<f64>,

    /// Random seed for reproducible layouts
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Cap on candidate scans before relaxing the overlap bound
    #[arg(long)]
    pub max_scans: Option<usize>,

    /// JSON settings file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write a PNG preview of the layout
    #[arg(short, long)]
    pub preview: bool,

    /// Process targets even if a plan already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level
    #[arg(short, long, value_name = "[off, error, warn, info, debug, trace]")]
    pub log_level: Option<LevelFilter>,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Merge the optional settings file with command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded
    pub fn settings(&self) -> Result<LayoutSettings> {
        let mut settings = match &self.config {
            Some(path) => LayoutSettings::from_json_file(path)?,
            None => LayoutSettings::default(),
        };

        if let Some(width) = self.width {
            settings.canvas.width = width;
        }
        if let Some(height) = self.height {
            settings.canvas.height = height;
        }
        if let Some(footprint) = self.footprint {
            settings.footprint_size = footprint;
        }
        if let Some(max_overlap) = self.max_overlap {
            settings.max_overlap_percent = max_overlap;
        }
        if self.max_scans.is_some() {
            settings.max_candidate_scans = self.max_scans;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        Ok(settings)
    }
}

/// Orchestrates batch layout of image directories with progress tracking
pub struct TargetProcessor {
    cli: Cli,
    settings: LayoutSettings,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl TargetProcessor {
    /// Create a processor, resolving settings and seeding the random source
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded
    pub fn new(cli: Cli) -> Result<Self> {
        let settings = cli.settings()?;
        let seed = settings.seed.unwrap_or_else(|| rand::rng().next_u64());
        info!("Using seed {seed}");

        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            settings,
            rng: StdRng::seed_from_u64(seed),
            progress_manager,
        })
    }

    /// Process targets according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, layout or output fails
    pub fn process(&mut self) -> Result<()> {
        let targets = self.collect_targets()?;

        if targets.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(targets.len());
        }

        for target in &targets {
            self.process_target(target)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_targets(&self) -> Result<Vec<PathBuf>> {
        let mut targets = Vec::new();
        for target in &self.cli.targets {
            if !target.is_dir() {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a directory of images",
                ));
            }
            if self.should_process_target(target) {
                targets.push(target.clone());
            }
        }
        Ok(targets)
    }

    fn should_process_target(&self, target: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = plan_path(target);
        if output_path.exists() {
            info!("Skipping: {} (plan exists)", target.display());
            false
        } else {
            true
        }
    }

    /// Lay out one directory and write its plan
    ///
    /// # Errors
    ///
    /// Returns an error if the count override is zero, the directory holds no
    /// images and no count was given, the settings are invalid, or the outputs
    /// cannot be written
    pub fn process_target(&mut self, target: &Path) -> Result<PlacementPlan> {
        let start_time = Instant::now();

        let mut files = discover_images(target)?;
        let count = match self.cli.count {
            Some(0) => {
                return Err(invalid_parameter("count", &0, &"must be positive"));
            }
            Some(count) => count,
            None if files.is_empty() => {
                return Err(CollageError::NoImages {
                    path: target.to_path_buf(),
                });
            }
            None => files.len(),
        };
        files.shuffle(&mut self.rng);

        let layout = self.settings.layout(count)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_target(target, count);
        }

        let progress_manager = self.progress_manager.as_ref();
        let selection = layout.place_with_progress(&mut self.rng, |progress| {
            if let Some(pm) = progress_manager {
                pm.update_selected(progress.selected);
            }
        });

        let plan = PlacementPlan::new(&files, &selection, layout.canvas(), layout.params());
        plan.write_json(plan_path(target))?;

        if self.cli.preview {
            export_preview(
                layout.mask(),
                &selection,
                layout.params().footprint_size,
                PREVIEW_CROP_MARGIN,
                &preview_path(target),
            )?;
        }

        if !plan.unplaced.is_empty() {
            warn!(
                "{}: {} images left without a position",
                target.display(),
                plan.unplaced.len()
            );
        }
        info!(
            "{}: placed {}/{} ({} relaxed) in {:.2?}",
            target.display(),
            plan.placed(),
            count,
            plan.fallback,
            start_time.elapsed()
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_target(plan.placed());
        }

        Ok(plan)
    }
}

fn output_stem(target: &Path) -> String {
    target
        .file_name()
        .map_or_else(|| "collage".to_string(), |name| name.to_string_lossy().to_string())
}

fn sibling_path(target: &Path, file_name: String) -> PathBuf {
    match target.parent() {
        Some(parent) if target.file_name().is_some() => parent.join(file_name),
        _ => target.join(file_name),
    }
}

/// Plan file written for a target directory
pub fn plan_path(target: &Path) -> PathBuf {
    sibling_path(
        target,
        format!("{}{OUTPUT_SUFFIX}.json", output_stem(target)),
    )
}

/// Preview image written for a target directory
pub fn preview_path(target: &Path) -> PathBuf {
    sibling_path(
        target,
        format!("{}{OUTPUT_SUFFIX}{PREVIEW_SUFFIX}.png", output_stem(target)),
    )
}
