use std::io::{self, Write};
use std::path::Path;
use anyhow::Context;
use ethwall::{Progress, Wallpaper, Watermark};
use image::{GenericImageView, Rgb};
use log::{debug, info};
use crate::config::Config;

/// Prints `10%... 20%... ` on a single stdout line.
#[derive(Debug)]
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn report(&mut self, percent: u8) {
        print!("{}%... ", percent);
        if let Err(e) = io::stdout().flush() {
            debug!("Failed to flush progress output: {}", e);
        }
    }
}

pub(crate) struct Processor {
    config: Config
}

impl Processor {

    pub(crate) fn new(config: Config) -> Self {
        Processor {
            config
        }
    }

    pub(crate) fn process(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let image = image::open(input)
            .with_context(|| format!("Failed to open input image {}", input.display()))?;

        let (width, height) = image.dimensions();
        info!("Processing: {} ({}x{} pixels)", input.display(), width, height);

        let wallpaper = Wallpaper::new(self.config.options());
        let result = wallpaper.generate(&image, &mut ConsoleProgress);
        println!();
        let mut result = result.context("Failed to render wallpaper")?;

        // Font is loaded last, right before the stamp and the save.
        let watermark = &self.config.watermark;
        if watermark.enabled {
            Watermark::from_file(&watermark.font, watermark.text.as_str())?
                .with_opacity(watermark.opacity)
                .with_ratio(watermark.ratio)
                .with_color(Rgb(watermark.color))
                .draw(&mut result);
        }

        result.save(output)
            .with_context(|| format!("Failed to save output image {}", output.display()))?;
        info!("Saved {}x{} wallpaper to {}", result.width(), result.height(), output.display());
        Ok(())
    }
}
