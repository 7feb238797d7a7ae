//! Command line renderer of GeoJSON files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use geopaint::canvas::Canvas;
use geopaint::feature::load_features;
use geopaint::{RenderOptions, Renderer, StyleTable};
use log::LevelFilter;

/// Renders a GeoJSON file into a PNG image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// GeoJSON file to render.
    #[arg(long, default_value = "map.geojson")]
    path: PathBuf,

    /// Style configuration. If the file does not exist, default styles are used.
    #[arg(long, default_value = "style.yml")]
    style: PathBuf,

    /// Output PNG file.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Render options YAML file.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Width of the image in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Height of the image in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// More output per occurrence.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Less output per occurrence.
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    fn log_level_filter(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.quiet) {
            i16::MIN..=-3 => LevelFilter::Off,
            -2 => LevelFilter::Error,
            -1 => LevelFilter::Warn,
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            2..=i16::MAX => LevelFilter::Trace,
        }
    }

    fn render_options(&self) -> Result<RenderOptions> {
        let mut options = match &self.options {
            Some(path) => RenderOptions::load(path)
                .with_context(|| format!("failed to read render options from {}", path.display()))?,
            None => RenderOptions::default(),
        };

        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }

        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level_filter())
        .format_timestamp(None)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    println!("{}", cli.path.display());

    let options = cli.render_options()?;
    let style = StyleTable::load(&cli.style)
        .with_context(|| format!("failed to load style from {}", cli.style.display()))?;
    let features = load_features(&cli.path)
        .with_context(|| format!("failed to read features from {}", cli.path.display()))?;

    let mut canvas = Renderer::new(&style, &options)
        .render_image(&features)
        .context("failed to render features")?;
    let png = canvas.export().context("failed to encode image")?;
    std::fs::write(&cli.output, png)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    log::info!("Image saved to {}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [40, 0], [40, 40], [0, 0]]]},
         "properties": {"admin_level": "2"}}
    ]}"#;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["geopaint"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("map.geojson"));
        assert_eq!(cli.style, PathBuf::from("style.yml"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.log_level_filter(), LevelFilter::Info);

        let options = cli.render_options().unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn verbosity() {
        let cli = Cli::try_parse_from(["geopaint", "-vv"]).unwrap();
        assert_eq!(cli.log_level_filter(), LevelFilter::Trace);

        let cli = Cli::try_parse_from(["geopaint", "-q"]).unwrap();
        assert_eq!(cli.log_level_filter(), LevelFilter::Warn);

        assert!(Cli::try_parse_from(["geopaint", "-v", "-q"]).is_err());
    }

    #[test]
    fn size_overrides_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let options_path = dir.path().join("options.yml");
        std::fs::write(&options_path, "width: 100\nheight: 50\noffset: 0\n").unwrap();

        let cli = Cli::try_parse_from([
            "geopaint",
            "--options",
            options_path.to_str().unwrap(),
            "--height",
            "70",
        ])
        .unwrap();
        let options = cli.render_options().unwrap();
        assert_eq!((options.width, options.height, options.offset), (100, 70, 0.0));
    }

    #[test]
    fn renders_file() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("map.geojson");
        let output = dir.path().join("out.png");
        std::fs::write(&map, MAP).unwrap();

        let cli = Cli::try_parse_from([
            "geopaint",
            "--path",
            map.to_str().unwrap(),
            "--style",
            dir.path().join("missing.yml").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--width",
            "600",
            "--height",
            "400",
        ])
        .unwrap();
        run(&cli).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "geopaint",
            "--path",
            dir.path().join("nothing.geojson").to_str().unwrap(),
            "--output",
            dir.path().join("out.png").to_str().unwrap(),
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().starts_with("failed to read features"));
    }
}
