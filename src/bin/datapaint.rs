use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "datapaint", version)]
struct Cli {
    /// Input CSV (first line is the header).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "abstract_expressive.png")]
    out: PathBuf,

    /// Render settings JSON; flags below override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Field naming each row's shape.
    #[arg(long)]
    shape_field: Option<String>,

    /// Field ordering the rows.
    #[arg(long)]
    order_field: Option<String>,

    /// Print the derived palette and per-shape row counts.
    #[arg(long)]
    dump_palette: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let dataset = datapaint::read_csv_path(&cli.in_path)
        .with_context(|| format!("read csv '{}'", cli.in_path.display()))?;

    if cli.dump_palette {
        dump_palette(&dataset);
    }

    let (canvas, stats) = datapaint::render_painting_with_stats(&dataset, &settings)
        .with_context(|| "render painting")?;

    if cli.dump_palette {
        eprintln!("rows per shape:");
        for kind in datapaint::ShapeKind::ALL {
            eprintln!("  {:<9} {}", kind.as_str(), stats.rows_of(kind));
        }
        eprintln!("marks: {}", stats.marks);
    }

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &cli.out,
        &canvas.data,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn load_settings(cli: &Cli) -> anyhow::Result<datapaint::RenderSettings> {
    let mut settings = match &cli.settings {
        Some(path) => datapaint::RenderSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => datapaint::RenderSettings::default(),
    };

    if let Some(w) = cli.width {
        settings.canvas.width = w;
    }
    if let Some(h) = cli.height {
        settings.canvas.height = h;
    }
    if let Some(f) = &cli.shape_field {
        settings.shape_field = f.clone();
    }
    if let Some(f) = &cli.order_field {
        settings.order_field = f.clone();
    }
    settings.validate()?;
    Ok(settings)
}

fn dump_palette(dataset: &datapaint::Dataset) {
    let palette = datapaint::Palette::from_source_text(&dataset.source_text);
    eprintln!("palette (base hue {}):", palette.base_hue());
    for (i, c) in palette.colors().iter().enumerate() {
        eprintln!("  {i}: #{:02x}{:02x}{:02x}", c.r, c.g, c.b);
    }
}
