use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use fontsheet::config::EncodeConfig;
use fontsheet::encode::encode_image;
use fontsheet::emit;
use fontsheet::types::{Channel, EncodeOptions, Mode, Threshold};

mod load;

/// Convert a PNG font sheet (16x16 grid of 256 glyphs) into a C array
#[derive(Parser)]
#[command(name = "png2c", version)]
struct Args {
    /// Input PNG image with a 16x16 matrix of 256 adjacent characters
    #[arg(value_name = "png_filepath")]
    filename: PathBuf,

    /// Produce the columns of the chars instead of their rows
    #[arg(short, long)]
    columns: bool,

    /// Minimum sample value counted as a set pixel
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Image channel used as the pixel sample
    #[arg(long, value_enum)]
    channel: Option<ChannelArg>,

    /// Fail when the image size is not a multiple of 16
    #[arg(long)]
    strict: bool,

    /// TOML file with default options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the array to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChannelArg {
    Green,
    Luma,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Green => Channel::Green,
            ChannelArg::Luma => Channel::Luma,
        }
    }
}

/// Merge the optional config file with the command-line flags.
fn resolve_options(args: &Args) -> Result<EncodeOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            EncodeConfig::from_toml(&toml_str)
                .with_context(|| format!("parsing options from {}", path.display()))?
                .resolve()
        }
        None => EncodeOptions::default(),
    };

    if args.columns {
        options.mode = Mode::Column;
    }
    if let Some(level) = args.threshold {
        options.threshold = Threshold(level);
    }
    if let Some(channel) = args.channel {
        options.channel = channel.into();
    }
    if args.strict {
        options.strict = true;
    }
    Ok(options)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = resolve_options(&args)?;

    let sheet = load::load_sheet(&args.filename, options.channel)?;
    info!(
        "decoded {} ({}x{}), encoding {}s",
        args.filename.display(),
        sheet.width,
        sheet.height,
        options.mode
    );

    let font = encode_image(&sheet, &options)
        .with_context(|| format!("encoding {}", args.filename.display()))?;
    drop(sheet);
    let source = emit::to_c_source(&font);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &source).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} to {}", font.array_name(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .context("writing to stdout")?;
            stdout.flush().context("writing to stdout")?;
        }
    }
    Ok(())
}
