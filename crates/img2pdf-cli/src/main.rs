use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Assemble images into a single PDF", version)]
struct Cli {
    /// Input image files (JPEG or PNG), in page order
    #[arg(required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Page size applied to every page
    #[arg(long, default_value = "a4", value_enum)]
    page_size: PageSizeArg,

    /// Re-encode images as JPEG to reduce the output size
    #[arg(long)]
    compress: bool,

    /// JPEG quality used with --compress, over (0, 1]
    #[arg(long, default_value = "0.7")]
    quality: f32,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
    Legal,
}

impl From<PageSizeArg> for img2pdf::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::Legal => Self::Legal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = img2pdf::ConvertOptions {
        input_files: cli.input.clone(),
        page_size: cli.page_size.into(),
        compression: img2pdf::CompressionSettings {
            enabled: cli.compress,
            quality: cli.quality,
        },
    };
    options.validate()?;

    let images = img2pdf::load_images(&cli.input).await?;
    let output = img2pdf::convert_images(&images, &options).await?;

    for skipped in &output.skipped {
        eprintln!(
            "WARNING: skipped {} (unsupported format)",
            skipped.display_name
        );
    }

    img2pdf::save_pdf(&output.bytes, &cli.output).await?;
    println!("{} pages → {}", output.page_count, cli.output.display());

    Ok(())
}
