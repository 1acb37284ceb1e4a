//! hanziart CLI - Convert an image into rows of stroke-count-matched hanzi

use clap::Parser;
use hanziart::{render, Converter, HanziartError, StrokeTable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hanziart", about = "Convert image to hanziart")]
struct Args {
    /// Image to convert into text
    #[arg(short, long)]
    image: PathBuf,
    /// Width of output text block
    #[arg(short, long, default_value = "80")]
    width: u32,
    /// Levels of intensity to use, recommended < 30
    #[arg(short, long, default_value = "20")]
    levels: u32,
    /// Color image
    #[arg(short, long, default_value = "true", action = clap::ArgAction::Set)]
    color: bool,
    /// Invert pixel values before quantizing
    #[arg(short, long)]
    negative: bool,
    /// Name of output file
    #[arg(short, long, default_value = "hanziart_test.txt")]
    out: PathBuf,
    /// Path to Unihan_DictionaryLikeData.txt
    #[arg(short, long, default_value = "./Unihan_DictionaryLikeData.txt")]
    dict: PathBuf,
    /// Highest Hong Kong grade level to allow; values outside 1-6 disable the filter
    #[arg(short, long, default_value = "6")]
    grade: u32,
    /// Seed for reproducible character selection
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), HanziartError> {
    let args = Args::parse();

    println!("... Reading image from file {}", args.image.display());
    let image = image::open(&args.image)?;

    println!("... Loading Unihan data from file {}", args.dict.display());
    let table = StrokeTable::load(&args.dict, args.grade)?;

    let mut converter = Converter::new(table)
        .with_width(args.width)
        .with_levels(args.levels)
        .with_color(args.color)
        .with_negative(args.negative);
    if let Some(seed) = args.seed {
        converter = converter.with_seed(seed);
    }
    let grid = converter.convert(&image)?;

    println!("... Writing output to file {}", args.out.display());
    render::write_grid(&grid, &args.out)?;
    Ok(())
}
