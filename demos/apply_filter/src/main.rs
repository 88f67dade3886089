use argh::FromArgs;
use log::info;
use std::path::PathBuf;

use pixfx::imgproc::{parallel::ExecutionStrategy, FilterEngine, FilterKind, FilterRegistry};
use pixfx::io::functional as F;

#[derive(FromArgs)]
/// Apply a named filter to an image and save the result
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: Option<PathBuf>,

    /// path to the output image, the format follows the extension
    #[argh(option, short = 'o')]
    output_path: Option<PathBuf>,

    /// the filter to apply, several can be chained separated by commas
    #[argh(option, short = 'f', default = "String::from(\"Grayscale\")")]
    filter: String,

    /// number of worker threads, defaults to the global pool
    #[argh(option)]
    threads: Option<usize>,

    /// print the available filters and exit
    #[argh(switch)]
    list: bool,
}

/// Accept either the identifier or the menu label of a filter.
fn resolve(name: &str) -> Result<&'static str, Box<dyn std::error::Error>> {
    let kind = match name.parse::<FilterKind>() {
        Ok(kind) => kind,
        Err(_) => FilterKind::from_label(name)?,
    };
    Ok(kind.name())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    if args.list {
        for spec in FilterRegistry::global().iter() {
            println!("{:<16} {}", spec.name(), spec.kind.label());
        }
        return Ok(());
    }

    let (Some(image_path), Some(output_path)) = (args.image_path, args.output_path) else {
        return Err("both --image-path and --output-path are required".into());
    };

    let names = args
        .filter
        .split(',')
        .map(|name| resolve(name.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::ParallelRows,
    };
    let engine = FilterEngine::new().with_strategy(strategy);

    // read the image
    let image = F::read_image_any_rgb8(&image_path)?;
    info!("loaded {} from {}", image.size(), image_path.display());

    let start = std::time::Instant::now();
    let filtered = engine.apply_chain(&image, &names)?;
    info!("applied {} in {:?}", names.join(" -> "), start.elapsed());

    F::write_image_rgb8(&output_path, &filtered)?;
    info!("saved {}", output_path.display());

    Ok(())
}
