use argh::FromArgs;
use log::info;
use std::path::PathBuf;

use pixfx::image::Color;
use pixfx::imgproc::{compare, FilterEngine};
use pixfx::io::functional as F;

#[derive(FromArgs)]
/// Render a filtered image left of a divider and the original right of it
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// the filter to apply
    #[argh(option, short = 'f', default = "String::from(\"ShowBorders\")")]
    filter: String,

    /// divider position in view pixels
    #[argh(option, short = 'd')]
    divider: Option<usize>,

    /// width of the view the divider is expressed in, defaults to the image width
    #[argh(option)]
    view_width: Option<usize>,

    /// do not draw the red divider line
    #[argh(switch)]
    no_line: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let original = F::read_image_any_rgb8(&args.image_path)?;
    let filtered = FilterEngine::new().apply(&original, &args.filter)?;

    let view_width = args.view_width.unwrap_or(original.width());
    let divider = args.divider.unwrap_or(view_width / 2);
    let divider_x = compare::divider_to_image_x(divider, view_width, original.width());
    info!("divider at {divider} of {view_width} view pixels, image column {divider_x}");

    let line = (!args.no_line).then_some(Color::RED);
    let split = compare::compose_split(&original, &filtered, divider_x, line)?;

    F::write_image_rgb8(&args.output_path, &split)?;
    info!("saved {}", args.output_path.display());

    Ok(())
}
