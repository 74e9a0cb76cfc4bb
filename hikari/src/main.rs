use clap::Parser;
use hikari::{
    app::{headless, RenderSettings},
    expect,
    scene::BuiltinScene,
    hikari_info, hikari_warn,
};

use std::path::PathBuf;

/// Headless wavefront path tracer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file to read render settings from
    #[arg(long, short = 's', value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Built-in scene to render
    #[arg(long)]
    scene: Option<BuiltinScene>,

    /// Number of iterations to accumulate
    #[arg(long, short = 'i', value_name = "NUM")]
    iterations: Option<u32>,

    /// Directory to write the outputs into
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Denoise the final image
    #[arg(long)]
    denoise: bool,

    /// Most verbose log level to print
    #[arg(long, value_name = "LEVEL", default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

fn thread_count(requested: Option<usize>) -> usize {
    let max_threads = num_cpus::get();
    match requested {
        None => max_threads,
        Some(0) => {
            hikari_warn!("Invalid thread count 0, using 1");
            1
        }
        Some(n) if n > max_threads => {
            hikari_warn!("Thread count {} > max logical CPUs {}", n, max_threads);
            max_threads
        }
        Some(n) => n,
    }
}

fn main() {
    let args = Args::parse();

    if let Err(why) = setup_logger(args.log_level) {
        panic!("{}", why);
    };

    let mut settings = match &args.settings {
        Some(path) => expect!(RenderSettings::load(path), "Failed to load settings"),
        None => RenderSettings::default(),
    };
    if let Some(scene) = args.scene {
        settings.scene = scene;
    }
    if let Some(iterations) = args.iterations {
        settings.iterations = iterations;
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = dir;
    }
    if args.denoise {
        settings.denoise.enabled = true;
    }

    let threads = thread_count(settings.threads);
    expect!(
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global(),
        "Failed to create thread pool"
    );
    hikari_info!("Rendering on {} threads", threads);

    let outputs = expect!(headless::render(&settings), "Render failed");
    hikari_info!(
        "Render finished in {:.2}s, image at '{}'",
        outputs.secs,
        outputs.image.to_string_lossy()
    );
}
