//! Glitter-card viewer binary.

use shimmer::{Options, Viewer};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(base), Some(glitter)) = (args.next(), args.next()) else {
        log::error!("Usage: shimmer <base-image> <glitter-image> [options.toml]");
        std::process::exit(1);
    };

    let options = match args.next() {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder()
        .with_base_path(base)
        .with_glitter_path(glitter)
        .with_options(options)
        .build();

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
