use distance_field::align::{analyze, Compensation};
use distance_field::config::load_align_config;
use distance_field::io::{load_color_image, write_json_file};
use log::warn;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_align_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let opts = config.analysis;

    let start = load_color_image(&config.start).map_err(|e| e.to_string())?;
    let end = load_color_image(&config.end).map_err(|e| e.to_string())?;
    let from = analyze(&start, opts.threshold, opts.channel);
    let to = analyze(&end, opts.threshold, opts.channel);
    for (record, path) in [(&from, &config.start), (&to, &config.end)] {
        if record.is_degenerate() {
            warn!("{}: no pixel above threshold, using defaults", path.display());
        }
    }

    let compensation = Compensation::between(from, to);
    let json = serde_json::to_string_pretty(&compensation).map_err(|e| e.to_string())?;
    println!("{json}");
    if let Some(path) = &config.output {
        write_json_file(path, &compensation).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: shape_align <config.json>".to_string()
}
