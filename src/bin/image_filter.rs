use distance_field::batch::filter_paths;
use distance_field::config::load_filter_config;
use distance_field::io::write_json_file;
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
    let config = load_filter_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let report = filter_paths(&config.inputs, config.filter);
    println!(
        "Applied {} to {} of {} images",
        config.filter.label(),
        report.written.len(),
        config.inputs.len()
    );
    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.input.display(), skipped.reason);
    }
    if let Some(path) = &config.report {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
    }
    if !report.all_succeeded() {
        return Err(format!(
            "{} of {} inputs skipped",
            report.skipped.len(),
            config.inputs.len()
        ));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: image_filter <config.json>".to_string()
}
