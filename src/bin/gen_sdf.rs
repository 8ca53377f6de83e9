use distance_field::batch::{generate_for_paths, FieldKind};
use distance_field::config::parse_generate_args;
use distance_field::io::write_json_file;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_generate_args(env::args().skip(1)).map_err(|e| format!("{e}\n{}", usage()))?;
    let report = generate_for_paths(&args.inputs, FieldKind::Signed, &args.config.options);

    for path in &report.written {
        println!("Saved signed distance field to {}", path.display());
    }
    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.input.display(), skipped.reason);
    }
    if let Some(path) = &args.config.report {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
    }
    if !report.all_succeeded() {
        return Err(format!(
            "{} of {} inputs skipped",
            report.skipped.len(),
            args.inputs.len()
        ));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: gen_sdf [--config <config.json>] <image>...".to_string()
}
