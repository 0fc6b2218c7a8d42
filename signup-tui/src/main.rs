mod app;
mod paths;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

/// Input ids whose values are never echoed back.
const SECRET_FIELDS: [&str; 2] = ["password", "confirm_password"];

fn init_logging() {
    paths::rotate_logs();
    if let Ok(log_file) = File::create(paths::log_file()) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }
}

fn main() {
    init_logging();

    match app::run() {
        Ok(Some(submission)) => {
            println!("Cadastro enviado (#{}):", submission.form_id);
            for (name, value) in &submission.values {
                if SECRET_FIELDS.contains(&name.as_str()) {
                    println!("  {name}: {}", "•".repeat(value.chars().count()));
                } else {
                    println!("  {name}: {value}");
                }
            }
        }
        Ok(None) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
}
