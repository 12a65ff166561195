use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use extractor::records::read_records;
use extractor::report::{render_entry, save_report};
use extractor::{Config, Error, Extractor};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> extractor::Result<()> {
    let extractor = Extractor::new(config)?;

    // Párrafo suelto: se imprime el resultado
    if let Some(ref text) = config.text {
        let entry = extractor.extract(text)?;
        print!("{}", render_entry(&entry));
        return Ok(());
    }

    let input_file = config.input_file.as_ref().ok_or(Error::MissingInput)?;
    let records = read_records(input_file)?;
    info!(records = records.len(), path = %input_file.display(), "registros leídos");

    let entries = extractor.process(records);
    save_report(&config.output_file, &entries, config.format)?;

    println!(
        "Все записи сохранены в файл {}",
        config.output_file.display()
    );
    Ok(())
}

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    init_tracing(config.verbose);

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
