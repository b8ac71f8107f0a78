use std::io::{self, BufRead, Write};
use std::{env, process::exit};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let filename = match env::args().nth(1) {
        Some(filename) => filename,
        None => prompt_for_filename().unwrap_or_else(|err| fail(&err)),
    };

    let lot = lot::load_file(filename.trim()).unwrap_or_else(|err| fail(&err));

    println!("Total number of parkable spots (capacity): {}", lot.total_capacity());
    println!("Number of cars currently parked in the lot: {}", lot.total_occupancy());
    print!("{}", lot.render());
}

fn prompt_for_filename() -> io::Result<String> {
    print!("Please enter the name of the file to process: ");
    io::stdout().flush()?;
    let mut filename = String::new();
    io::stdin().lock().read_line(&mut filename)?;
    Ok(filename)
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("{err}");
    exit(1);
}
