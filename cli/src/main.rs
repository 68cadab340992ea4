//! handover-pdf CLI - generates the handover guide PDF
//!
//! Zero-argument, one-shot invocation: composes the static guide content
//! and writes `docs/AI-service-handover.pdf` relative to the working
//! directory, creating the directory if needed.

use colored::Colorize;

fn main() {
    env_logger::init();

    match handover_pdf::generate() {
        Ok(path) => {
            println!("{} {}", "PDF generated at".green(), path.display());
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
