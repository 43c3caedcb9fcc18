use std::fs;
use std::path::PathBuf;

use clap::Parser;

use micron::Config;

#[derive(Parser)]
#[command(name = "micron")]
#[command(about = "Convert Markdown files to Micron pages")]
struct Cli {
    /// Input Markdown file, or a content directory for a full site build
    input: PathBuf,

    /// Output file (single file mode) or directory (site mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "micron.toml")]
    config: PathBuf,

    /// Cache lifetime in seconds, prefixed as a directive line
    #[arg(long)]
    cache: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config);
    if let Some(seconds) = cli.cache {
        config.cache.seconds = Some(seconds);
    }

    if cli.input.is_dir() {
        config.paths.content = cli.input;
        if let Some(output) = cli.output {
            config.paths.output = output;
        }
        match micron::build_site(&config) {
            Ok(summary) => println!(
                "Wrote {} pages to {}",
                summary.pages_written,
                config.paths.output.display()
            ),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Single file conversion
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let mut converted = match config.cache.seconds {
        Some(seconds) => micron::convert_with_directive(&markdown, seconds),
        None => micron::convert(&markdown),
    };
    converted.push('\n');

    let output = cli.output.unwrap_or_else(|| cli.input.with_extension("mu"));
    if let Err(e) = fs::write(&output, converted) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
