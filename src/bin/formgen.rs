use clap::{Parser, Subcommand};
use formgen::{parse_form_definition, render_form, FormError, FormGenerator, SamplePage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formgen")]
#[command(about = "Render HTML forms from YAML form definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render form definitions to stdout
    Render {
        /// Path(s) to .yaml form definitions
        files: Vec<PathBuf>,
    },
    /// Validate form definitions without rendering
    Check {
        /// Path(s) to .yaml form definitions
        files: Vec<PathBuf>,
    },
    /// Render the built-in sample page
    Demo,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Render { files } => run_each(&files, |path, content| {
            let page = render_form(content)?;
            tracing::info!(file = %path.display(), bytes = page.len(), "rendered");
            formgen::driver::write_page(&page, io::stdout().lock())?;
            println!();
            Ok(())
        }),
        Commands::Check { files } => run_each(&files, |path, content| {
            parse_form_definition(content)?.build()?;
            println!("✓ {} is valid", path.display());
            Ok(())
        }),
        Commands::Demo => match SamplePage::new().render() {
            Ok(page) => {
                println!("{}", page);
                0
            }
            Err(e) => {
                print_error(&e);
                1
            }
        },
    };

    process::exit(exit_code);
}

fn run_each<F>(files: &[PathBuf], mut action: F) -> i32
where
    F: FnMut(&Path, &str) -> Result<(), FormError>,
{
    if files.is_empty() {
        eprintln!("No form definition files given");
        return 1;
    }

    let mut exit_code = 0;
    for path in files {
        let result = fs::read_to_string(path)
            .map_err(|e| FormError::ValidationError(format!("Failed to read file: {}", e)))
            .and_then(|content| action(path, &content));
        if let Err(e) = result {
            eprintln!("✗ {} has errors:", path.display());
            print_error(&e);
            exit_code = 1;
        }
    }
    exit_code
}

fn print_error(error: &FormError) {
    match error {
        FormError::UnknownParameter { control, key } => {
            eprintln!("  Unknown parameter '{}' for control '{}'", key, control);
            eprintln!("    Remove it or move it to a control that understands it");
        }
        FormError::InvalidParameter {
            control,
            key,
            expected,
        } => {
            eprintln!("  Invalid parameter '{}' for control '{}':", key, control);
            eprintln!("    Expected {}", expected);
        }
        FormError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        FormError::ValidationError(msg) => {
            eprintln!("  Validation error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
