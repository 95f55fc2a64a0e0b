use clap::{Parser, Subcommand};
use std::io::{BufRead, IsTerminal, Write};
use unit_converter::command::{self, CommandExecutor, Outcome};
use unit_converter::config::Config;
use unit_converter::convert::{parse_quantity, Unit};
use unit_converter::form::{apply_script_from_file, ConverterForm, FormView};

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(about = "Length, temperature and liquid volume converter form", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the form
    Show {
        /// Commit before rendering (e.g., "inches=12"); repeatable
        #[arg(short, long = "set")]
        set: Vec<String>,
    },

    /// Convert a value and print its section
    Convert {
        /// Value to commit (e.g., "12", "-40", "1,200"), or a whole quantity ("12 in")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit of the value (e.g., "in", "celsius", "gal")
        unit: Option<String>,

        /// Print the section as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a commit script and render the form
    Run {
        /// Script path (one commit per line)
        script: String,
    },

    /// Read commands from stdin, one per line
    Interactive,

    /// List units and accepted names
    Units,

    /// Export the form as JSON
    Export {
        /// Commit script to apply first
        #[arg(short, long)]
        script: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Show { set } => show_form(&config, &set),
        Commands::Convert { value, unit, json } => {
            convert_value(&config, &value, unit.as_deref(), json)
        }
        Commands::Run { script } => run_script(&config, &script),
        Commands::Interactive => interactive(&config),
        Commands::Units => {
            print!("{}", command::format_units());
            Ok(())
        }
        Commands::Export { script, output } => {
            export_form(&config, script.as_deref(), output.as_deref())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,unit_converter=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path, e).into()),
        None => Ok(Config::empty()),
    }
}

fn show_form(config: &Config, commits: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ConverterForm::from_config(config);

    for commit in commits {
        let (unit, text) = commit
            .split_once('=')
            .ok_or_else(|| format!("Expected unit=value, got '{}'", commit))?;
        let unit = unit.trim().parse::<Unit>()?;
        form.commit_text(unit, text)?;
    }

    print!("{}", FormView::new(&form, config).render());
    Ok(())
}

fn convert_value(
    config: &Config,
    value: &str,
    unit: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ConverterForm::from_config(config);
    let changed = match unit {
        Some(unit) => form.commit_text(unit.parse::<Unit>()?, value)?,
        None => {
            let quantity = parse_quantity(value, form.formatter())?;
            form.commit_quantity(quantity)?
        }
    };

    if json {
        let section = form.section_snapshot(changed);
        println!("{}", command::format_section(&section)?);
    } else {
        print!("{}", FormView::new(&form, config).render_section(changed));
    }
    Ok(())
}

fn run_script(config: &Config, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ConverterForm::from_config(config);
    let validation = apply_script_from_file(&mut form, script)?;

    // Print validation issues if any
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    print!("{}", FormView::new(&form, config).render());

    if !validation.is_valid() {
        return Err(format!("{} line(s) failed", validation.errors.len()).into());
    }
    Ok(())
}

fn interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ConverterForm::from_config(config);
    let mut executor = CommandExecutor::new(&mut form, config);

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();

    if prompt {
        println!("{}", FormView::new(executor.form(), config).render());
        println!("Type 'help' for commands.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            stdout.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match executor.execute_line(&line) {
            Ok(Some(Outcome::Output(text))) => print!("{}", text),
            Ok(Some(Outcome::Quit)) => break,
            Ok(None) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn export_form(
    config: &Config,
    script: Option<&str>,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = ConverterForm::from_config(config);

    if let Some(script) = script {
        let validation = apply_script_from_file(&mut form, script)?;
        if validation.has_issues() {
            eprintln!("{}", validation);
        }
    }

    let json = command::format_snapshot(&form.snapshot(config))?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Form exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
