use clap::Parser;
use cpp_classgen::interface::{print_generated_files, ClassgenCli};
use cpp_classgen::{generate_from_config, Error};
use std::process;

/// Exit status for invocations the tool could not understand
const USAGE_EXIT_CODE: i32 = 2;
/// Exit status for failures during generation
const FAILURE_EXIT_CODE: i32 = 1;

fn main() {
    // clap prints usage and exits with 2 on bad arguments, 0 on --help
    let cli = ClassgenCli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if e.is_usage() {
            eprintln!("Try \"classgen --help\".");
            process::exit(USAGE_EXIT_CODE);
        }
        process::exit(FAILURE_EXIT_CODE);
    }
}

fn run(cli: &ClassgenCli) -> Result<(), Error> {
    let config = cli.resolve_config()?;
    let outcome = generate_from_config(&config)?;

    let files: Vec<String> = outcome
        .written_files
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    print_generated_files(&config.output_path, &files);

    Ok(())
}
