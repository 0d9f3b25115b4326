use std::{env, fs::read_to_string, path::PathBuf, process, rc::Rc, time::Instant};

use hl_checker::{
    artifacts::artifacts::{write_artifacts, ArtifactPaths},
    format_error,
    lexer::lexer::tokenize,
    normalizer::normalizer::normalize,
    validator::{result::ValidationResult, validator::validate},
    CheckReport,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("hlcheck");
        eprintln!("Usage: {} <source_file.hl>", program);
        process::exit(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args[1].clone());

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!("ERROR: Source file '{}' not found.", args[1]);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let clean = normalize(&file_contents);
    eprintln!("Normalized in {:?}", start.elapsed());

    let tokenize_start = Instant::now();
    let tokens = tokenize(&clean, Some(file_name.clone()));
    eprintln!("Tokenized in {:?}", tokenize_start.elapsed());

    let validate_start = Instant::now();
    let (_, outcome) = validate(tokens.clone(), Rc::new(file_name));
    eprintln!("Validated in {:?}", validate_start.elapsed());

    let report = CheckReport::new(clean, tokens, ValidationResult::from(&outcome));

    if let Err(error) = write_artifacts(&report, &ArtifactPaths::default()) {
        eprintln!("ERROR: Failed to write artifacts: {}", error);
        process::exit(2);
    }

    eprintln!("Total time: {:?}", start.elapsed());

    println!("{}", report.result.message());

    if let Some(error) = &report.result.error {
        print!("{}", format_error(error, &report.clean));
        process::exit(1);
    }
}
