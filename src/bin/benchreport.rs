use std::{env, process};

use benchreport::{cli::CommandLineConfig, report, results};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let results = match results::load_results(&config.results_file) {
        Ok(r) => r,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    match report::generate_report(&results, config.format()) {
        Ok(body) => println!("{body}"),
        Err(err) => {
            eprintln!("report failed: {err}");
            process::exit(1);
        }
    }
}
