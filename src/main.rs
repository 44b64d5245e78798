use sdef_reader::{SdefParser, TermCollector};
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-sdef-file>", args[0]);
        std::process::exit(1);
    }

    let sdef_path = &args[1];
    println!("Reading sdef file: {}", sdef_path);
    println!("{}", "=".repeat(60));

    let bytes = match fs::read(sdef_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", sdef_path, e);
            std::process::exit(1);
        }
    };

    let mut terms = TermCollector::default();
    if let Err(e) = SdefParser::new(&mut terms).parse(&bytes) {
        eprintln!("\nERROR: Failed to parse sdef file");
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    println!("\nStatistics:");
    println!("  Types: {}", terms.types.len());
    println!("  Classes: {}", terms.classes.len());
    println!("  Properties: {}", terms.properties.len());
    println!("  Enumerators: {}", terms.enumerators.len());
    println!("  Commands: {}", terms.commands.len());

    println!("\nSample Classes (first 10):");
    for (i, class) in terms.classes.iter().take(10).enumerate() {
        println!("  {}. {} (plural: {})", i + 1, class, class.plural_name);
    }
    if terms.classes.len() > 10 {
        println!("  ... and {} more", terms.classes.len() - 10);
    }

    println!("\nSample Commands (first 10):");
    for (i, command) in terms.commands.iter().take(10).enumerate() {
        println!("  {}. {}", i + 1, command);
    }
    if terms.commands.len() > 10 {
        println!("  ... and {} more", terms.commands.len() - 10);
    }
}
