use std::io::{self, BufRead, Write};

use clap::Parser;

use truthtable_rs::TruthTable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Formula to tabulate. Reads formulas interactively when omitted.
    #[arg(value_name = "FORMULA")]
    formula: Option<String>,

    /// Log level for the library's debug output.
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

/// Tabulate one formula, printing either the table or the error message.
/// A failed formula never affects the next one.
fn tabulate(input: &str) {
    match truthtable_rs::parse(input) {
        Ok(expr) => {
            println!("formula: {}", expr);
            print!("{}", TruthTable::build(&expr));
        }
        Err(e) => println!("error: {}", e),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if let Some(formula) = &args.formula {
        tabulate(formula);
        return Ok(());
    }

    println!("*-*-*-* PROPOSITIONAL TRUTH TABLES *-*-*-*");
    println!("Operators: <->  ->  v  ^  !  and parentheses.");
    println!("Enter one formula per line; an empty line quits.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        tabulate(line);
    }

    Ok(())
}
