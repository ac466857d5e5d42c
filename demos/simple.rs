use truthtable_rs::{parse, tokenize, TruthTable};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let input = "(p -> q) <-> (!p | q)";
    println!("input = {:?}", input);

    let tokens = tokenize(input)?;
    println!("tokens = {:?}", tokens);

    let expr = parse(input)?;
    println!("expr = {}", expr);
    println!("size = {}, depth = {}", expr.size(), expr.depth());
    println!("variables = {:?}", expr.variables());

    let table = TruthTable::build(&expr);
    print!("{}", table);
    println!("tautology: {}", table.is_tautology());
    println!("contradiction: {}", table.is_contradiction());
    println!("satisfiable: {}", table.is_satisfiable());

    Ok(())
}
