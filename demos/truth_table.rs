//! Truth-table printer for a few named formulas.
//!
//! Run with:
//! ```bash
//! cargo run --example truth_table -- --formula demorgan
//! ```

use boolexpr_rs::expr::Expr;
use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Formula {
    /// p & q
    Conjunction,
    /// p | q
    Disjunction,
    /// (p & q) => p
    Implication,
    /// p <=> ~~p
    Biconditional,
    /// ~(p & q) <=> (~p | ~q)
    Demorgan,
}

impl Formula {
    fn build(self) -> Expr {
        let p = Expr::var("p");
        let q = Expr::var("q");
        match self {
            Formula::Conjunction => Expr::and(p, q),
            Formula::Disjunction => Expr::or(p, q),
            Formula::Implication => Expr::implies(Expr::and(p.clone(), q), p),
            Formula::Biconditional => Expr::iff(p.clone(), Expr::not(Expr::not(p))),
            Formula::Demorgan => Expr::iff(
                Expr::not(Expr::and(p.clone(), q.clone())),
                Expr::or(Expr::not(p), Expr::not(q)),
            ),
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Print the truth table of a named formula")]
struct Cli {
    /// Formula to tabulate
    #[arg(long, value_enum, default_value = "implication")]
    formula: Formula,

    /// Also print the formula as Graphviz DOT
    #[arg(long)]
    dot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let f = cli.formula.build();
    println!("f = {}", f);

    let table = f.truth_table();
    println!("{}", table);

    if table.values().iter().all(|&v| v) {
        println!("f is a tautology");
    } else if table.values().iter().all(|&v| !v) {
        println!("f is a contradiction");
    }

    if cli.dot {
        println!("{}", f.to_dot_default()?);
    }

    Ok(())
}
