use boolexpr_rs::expr::Expr;
use boolexpr_rs::tree::TreeConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let p = Expr::var("p");
    let q = Expr::var("q");

    let f = Expr::implies(Expr::and(p.clone(), q.clone()), Expr::or(p, q));
    println!("f = {}", f);
    println!("tex: {}", f.tex());

    println!("variables: {:?}", f.variables());

    let g = f.remove_implications();
    println!("without implications: {}", g);

    let h = f.nnf();
    println!("nnf: {} (is_nnf = {})", h, h.is_nnf());

    println!("simplified nnf: {}", h.simplify());

    println!("truth table:");
    println!("{}", f.truth_table());

    println!("tree view:");
    println!("{}", f.indented(0, &TreeConfig::default()));

    Ok(())
}
