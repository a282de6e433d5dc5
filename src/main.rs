use bst_maps::avl_tree::AvlMap;
use bst_maps::bst::BstMap;
use bst_maps::words::{self, Report};
use log::{error, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::process;

const DEFAULT_PATH: &str = "A-Tale-of-Two-Cities.txt";
const LOG_LEVEL_VAR: &str = "WORD_FREQUENCY_LOG";

fn log_level() -> LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn run(path: &str) -> bst_maps::Result<()> {
    println!("{}", path);
    let words = words::read_words(path)?;

    let mut bst: BstMap<String, usize> = BstMap::new();
    words::word_frequencies(&words, &mut bst)?;
    println!("\nBstMap (height {})", bst.height());
    println!("{}", Report::new(&words, &bst).with_is_bst(bst.is_bst()));

    let mut avl: AvlMap<String, usize> = AvlMap::new();
    words::word_frequencies(&words, &mut avl)?;
    println!("\nAvlMap (height {})", avl.height());
    println!(
        "{}",
        Report::new(&words, &avl)
            .with_is_bst(avl.is_bst())
            .with_is_balanced(avl.is_balanced()),
    );

    Ok(())
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());
    if let Err(err) = run(&path) {
        error!("{}: {}", path, err);
        process::exit(1);
    }
}
