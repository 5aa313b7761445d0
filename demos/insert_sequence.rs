//! Inserts a sequence of numbers and prints the resulting tree shape.
//!
//! ```text
//! cargo run --example insert_sequence -- 30 10 20
//! cargo run --example insert_sequence -- -v        # 15 seeded random values, trace logging
//! ```

use std::error::Error;
use std::fmt::Write as _;

use avl_rs::{AvlTree, FiniteF64, Node};
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.first().is_some_and(|a| a == "-v");
    if verbose {
        args.remove(0);
    }
    TermLogger::init(
        if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let values: Vec<f64> = if args.is_empty() {
        let mut rng = StdRng::seed_from_u64(2016);
        (0..15).map(|_| f64::from(rng.gen_range(0..100))).collect()
    } else {
        args.iter()
            .map(|a| a.parse::<f64>())
            .collect::<Result<_, _>>()?
    };

    let mut tree = AvlTree::new();
    for v in values {
        match FiniteF64::new(v) {
            Ok(key) => {
                if !tree.insert(key) {
                    info!("{key} already present");
                }
            }
            Err(e) => warn!("skipping input: {e}"),
        }
    }

    println!("=== Tree ({} nodes, height {}) ===\n", tree.len(), tree.height());
    print!("{}", render(&tree));
    println!();
    tree.debug_print();

    let issues = tree.check_invariants();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("{issue}");
        }
        return Err(format!("{} invariant violations", issues.len()).into());
    }
    Ok(())
}

/// Sideways drawing driven only by the read-only node accessors. Each child
/// is tagged `L` or `R` so a lone child still shows which side it hangs on.
fn draw(node: &Node<FiniteF64>, side: &str, prefix: &str, is_tail: bool, out: &mut String) {
    let connector = if is_tail { "└── " } else { "├── " };
    let _ = writeln!(out, "{prefix}{connector}{side} {} [h={}]", node.value(), node.height());
    let child_prefix = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
    let children: Vec<(&str, &Node<FiniteF64>)> = [("L", node.left()), ("R", node.right())]
        .into_iter()
        .filter_map(|(side, child)| child.map(|c| (side, c)))
        .collect();
    for (i, (side, child)) in children.iter().enumerate() {
        draw(child, side, &child_prefix, i + 1 == children.len(), out);
    }
}

fn render(tree: &AvlTree<FiniteF64>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        draw(root, "root", "", true, &mut out);
    }
    out
}
