//! Demonstration driver for the BST. Builds a tree from random values,
//! searches for values that are and aren't in it, then deletes everything
//! one value at a time, reprinting the tree as it shrinks. Purely
//! illustrative; it exercises the public API and nothing else.

use rand::seq::SliceRandom;
use rand::Rng;

use unbalanced_bst::Tree;

fn main() {
    let mut rng = rand::rng();

    let mut tree = Tree::new();
    println!("is empty? {} height {}", tree.is_empty(), tree.height());

    let mut inserted = Vec::new();
    for _ in 0..20 {
        let value: i32 = rng.random_range(0..100);
        println!("Inserting value {value}");
        tree.insert(value);
        inserted.push(value);
    }
    println!("{tree}");

    inserted.shuffle(&mut rng);
    println!("========== Searching for values in tree:");
    for v in &inserted {
        println!("search({v}) = {}", tree.search(v));
    }

    let extras: Vec<i32> = (0..10).map(|_| rng.random_range(0..100)).collect();
    println!("========== Searching for extra values (likely not in tree):");
    for v in &extras {
        println!("search({v}) = {}", tree.search(v));
    }

    inserted.shuffle(&mut rng);
    println!("========== Deleting values from tree:");
    for v in &inserted {
        println!("Deleting value {v}");
        if let Err(err) = tree.delete(v) {
            println!("{err}");
        }
        println!("{tree}");
    }
}
