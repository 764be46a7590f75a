use clap::Parser;

use relsat::config::Config;

/// Closes a relation over a set of integers, and determines whether the relation is satisfiable when read as a 2-CNF formula
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, required = true, allow_hyphen_values = true, verbatim_doc_comment)]
    /// The elements of the set, separated by commas or whitespace
    /// May be repeated, e.g. --set -1,2 --set 3
    pub set: Vec<String>,

    #[arg(short, long, allow_hyphen_values = true, verbatim_doc_comment)]
    /// Pairs of the relation, as x,y or x for a reflexive singleton, separated by whitespace
    /// May be repeated, e.g. --relation -1,2 --relation "2,3 3"
    pub relation: Vec<String>,

    /// Display each step of closing the relation
    #[arg(long, default_value_t = false)]
    pub steps: bool,

    /// Display the matrices of the relation and its closure
    #[arg(short, long, default_value_t = false)]
    pub matrix: bool,

    /// Display the implications of the formula
    #[arg(short, long, default_value_t = false)]
    pub graph: bool,

    /// Display the implication graph in DOT
    #[arg(long, default_value_t = false)]
    pub dot: bool,

    /// Display the analysis as JSON, in place of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// The number of free atoms beyond which valuations are not enumerated
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();

    if let Some(limit) = args.limit {
        config.enumeration_limit = Some(limit);
    }

    config
}

/// The strings of elements in the set arguments, split on commas and whitespace.
pub fn element_strings(args: &Args) -> Vec<&str> {
    args.set
        .iter()
        .flat_map(|string| string.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|string| !string.is_empty())
        .collect()
}

/// The strings of pairs in the relation arguments, split on whitespace.
pub fn pair_strings(args: &Args) -> Vec<&str> {
    args.relation
        .iter()
        .flat_map(|string| string.split_whitespace())
        .collect()
}
