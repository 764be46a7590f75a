use relsat::{
    procedures::{
        closure::WarshallStep,
        solve::{verify, Solution},
    },
    reports::Analysis,
    structures::{matrix::ClosureMatrix, valuation::Valuation},
};

/// Prints each line of the text as a comment.
pub fn print_commented(text: &str) {
    for line in text.lines() {
        println!("c {line}");
    }
}

pub fn print_matrix(title: &str, matrix: &ClosureMatrix) {
    println!("c {title}:");
    print_commented(&matrix.to_string());
}

/// A callback to print each step of closing a relation, with the matrix after the step if there are at most `display_limit` elements.
pub fn step_printer(display_limit: usize) -> impl FnMut(&WarshallStep) {
    move |step: &WarshallStep| {
        println!("c Iteration k = {} (element {})", step.k, step.element);
        for addition in &step.additions {
            println!("c   + ({addition})");
        }
        if step.matrix.size() <= display_limit {
            print_commented(&step.matrix.to_string());
        }
    }
}

pub fn print_analysis(analysis: &Analysis, show_matrix: bool) {
    let universe = analysis
        .universe
        .iter()
        .map(|element| element.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("c Set: {{{universe}}}");
    println!("c Relation: {}", analysis.relation);

    if show_matrix {
        if let Some(initial) = &analysis.initial {
            print_matrix("Initial matrix", initial);
        }
        if let Some(closed) = &analysis.closed {
            print_matrix("Closed matrix", closed);
        }
    }

    println!("c Closure: {}", analysis.closure);

    println!("c Clauses:");
    for (index, clause) in analysis.clauses.units().enumerate() {
        println!("c   U{}: {clause}", index + 1);
    }
    for (index, clause) in analysis.clauses.binaries().enumerate() {
        println!("c   C{}: {clause}", index + 1);
    }
    println!(
        "c Units: {}, binaries: {}, total: {}",
        analysis.clauses.units().count(),
        analysis.clauses.binaries().count(),
        analysis.clauses.len()
    );

    println!("c Literal closures:");
    for closure in &analysis.literal_closures {
        println!("c   {closure}");
        for atom in &closure.inconsistent {
            println!("c     Inconsistent: T({}) contains {atom} and -{atom}", closure.literal);
        }
    }
    let blocked = analysis
        .inconsistent_closures()
        .map(|closure| closure.literal.to_string())
        .collect::<Vec<_>>();
    match blocked.is_empty() {
        true => println!("c Every literal closure is consistent"),
        false => println!("c Literals with inconsistent closures: {}", blocked.join(", ")),
    }

    match &analysis.solution {
        Solution::Satisfiable(witness) => {
            for clause in &analysis.clauses {
                let value = clause.evaluate(witness) == Some(true);
                println!("c   {clause}: {value}");
            }
            println!("c Verified: {}", verify(&analysis.clauses, witness));
        }
        Solution::Unsatisfiable(reason) => {
            println!("c Reason: {reason}");
        }
    }

    println!("s {}", analysis.report());
    if let Some(witness) = analysis.solution.witness() {
        println!("v {}", witness.as_display_string());
    }
}
