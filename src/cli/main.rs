use clap::Parser;

use relsat::{context::Context, reports::Report};

mod args;
mod misc;

use args::Args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config = args::config_from_args(&args);
    let display_limit = config.matrix_display_limit;

    let mut the_context = Context::from_config(config);

    for string in args::element_strings(&args) {
        match the_context.element_from_string(string) {
            Ok(element) => {
                if !the_context.add_element(element) {
                    println!("c Element {element} already in the set, skipped");
                }
            }
            Err(e) => println!("c Skipped: {e}"),
        }
    }

    for string in args::pair_strings(&args) {
        match the_context.add_pair_string(string) {
            Ok(true) => {}
            Ok(false) => println!("c Pair {string} already in the relation, skipped"),
            Err(e) => println!("c Skipped: {e}"),
        }
    }

    if args.steps && !args.json {
        the_context.set_callback_warshall(Box::new(misc::step_printer(display_limit)));
    }

    let analysis = match the_context.analyse() {
        Ok(analysis) => analysis,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match analysis.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                println!("c Error writing JSON: {e}");
                std::process::exit(1);
            }
        }
    } else {
        misc::print_analysis(&analysis, args.matrix);

        if args.graph {
            println!("c Implications:");
            misc::print_commented(&analysis.implication_graph().summary());
        }

        if args.dot {
            println!("{}", analysis.implication_graph().as_dot());
        }
    }

    match analysis.report() {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
    }
}
