use queens::Queens;

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: queens <board_size> [<board_size> ...]");
        return;
    }
    for arg in &args {
        let n: usize = match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("board size '{}' is not an integer, skipping", arg);
                continue;
            }
        };
        let queens = Queens::new(n);
        let solutions = queens.solve_all();
        println!("Found {} solutions for the {}-queens problem.", solutions.len(), n);
        if let Some(first) = solutions.first() {
            println!("One of the solutions:");
            println!("{}", queens.display(first));
        }
    }
}
