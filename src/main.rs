use sum_five::CommandLine;

fn main() {
    CommandLine::new("sum_five")
        .about("Perform mathematical operations on numbers.")
        .run();
}
