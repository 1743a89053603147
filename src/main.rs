fn main() {
    if let Err(e) = step_heatmap::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
