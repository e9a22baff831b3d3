fn main() {
    if let Err(err) = salary_insights::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
