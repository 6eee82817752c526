fn main() {
    let cli = depviz::cli::parse();
    let code = depviz::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
