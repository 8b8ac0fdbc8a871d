fn main() {
    genconf::app::cli::run();
}
