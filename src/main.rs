fn main() {
    adlib::app::cli::run();
}
