fn main() {
    formlink::app::cli::run();
}
