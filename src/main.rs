fn main() {
    gottcha_nf::app::cli::run();
}
