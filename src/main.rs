fn main() {
    m3u_compose::app::cli::run();
}
