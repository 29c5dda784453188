fn main() {
    procurement_frontend::run();
}
