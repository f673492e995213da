fn main() {
    mandala_cli::main();
}
