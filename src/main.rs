use invsqrt_benchmark::run_benchmark;
use invsqrt_benchmark::utils::helpers::enable_utf8_console;

fn main() {
    enable_utf8_console();

    if let Err(e) = run_benchmark() {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
