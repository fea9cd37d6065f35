mod app;
mod cli;
mod config;
mod library;
mod pool;
mod preview;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
