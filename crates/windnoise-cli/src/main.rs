mod command;
mod data;
mod display;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
