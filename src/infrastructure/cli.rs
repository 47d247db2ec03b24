use std::str::FromStr;

use clap::Parser;

use crate::domain::ui::Page;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 10.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "PAGE",
        help = "Page to open first (home, about, projects, resume, contact)",
        value_parser = parse_page
    )]
    pub page: Option<Page>,

    #[arg(
        long,
        help = "Run without a terminal, printing the selected page as plain text"
    )]
    pub headless: bool,
}

fn parse_page(raw: &str) -> Result<Page, String> {
    Page::from_str(raw).map_err(|_| format!("unknown page `{raw}`"))
}
