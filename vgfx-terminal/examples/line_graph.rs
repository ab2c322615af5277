/// Example: Render a sample series as a terminal line graph
///
/// Usage: cargo run --example line_graph -- path/to/series.txt

use crossterm::style::Color;
use std::env;
use std::fs;
use std::io::{self, stdout, Write};
use vgfx_core::{chart, series};
use vgfx_terminal::CharRenderer;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let samples = if args.len() < 2 {
        eprintln!("Usage: {} <series-file>", args[0]);
        eprintln!("\nNo series file provided, using the demo data set...");
        chart::DEMO_SERIES.to_vec()
    } else {
        let text = fs::read_to_string(&args[1])?;
        series::parse_series(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    };

    let (width, height) = (72usize, 20usize);
    let graph = chart::line_graph(&samples, width as f64 - 1.0, height as f64 - 1.0);

    let mut renderer = CharRenderer::new(width, height);
    renderer.draw_path(&graph, '*');

    let mut stdout = stdout();
    renderer.draw(&mut stdout, Color::Red)?;
    stdout.flush()?;
    Ok(())
}
