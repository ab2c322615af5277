/// vgfx Terminal Demo - Rotating Wireframe Cube
///
/// Demonstrates the terminal renderer with a spinning cube wireframe.
/// Controls:
///   - Q/ESC: Quit

use std::io;
use vgfx_core::Wireframe;
use vgfx_terminal::TerminalApp;

fn main() -> io::Result<()> {
    println!("vgfx Terminal Renderer - Loading...");

    // Create a cube wireframe
    let cube = Wireframe::cube(1.0);

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(cube)?;
    app.run()?;

    println!("Thank you for using the vgfx Terminal Renderer!");
    Ok(())
}
