/// Terminal frontend for the vgfx transformation core
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use vgfx_core::{SpinParams, Spinner, Wireframe};

pub mod renderer;

pub use renderer::CharRenderer;

/// Main application struct for the rotating wireframe demo.
///
/// The spin task owns the animation; this side consumes its snapshots and
/// redraws whenever the task signals a new frame.
pub struct TerminalApp {
    model: Wireframe,
    spinner: Spinner,
    frames: Receiver<()>,
    renderer: CharRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(model: Wireframe) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let params = SpinParams {
            scale: height as f64 / 4.0,
            center: (width as f64 / 2.0, height as f64 / 2.0),
            ..SpinParams::default()
        };

        let (frame_tx, frames) = mpsc::channel();
        let spinner = Spinner::spawn(model.vertices.clone(), params, move || {
            let _ = frame_tx.send(());
        });

        Ok(Self {
            model,
            spinner,
            frames,
            renderer: CharRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while self.running {
            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Wait for the spin task to request a redraw
            match self.frames.recv_timeout(Duration::from_millis(50)) {
                Ok(()) => {
                    self.render()?;
                    self.update_fps();
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        self.spinner.stop();
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_frame).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
            self.frame_count = 0;
            self.last_frame = now;
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let vertices = self.spinner.snapshot();

        self.renderer.clear();
        self.renderer.draw_edges(&vertices, &self.model.edges, '#');

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout, Color::Red)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "vgfx Terminal Renderer | FPS: {:.1} | Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
