/// Character-buffer rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use vgfx_core::{Coordinate, Path, PathSeg, Point2};

/// Renderer that plots paths and wireframe edges into a character grid
pub struct CharRenderer {
    width: usize,
    height: usize,
    buffer: Vec<char>,
}

impl CharRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.buffer.fill(' ');
    }

    /// Set the cell nearest (x, y); off-grid and non-finite points are
    /// discarded
    pub fn plot(&mut self, x: f64, y: f64, ch: char) {
        let col = x.round();
        let row = y.round();
        if !(col >= 0.0 && row >= 0.0 && col < self.width as f64 && row < self.height as f64) {
            return;
        }
        self.buffer[row as usize * self.width + col as usize] = ch;
    }

    /// Walk the segment from `a` to `b` one cell at a time
    pub fn draw_line(&mut self, a: Point2, b: Point2, ch: char) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }

        let steps = dx.abs().max(dy.abs()).ceil() as usize;
        if steps == 0 {
            self.plot(a.x, a.y, ch);
            return;
        }
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.plot(a.x + dx * t, a.y + dy * t, ch);
        }
    }

    /// Stroke every segment of a path
    pub fn draw_path(&mut self, path: &Path, ch: char) {
        let mut start: Option<Point2> = None;
        let mut current: Option<Point2> = None;

        for seg in path.segments() {
            match *seg {
                PathSeg::MoveTo(p) => {
                    self.plot(p.x, p.y, ch);
                    start = Some(p);
                    current = Some(p);
                }
                PathSeg::LineTo(p) => {
                    if let Some(from) = current {
                        self.draw_line(from, p, ch);
                    }
                    current = Some(p);
                }
                PathSeg::Close => {
                    if let (Some(from), Some(to)) = (current, start) {
                        self.draw_line(from, to, ch);
                    }
                    current = start;
                }
            }
        }
    }

    /// Stroke wireframe edges using the vertices' screen-space x and y
    pub fn draw_edges(&mut self, vertices: &[Coordinate], edges: &[(usize, usize)], ch: char) {
        for &(a, b) in edges {
            if let (Some(from), Some(to)) = (vertices.get(a), vertices.get(b)) {
                self.draw_line(
                    Point2::new(from.x, from.y),
                    Point2::new(to.x, to.y),
                    ch,
                );
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W, color: Color) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(color))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.buffer[y * self.width + x]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(r: &CharRenderer, x: usize, y: usize) -> char {
        r.buffer[y * r.width + x]
    }

    #[test]
    fn test_line_covers_endpoints() {
        let mut r = CharRenderer::new(10, 10);
        r.draw_line(Point2::new(0.0, 0.0), Point2::new(9.0, 9.0), '*');
        assert_eq!(cell(&r, 0, 0), '*');
        assert_eq!(cell(&r, 9, 9), '*');
        assert_eq!(cell(&r, 5, 5), '*');
    }

    #[test]
    fn test_offscreen_points_are_discarded() {
        let mut r = CharRenderer::new(4, 4);
        r.plot(-1.0, 2.0, '*');
        r.plot(2.0, 99.0, '*');
        r.plot(f64::NAN, 1.0, '*');
        assert!(r.buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_closed_path_strokes_back_to_start() {
        let mut r = CharRenderer::new(8, 8);
        let path = Path::closed_polyline(&[
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 6.0),
        ]);
        r.draw_path(&path, '#');
        // The closing edge runs from (6,6) back to (0,0)
        assert_eq!(cell(&r, 3, 3), '#');
    }
}
