/// Wireframe line renderer for terminal output
use cab3d_core::{CabinetProjection, Scene, SolidModel};
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point3;
use std::io::Write;

/// World units per terminal column
const DEFAULT_SCALE: f32 = 4.0;

/// Length of the coordinate-axis furniture, matching the modeled object's size
const AXIS_LENGTH: f32 = 10.0;

/// Renderer that draws projected edges into a character framebuffer
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    scale: f32,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            scale: DEFAULT_SCALE,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    /// Draw the axis furniture, the primary wireframe, and the mirror image
    pub fn render_scene(&mut self, scene: &Scene) {
        self.render_axes(scene.projection());
        for (a, b) in scene.projected_edges() {
            self.draw_segment(&a, &b, '#', Color::Magenta);
        }
        if let Some(edges) = scene.mirror_projected_edges() {
            for (a, b) in edges {
                self.draw_segment(&a, &b, '#', Color::Cyan);
            }
        }
    }

    fn render_axes(&mut self, projection: &CabinetProjection) {
        let axes = SolidModel::axes(AXIS_LENGTH);
        let projected = projection.project(axes.vertices());
        let colors = [Color::Red, Color::Green, Color::Blue];
        for (&(i, j), &color) in axes.edges().iter().zip(colors.iter()) {
            self.draw_segment(&projected[i], &projected[j], '.', color);
        }
    }

    /// Map a projected point (z = 0) to a terminal cell.
    ///
    /// Terminal cells are roughly twice as tall as they are wide, so y gets
    /// half the horizontal scale; y also flips because rows grow downward.
    fn to_screen(&self, p: &Point3<f32>) -> (i32, i32) {
        let cx = self.width as f32 / 2.0;
        let cy = self.height as f32 / 2.0;
        let x = cx + p.x * self.scale;
        let y = cy - p.y * self.scale * 0.5;
        (x.round() as i32, y.round() as i32)
    }

    fn draw_segment(&mut self, a: &Point3<f32>, b: &Point3<f32>, c: char, color: Color) {
        let (x0, y0) = self.to_screen(a);
        let (x1, y1) = self.to_screen(b);
        self.draw_line(x0, y0, x1, y1, c, color);
    }

    /// Bresenham line between two cells, clipped per plotted point
    fn draw_line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, c: char, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, c, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32, c: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = c;
        self.color_buffer[idx] = color;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(renderer: &WireframeRenderer, x: usize, y: usize) -> char {
        renderer.char_buffer[y * renderer.width + x]
    }

    #[test]
    fn test_line_covers_endpoints() {
        let mut renderer = WireframeRenderer::new(20, 20);
        renderer.draw_line(2, 3, 10, 3, '#', Color::Magenta);
        assert_eq!(cell(&renderer, 2, 3), '#');
        assert_eq!(cell(&renderer, 10, 3), '#');
        assert_eq!(cell(&renderer, 6, 3), '#');
    }

    #[test]
    fn test_out_of_bounds_plot_is_ignored() {
        let mut renderer = WireframeRenderer::new(4, 4);
        renderer.draw_line(-5, -5, 10, 10, '#', Color::Cyan);
        // Only the in-bounds diagonal cells are written
        assert_eq!(cell(&renderer, 0, 0), '#');
        assert_eq!(cell(&renderer, 3, 3), '#');
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut renderer = WireframeRenderer::new(4, 4);
        renderer.draw_line(0, 0, 3, 0, '#', Color::Red);
        renderer.clear();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(cell(&renderer, x, y), ' ');
            }
        }
    }

    #[test]
    fn test_screen_mapping_flips_y() {
        let renderer = WireframeRenderer::new(40, 20);
        let (_, y_up) = renderer.to_screen(&Point3::new(0.0, 1.0, 0.0));
        let (_, y_down) = renderer.to_screen(&Point3::new(0.0, -1.0, 0.0));
        assert!(y_up < y_down);
    }
}
