/// Terminal front-end: key-driven transform commands and wireframe display
use cab3d_core::{Axis, Scene, SolidModel};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::WireframeRenderer;

/// Step sizes of the fixed command set
const MOVE_STEP: f32 = 1.0;
const ROTATE_STEP: f32 = std::f32::consts::PI / 18.0;
const SCALE_UP: f32 = 1.1;
const SCALE_DOWN: f32 = 0.9;

/// Main application struct for the terminal wireframe viewer
pub struct TerminalApp {
    scene: Scene,
    renderer: WireframeRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(object: SolidModel) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene: Scene::new(object),
            renderer: WireframeRenderer::new(width as usize, height as usize),
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
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input; each command runs to completion before the next
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render the latest snapshot
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// One key press = one scene command
    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Right => self.scene.translate(MOVE_STEP, 0.0, 0.0),
                KeyCode::Left => self.scene.translate(-MOVE_STEP, 0.0, 0.0),
                KeyCode::Up => self.scene.translate(0.0, MOVE_STEP, 0.0),
                KeyCode::Down => self.scene.translate(0.0, -MOVE_STEP, 0.0),
                KeyCode::Char('.') => self.scene.translate(0.0, 0.0, MOVE_STEP),
                KeyCode::Char(',') => self.scene.translate(0.0, 0.0, -MOVE_STEP),
                KeyCode::Char('x') => self.scene.rotate(Axis::X, ROTATE_STEP),
                KeyCode::Char('X') => self.scene.rotate(Axis::X, -ROTATE_STEP),
                KeyCode::Char('y') => self.scene.rotate(Axis::Y, ROTATE_STEP),
                KeyCode::Char('Y') => self.scene.rotate(Axis::Y, -ROTATE_STEP),
                KeyCode::Char('z') => self.scene.rotate(Axis::Z, ROTATE_STEP),
                KeyCode::Char('Z') => self.scene.rotate(Axis::Z, -ROTATE_STEP),
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.scene.scale(SCALE_UP, SCALE_UP, SCALE_UP)
                }
                KeyCode::Char('-') => self.scene.scale(SCALE_DOWN, SCALE_DOWN, SCALE_DOWN),
                KeyCode::Char('1') => self.scene.set_mirror_axis(Axis::X),
                KeyCode::Char('2') => self.scene.set_mirror_axis(Axis::Y),
                KeyCode::Char('3') => self.scene.set_mirror_axis(Axis::Z),
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        // Clear renderer
        self.renderer.clear();

        // Render the scene snapshot
        self.renderer.render_scene(&self.scene);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let mirror = match self.scene.mirror() {
            Some(m) => format!("{:?}", m.axis()),
            None => "off".to_string(),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "cab3d | FPS: {:.1} | Mirror: {} | Arrows ,/. = Move  x/y/z = Rotate (shift reverses)  +/- = Scale  1/2/3 = Mirror  Q = Quit",
                self.fps, mirror
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
