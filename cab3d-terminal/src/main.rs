/// cab3d Terminal Viewer - the letter "Г" in cabinet projection
///
/// Renders the block letter "Г" as a wireframe under an oblique (cabinet)
/// projection and applies affine transforms from the keyboard.
/// Controls:
///   - Arrow Keys: Move in x/y, ',' / '.': Move in z
///   - x/y/z: Rotate by 10 degrees (Shift reverses)
///   - +/-: Scale up/down
///   - 1/2/3: Mirror about the x/y/z plane
///   - Q/ESC: Quit

use cab3d_core::SolidModel;
use cab3d_terminal::TerminalApp;
use std::io;

fn main() -> io::Result<()> {
    let object = SolidModel::letter_g();

    let mut app = TerminalApp::new(object)?;
    app.run()?;

    Ok(())
}
