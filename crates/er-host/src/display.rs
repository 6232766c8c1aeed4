//! Grid display that keeps the LED frame in memory and prints it as text.

use er_engine::GridDisplay;
use er_ir::Brightness;

/// A varibright grid rendered to characters.
///
/// ` ` off, `-` low, `o` medium, `#` high.
#[derive(Clone, Debug)]
pub struct TextGrid {
    width: u8,
    height: u8,
    leds: Vec<u8>,
    connected: bool,
    frames: usize,
}

impl TextGrid {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            leds: vec![0; width as usize * height as usize],
            connected: true,
            frames: 0,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Level at (x, y), `None` off the edge.
    pub fn level(&self, x: u8, y: u8) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.leds[self.offset(x, y)])
    }

    /// Number of frames started (clears) so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// One text line per grid row.
    pub fn frame(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.leds.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|&level| glyph(level)));
            out.push('\n');
        }
        out
    }

    fn offset(&self, x: u8, y: u8) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn glyph(level: u8) -> char {
    match level {
        0 => ' ',
        1..=3 => '-',
        4..=6 => 'o',
        _ => '#',
    }
}

impl GridDisplay for TextGrid {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn clear_all(&mut self) {
        self.leds.fill(0);
        self.frames += 1;
    }

    fn set_led(&mut self, x: u8, y: u8, brightness: Brightness) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.leds[offset] = brightness.level();
        }
    }
}
