use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

/// Screen-pixel side length of one machine pixel.
const SCALE: u32 = 10;

/// An sdl2 window presenting the machine's 64x32 monochrome frame buffer.
/// The core never formats pixels for any display API; the translation to
/// an RGB texture happens entirely here.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Opens the window on the given sdl2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                "chip8",
                DISPLAY_WIDTH as u32 * SCALE,
                DISPLAY_HEIGHT as u32 * SCALE,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Flattens a frame into RGB24 texture bytes: rows concatenated, each
    /// cell tripled into equal R, G and B intensities of 0 or 255.
    fn texture_bytes(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flatten()
            .flat_map(|&cell| {
                let intensity = cell * 255;
                vec![intensity; 3]
            })
            .collect()
    }

    /// Uploads the frame as a streaming texture and stretches it across
    /// the window.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], _pitch: usize| {
            buffer.copy_from_slice(&Display::texture_bytes(frame));
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod test_display {
    use super::*;

    #[test]
    fn test_texture_bytes_triple_each_cell() {
        let mut frame: FrameBuffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][0..2].copy_from_slice(&[0, 1]);
        frame[1][0..2].copy_from_slice(&[1, 0]);
        let bytes = Display::texture_bytes(&frame);

        assert_eq!(bytes.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT * 3);
        assert_eq!(bytes[0..6], [0, 0, 0, 255, 255, 255]);
        // second row starts one 64-cell stride in
        assert_eq!(bytes[192..198], [255, 255, 255, 0, 0, 0]);
    }
}
