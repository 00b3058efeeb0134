use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes the raster as a binary PPM, creating missing parent directories.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // P6 = binary RGB, then width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        debug!(path = %filepath.display(), width, height, "ppm written");
        Ok(())
    }
}
