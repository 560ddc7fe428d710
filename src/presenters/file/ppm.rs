use crate::controllers::ports::surface::{Surface, SurfaceError};
use crate::core::data::image_buffer::ImageBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes each presented image to a binary PPM file. Alpha is dropped.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    filepath: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    #[must_use]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}

pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&image.to_rgb_bytes())?;
    writer.flush()
}

impl Surface for PpmFilePresenter {
    fn present(&mut self, image: &ImageBuffer) -> Result<(), SurfaceError> {
        if let Some(parent) = self.filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.filepath)?;
        write_ppm(image, BufWriter::new(file))?;

        log::info!(
            "wrote {}x{} image to {}",
            image.width(),
            image.height(),
            self.filepath.display()
        );

        Ok(())
    }
}
