//! Renderer seam. The scene graph itself lives outside this crate; a
//! [`Renderer`] receives each new [`SceneTransform`] and applies it.

use crate::config::RenderConfig;
use crate::error::{OrientationError, OrientationResult};
use crate::projector::SceneTransform;
use std::io::Write;

pub trait Renderer {
    fn apply(&mut self, transform: &SceneTransform) -> OrientationResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn apply(&mut self, transform: &SceneTransform) -> OrientationResult<()> {
        (**self).apply(transform)
    }
}

/// Writes each transform as one human-readable line.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    scene: RenderConfig,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, scene: RenderConfig) -> Self {
        Self {
            out,
            scene,
            frames: 0,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn io(err: std::io::Error) -> OrientationError {
        OrientationError::render(err.to_string())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn apply(&mut self, transform: &SceneTransform) -> OrientationResult<()> {
        if self.frames == 0 {
            writeln!(self.out, "Scene: {}", self.scene).map_err(Self::io)?;
        }
        let [lx, ly, lz] = transform.light_direction;
        writeln!(
            self.out,
            "moon rot=({:+.6}, {:+.6}) rad  camera z={:.6} roll={:+.6} rad  light=({:+.6e}, {:+.6e}, {:+.6e})",
            transform.moon_rotation_x,
            transform.moon_rotation_y,
            transform.camera_distance,
            transform.camera_roll_z,
            lx,
            ly,
            lz
        )
        .map_err(Self::io)?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> SceneTransform {
        SceneTransform {
            moon_rotation_y: -1.5,
            moon_rotation_x: 0.1,
            camera_distance: 3.844,
            camera_roll_z: 0.25,
            light_direction: [0.0, 0.0, -1e-13],
        }
    }

    #[test]
    fn test_header_written_once() {
        let mut r = TextRenderer::new(Vec::new(), RenderConfig::default());
        r.apply(&transform()).unwrap();
        r.apply(&transform()).unwrap();
        assert_eq!(r.frames(), 2);

        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(text.matches("Scene:").count(), 1);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("camera z=3.844000"));
    }

    #[test]
    fn test_write_failure_is_render_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut r = TextRenderer::new(Broken, RenderConfig::default());
        let err = r.apply(&transform()).unwrap_err();
        assert!(matches!(err, OrientationError::Render(_)));
        assert_eq!(r.frames(), 0);
    }
}
