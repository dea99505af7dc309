use super::error::Result;
use super::frame::Frame;

pub(crate) trait Renderer {
    fn size_hint(&self) -> Result<(u16, u16)>;
    fn render(&mut self, f: &Frame) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}
