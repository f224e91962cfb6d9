/// Configuration for the frame renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Padding inside node boxes (in characters).
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            padding: 1,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
