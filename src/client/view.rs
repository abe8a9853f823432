//! Render state of the lookup page.

use std::fmt;

use crate::client::proxy::ClientError;
use crate::lookup::Projection;

/// Model of the page's result region.
///
/// Mirrors the DOM the browser script drives: a result region toggled
/// between hidden and visible, an image with its alt text, a name caption and
/// an error text area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    pub result_visible: bool,
    pub image_src: Option<String>,
    pub image_alt: Option<String>,
    pub caption: Option<String>,
    pub error_text: String,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the result region and clear any previous error.
    pub fn begin(&mut self) {
        self.result_visible = false;
        self.error_text.clear();
    }

    pub fn show_result(&mut self, projection: &Projection) {
        self.image_src = projection.image.clone();
        self.image_alt = Some(format!("Artwork of {}", projection.name));
        self.caption = Some(projection.name.clone());
        self.error_text.clear();
        self.result_visible = true;
    }

    /// Show `message` in place of a result.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.image_src = None;
        self.image_alt = None;
        self.caption = None;
        self.error_text = message.into();
        self.result_visible = true;
    }

    pub fn render(&mut self, outcome: &Result<Projection, ClientError>) {
        match outcome {
            Ok(projection) => self.show_result(projection),
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error_text.is_empty()
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.result_visible {
            return Ok(());
        }
        if self.is_error() {
            return write!(f, "error: {}", self.error_text);
        }
        writeln!(f, "{}", self.caption.as_deref().unwrap_or_default())?;
        write!(f, "image: {}", self.image_src.as_deref().unwrap_or("(none)"))
    }
}
