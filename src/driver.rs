//! Page assembly.
//!
//! The driver owns the output sink. Factories stay pure and only return
//! markup; the driver decides order and appends each fragment once it has
//! been produced in full, so a failing control never leaves half a tag behind.

use crate::envelope::{FormEnvelope, FormMethod};
use crate::error::FormResult;
use crate::factory::ControlFactory;
use crate::params::Params;
use std::fmt;
use std::io;

const SUBMIT: &str = "<input type=submit><br>\n";
const LINE_BREAKS: &str = "<br><br>\n";

/// Accumulates rendered fragments into a sink
#[derive(Debug, Default)]
pub struct RenderDriver<W = String> {
    sink: W,
    fragments: usize,
}

impl RenderDriver<String> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: fmt::Write> RenderDriver<W> {
    pub fn with_sink(sink: W) -> Self {
        Self { sink, fragments: 0 }
    }

    pub fn form_begin(
        &mut self,
        envelope: &FormEnvelope,
        action: Option<&str>,
        method: Option<FormMethod>,
    ) -> FormResult<()> {
        let tag = envelope.begin(action, method);
        self.push(&format!("{}\n", tag))
    }

    pub fn form_end(&mut self) -> FormResult<()> {
        self.push(FormEnvelope::end().as_str())
    }

    /// Render one control and append it
    pub fn control<F: ControlFactory + ?Sized>(
        &mut self,
        factory: &F,
        params: &Params,
    ) -> FormResult<()> {
        let markup = factory.produce(params)?;
        tracing::debug!(bytes = markup.len(), fragment = self.fragments, "rendered control");
        self.push(markup.as_str())
    }

    pub fn submit(&mut self) -> FormResult<()> {
        self.push(SUBMIT)
    }

    pub fn line_breaks(&mut self) -> FormResult<()> {
        self.push(LINE_BREAKS)
    }

    /// Number of fragments appended so far
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    pub fn finish(self) -> W {
        self.sink
    }

    fn push(&mut self, html: &str) -> FormResult<()> {
        self.sink.write_str(html)?;
        self.fragments += 1;
        Ok(())
    }
}

/// A page walkthrough: decides which controls appear and in which order
pub trait FormGenerator {
    fn generate(&self, driver: &mut RenderDriver) -> FormResult<()>;

    fn render(&self) -> FormResult<String> {
        let mut driver = RenderDriver::new();
        self.generate(&mut driver)?;
        tracing::debug!(fragments = driver.fragments(), "page rendered");
        Ok(driver.finish())
    }
}

/// Copy a finished page to an I/O sink (stdout, a file, a response body)
pub fn write_page<W: io::Write>(page: &str, mut out: W) -> FormResult<()> {
    out.write_all(page.as_bytes())?;
    out.flush()?;
    Ok(())
}
