use serde::{Deserialize, Serialize};

use crate::core::Allocation;
use crate::error::{RulerError, RulerResult};
use crate::render::{Color, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one ruler draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub allocation: Allocation,
    pub background: Option<Color>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(allocation: Allocation) -> Self {
        Self {
            allocation,
            background: None,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> RulerResult<()> {
        if !self.allocation.is_valid() {
            return Err(RulerError::InvalidAllocation {
                width: self.allocation.width,
                height: self.allocation.height,
            });
        }

        if let Some(background) = self.background {
            background.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
