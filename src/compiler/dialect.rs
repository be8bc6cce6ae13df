use crate::compiler::desktop::DesktopCompiler;
use crate::compiler::spreadsheet::SpreadsheetCompiler;
use crate::compiler::traits::SqlCompiler;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Jet-style desktop database files.
    Desktop,
    /// Worksheet sources reached through the same driver family.
    Spreadsheet,
    /// Desktop with the driver's legacy wildcard mode: no ALIKE rewrite,
    /// patterns pass through verbatim.
    DesktopLegacy,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::Desktop
    }
}

impl Dialect {
    pub fn compiler(&self) -> Box<dyn SqlCompiler> {
        match self {
            Dialect::Desktop => Box::new(DesktopCompiler::new()),
            Dialect::Spreadsheet => Box::new(SpreadsheetCompiler::new()),
            Dialect::DesktopLegacy => Box::new(DesktopCompiler::legacy()),
        }
    }
}
