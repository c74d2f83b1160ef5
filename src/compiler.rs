use std::io::Write;
use crate::error::Result;
use crate::mappings::{load_media_types_from_table, MediaTypeMappings};
use crate::render::{render_declaration, DeclarationStyle};
use crate::table::{AnnotationPolicy, BUILTIN_TABLE};

/// Compiles a reference table into a TypeScript constant declaration.
#[derive(Clone, Debug, Default)]
pub struct TableCompiler {
    style: DeclarationStyle,
    policy: AnnotationPolicy,
}

impl TableCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: DeclarationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_policy(mut self, policy: AnnotationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build_mappings(&self, table: &str) -> MediaTypeMappings {
        load_media_types_from_table(table, self.policy)
    }

    pub fn compile(&self, table: &str) -> Result<String> {
        render_declaration(&self.build_mappings(table), &self.style)
    }

    pub fn compile_builtin(&self) -> Result<String> {
        self.compile(BUILTIN_TABLE)
    }

    /// Writes the compiled declaration followed by a newline.
    pub fn write_to(&self, table: &str, mut out: impl Write) -> Result<()> {
        let declaration = self.compile(table)?;
        writeln!(out, "{declaration}")?;
        out.flush()?;
        Ok(())
    }
}
