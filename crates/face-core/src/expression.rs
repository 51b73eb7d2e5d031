//! Displayed expression and the glyph table behind it.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{FaceError, FaceResult};

/// Expression shown at rest and after a transient expression is cleared.
pub const DEFAULT_EXPRESSION: &str = "default";

/// What to do when the active expression has no glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingGlyphPolicy {
    /// Draw the `default` glyph instead and log a warning once per id.
    #[default]
    FallbackToDefault,
    /// Fail the render with [`FaceError::UnknownExpression`].
    Strict,
}

/// Expression id → display string. Always holds a `default` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphTable {
    glyphs: BTreeMap<String, String>,
}

impl GlyphTable {
    pub fn new<K, V>(glyphs: impl IntoIterator<Item = (K, V)>) -> FaceResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let glyphs: BTreeMap<String, String> = glyphs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if !glyphs.contains_key(DEFAULT_EXPRESSION) {
            return Err(FaceError::MissingDefaultGlyph);
        }
        Ok(Self { glyphs })
    }

    pub fn get(&self, expression: &str) -> Option<&str> {
        self.glyphs.get(expression).map(String::as_str)
    }

    pub fn default_glyph(&self) -> &str {
        self.get(DEFAULT_EXPRESSION).unwrap_or_default()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.glyphs
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
        }
    }
}

pub(crate) fn default_glyphs() -> BTreeMap<String, String> {
    [
        ("happy", "ᵔᴥᵔ"),
        ("sad", "‾᷄ᗣ‾᷅"),
        ("nervous", "•﹏•"),
        (DEFAULT_EXPRESSION, "･◡･"),
        ("shock", "ㅇㅅㅇ"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Currently displayed expression. The color is the fixed face color.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionState {
    pub expression: String,
    pub color: [f32; 3],
}

/// Expression state plus the transient flag.
///
/// A transient expression (e.g. a failed login) reverts to `default` on the next
/// pointer update; nothing else changes the state automatically.
#[derive(Clone, Debug)]
pub struct ExpressionMachine {
    state: ExpressionState,
    is_transient: bool,
    glyphs: GlyphTable,
    policy: MissingGlyphPolicy,
    warned: RefCell<BTreeSet<String>>,
}

impl ExpressionMachine {
    pub fn new(glyphs: GlyphTable, color: [f32; 3], policy: MissingGlyphPolicy) -> Self {
        Self {
            state: ExpressionState {
                expression: DEFAULT_EXPRESSION.to_string(),
                color,
            },
            is_transient: false,
            glyphs,
            policy,
            warned: RefCell::new(BTreeSet::new()),
        }
    }

    /// Overwrite the expression and flag. The id is checked only at render time.
    pub fn set(&mut self, expression: impl Into<String>, is_transient: bool) {
        self.state.expression = expression.into();
        self.is_transient = is_transient;
        log::info!(
            "expression -> '{}'{}",
            self.state.expression,
            if is_transient { " (transient)" } else { "" }
        );
    }

    /// Revert a transient expression to `default`. Returns whether it did.
    pub fn clear_transient(&mut self) -> bool {
        if !self.is_transient {
            return false;
        }
        self.set(DEFAULT_EXPRESSION, false);
        true
    }

    pub fn current(&self) -> &ExpressionState {
        &self.state
    }

    pub fn is_transient(&self) -> bool {
        self.is_transient
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn policy(&self) -> MissingGlyphPolicy {
        self.policy
    }

    pub(crate) fn set_color(&mut self, color: [f32; 3]) {
        self.state.color = color;
    }

    /// Glyph for the current expression, resolved through the missing-glyph policy.
    pub fn glyph(&self) -> FaceResult<&str> {
        let id = self.state.expression.as_str();
        if let Some(glyph) = self.glyphs.get(id) {
            return Ok(glyph);
        }
        match self.policy {
            MissingGlyphPolicy::Strict => Err(FaceError::UnknownExpression(id.to_string())),
            MissingGlyphPolicy::FallbackToDefault => {
                if self.warned.borrow_mut().insert(id.to_string()) {
                    log::warn!("no glyph for expression '{id}', drawing '{DEFAULT_EXPRESSION}'");
                }
                Ok(self.glyphs.default_glyph())
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/expression.rs"]
mod tests;
