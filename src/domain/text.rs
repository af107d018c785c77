use serde::{Deserialize, Serialize};
use std::fmt;

/// Message templates known to the bank form.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TextTemplate {
    PromoForPayment,
    PromoForSetup,
}

impl TextTemplate {
    fn pattern(self) -> &'static str {
        match self {
            TextTemplate::PromoForPayment => {
                "Get %s off your payment when you pay with your bank."
            }
            TextTemplate::PromoForSetup => {
                "Get %s off your first payment when you save your bank."
            }
        }
    }
}

/// Displayable text, resolved to a string only when it is rendered.
///
/// The state model treats it as an opaque value: it is compared, cloned and
/// persisted, but never inspected by a transition.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvableText {
    Literal {
        value: String,
    },
    Template {
        template: TextTemplate,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl ResolvableText {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
        }
    }

    pub fn template(template: TextTemplate, args: Vec<String>) -> Self {
        Self::Template { template, args }
    }

    /// Resolves the text, substituting `%s` placeholders in order.
    ///
    /// Missing arguments leave their placeholder untouched; extra arguments
    /// are ignored.
    pub fn resolve(&self) -> String {
        match self {
            ResolvableText::Literal { value } => value.clone(),
            ResolvableText::Template { template, args } => {
                let mut out = String::new();
                let mut args = args.iter();
                let mut parts = template.pattern().split("%s").peekable();
                while let Some(part) = parts.next() {
                    out.push_str(part);
                    if parts.peek().is_some() {
                        match args.next() {
                            Some(arg) => out.push_str(arg),
                            None => out.push_str("%s"),
                        }
                    }
                }
                out
            }
        }
    }
}

impl From<&str> for ResolvableText {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for ResolvableText {
    fn from(value: String) -> Self {
        Self::literal(value)
    }
}

impl fmt::Display for ResolvableText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}
