//! Server-side HTML rendering.
//!
//! Templates are compiled into the binary and parsed once, when the router is
//! built, so a broken template fails startup instead of a request.

use crate::failure::{Failure, internal};
use axum::response::Html;
use minijinja::{Environment, Value};
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("forms.html", include_str!("../templates/forms.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("catalog.html", include_str!("../templates/catalog.html")),
    ("edit.html", include_str!("../templates/edit.html")),
    ("declarations.html", include_str!("../templates/declarations.html")),
    ("declaration.html", include_str!("../templates/declaration.html")),
];

/// The template environment.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Parse every template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_filter("or_blank", or_blank);
        Ok(Self { env })
    }

    pub(crate) fn render<S: Serialize>(
        &self,
        name: &str,
        context: S,
    ) -> Result<Html<String>, Failure> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(context))
            .map(Html)
            .map_err(internal(format!("failed to render {name}")))
    }
}

/// Absent values render as nothing rather than `none`.
fn or_blank(value: Value) -> Value {
    if value.is_none() || value.is_undefined() {
        Value::from("")
    } else {
        value
    }
}
