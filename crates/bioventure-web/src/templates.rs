//! Page templates, embedded at compile time and rendered with minijinja.
//! Every template name ends in `.html`, so interpolated values (including
//! model output) are HTML-escaped.

use minijinja::Environment;
use serde::Serialize;

use crate::error::WebError;

const BASE_HTML: &str = include_str!("../templates/base.html");
const NAV_HTML: &str = include_str!("../templates/nav.html");
const MARKET_HTML: &str = include_str!("../templates/market.html");
const ARCHITECT_HTML: &str = include_str!("../templates/architect.html");

fn embedded(name: &str) -> Option<&'static str> {
    match name {
        "base.html"      => Some(BASE_HTML),
        "nav.html"       => Some(NAV_HTML),
        "market.html"    => Some(MARKET_HTML),
        "architect.html" => Some(ARCHITECT_HTML),
        _ => None,
    }
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(embedded(name).map(str::to_string)));
        Self { env }
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, WebError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}
