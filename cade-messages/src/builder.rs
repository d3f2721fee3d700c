use std::collections::HashMap;

/// Fills `{name}` placeholders in a message template.
///
/// Rendering is a single left-to-right pass, so a substituted value that
/// itself contains `{...}` is emitted verbatim. Placeholders without a value
/// stay in the output as written.
pub struct MessageBuilder {
    template: &'static str,
    values: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            values: HashMap::new(),
        }
    }

    pub fn var(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Placeholder names in the template that have no value yet.
    pub fn unfilled(&self) -> Vec<&'static str> {
        placeholders(self.template)
            .filter(|name| !self.values.contains_key(name))
            .collect()
    }

    pub fn build(self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match self.values.get(name) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&rest[open..open + close + 2]),
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn placeholders(template: &'static str) -> impl Iterator<Item = &'static str> {
    template.split('{').skip(1).filter_map(|part| part.split_once('}')).map(|(name, _)| name)
}
