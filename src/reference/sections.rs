/// Plain-text article split into its lead and `== Heading ==` sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSections {
    lead: String,
    sections: Vec<(String, String)>,
}

impl ArticleSections {
    /// Splits a plain-text extract on heading lines.
    ///
    /// A line that both starts and ends with `==` opens a section named by the
    /// line with `=` stripped and then whitespace trimmed. Every other line is
    /// appended, followed by `\n`, to the current section. Text before the
    /// first heading is the lead.
    pub fn parse(text: &str) -> Self {
        let mut parsed = Self::default();

        for line in text.split('\n') {
            if line.starts_with("==") && line.ends_with("==") {
                let name = line.trim_matches('=').trim().to_string();
                parsed.sections.push((name, String::new()));
                continue;
            }

            let body = match parsed.sections.last_mut() {
                Some((_, body)) => body,
                None => &mut parsed.lead,
            };
            body.push_str(line);
            body.push('\n');
        }

        parsed
    }

    /// Untitled leading section.
    pub fn lead(&self) -> &str {
        &self.lead
    }

    /// Body of the last section named `name`, if any.
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|(title, _)| title == name)
            .map(|(_, body)| body.as_str())
    }

    /// Section names in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(title, _)| title.as_str())
    }

    pub fn into_lead(self) -> String {
        self.lead
    }
}
