//! In-memory page document
//!
//! [`Document`] implements [`Page`] over a [`Layout`] and serializes the
//! result as a static HTML page. Sections detached from the main element
//! are kept so they can be attached again, but are not serialized.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{Layout, Page, PageError, SectionLayout};

#[derive(Debug)]
struct State {
    navigation: String,

    /// Ids of the sections attached to the main element, in order
    main: Vec<String>,

    /// Inner HTML of every content container
    containers: HashMap<String, String>,
}

/// A page built from a layout
#[derive(Debug)]
pub struct Document {
    title: String,
    stylesheets: Vec<String>,
    header: Vec<String>,
    footer: Vec<String>,
    sections: HashMap<String, SectionLayout>,
    state: Mutex<State>,
}

impl Document {
    /// Creates the page in its default state: every section attached in
    /// layout order, one nav link per section, empty containers.
    pub fn new(layout: Layout) -> Self {
        let navigation = layout
            .sections
            .iter()
            .map(|s| format!(r##"<a href="#{}">{}</a>"##, s.id, s.title))
            .collect::<String>();
        let main = layout.sections.iter().map(|s| s.id.clone()).collect();

        let containers = layout
            .header
            .iter()
            .chain(layout.footer.iter())
            .chain(layout.sections.iter().flat_map(|s| s.containers.iter()))
            .map(|id| (id.clone(), String::new()))
            .collect();

        let sections = layout
            .sections
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();

        Self {
            title: layout.title,
            stylesheets: layout.stylesheets,
            header: layout.header,
            footer: layout.footer,
            sections,
            state: Mutex::new(State {
                navigation,
                main,
                containers,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn require_section(&self, id: &str) -> Result<(), PageError> {
        if self.sections.contains_key(id) {
            Ok(())
        } else {
            Err(PageError::MissingElement(id.to_string()))
        }
    }

    /// Current navigation markup
    pub fn navigation(&self) -> String {
        self.state().navigation.clone()
    }

    /// Ids of the attached sections, in page order
    pub fn main_order(&self) -> Vec<String> {
        self.state().main.clone()
    }

    /// Current inner HTML of a container
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.state().containers.get(id).cloned()
    }

    /// Serializes the page as a complete HTML document
    pub fn to_html(&self) -> String {
        let state = self.state();
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str(&format!("    <title>{}</title>\n", self.title));
        for href in &self.stylesheets {
            out.push_str(&format!("    <link rel=\"stylesheet\" href=\"{}\">\n", href));
        }
        out.push_str("</head>\n<body>\n");

        out.push_str("    <header>\n");
        for id in &self.header {
            push_container(&mut out, &state, id, 2);
        }
        out.push_str("    </header>\n");

        out.push_str(&format!("    <nav>{}</nav>\n", state.navigation));

        out.push_str("    <main>\n");
        for id in &state.main {
            let Some(section) = self.sections.get(id) else {
                continue;
            };
            out.push_str(&format!("        <section id=\"{}\">\n", section.id));
            if !section.title.is_empty() {
                out.push_str(&format!("            <h2>{}</h2>\n", section.title));
            }
            for container in &section.containers {
                push_container(&mut out, &state, container, 3);
            }
            out.push_str("        </section>\n");
        }
        out.push_str("    </main>\n");

        out.push_str("    <footer>\n");
        for id in &self.footer {
            push_container(&mut out, &state, id, 2);
        }
        out.push_str("    </footer>\n");

        out.push_str("</body>\n</html>\n");
        out
    }
}

fn push_container(out: &mut String, state: &State, id: &str, depth: usize) {
    let indent = "    ".repeat(depth);
    let inner = state.containers.get(id).map(String::as_str).unwrap_or_default();
    out.push_str(&format!("{}<div id=\"{}\">{}</div>\n", indent, id, inner));
}

impl Page for Document {
    fn set_inner_html(&self, id: &str, html: String) -> Result<(), PageError> {
        let mut state = self.state();
        match state.containers.get_mut(id) {
            Some(slot) => {
                *slot = html;
                Ok(())
            }
            None => Err(PageError::MissingElement(id.to_string())),
        }
    }

    fn set_navigation(&self, html: String) -> Result<(), PageError> {
        self.state().navigation = html;
        Ok(())
    }

    fn has_section(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    fn detach_section(&self, id: &str) -> Result<(), PageError> {
        self.require_section(id)?;
        self.state().main.retain(|s| s != id);
        Ok(())
    }

    fn append_section(&self, id: &str) -> Result<(), PageError> {
        self.require_section(id)?;
        let mut state = self.state();
        state.main.retain(|s| s != id);
        state.main.push(id.to_string());
        Ok(())
    }

    fn prepend_section(&self, id: &str) -> Result<(), PageError> {
        self.require_section(id)?;
        let mut state = self.state();
        state.main.retain(|s| s != id);
        state.main.insert(0, id.to_string());
        Ok(())
    }
}
