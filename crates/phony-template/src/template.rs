//! Compiled templates.

use crate::placeholder::{Placeholder, PLACEHOLDER};
use phony_core::{GeneratorError, Registry};
use rand::RngCore;

/// Something that produces one rendered output per call.
pub trait Render {
    /// Render once, resolving every placeholder with a fresh value.
    ///
    /// Fails on the first placeholder that cannot be resolved; no partial
    /// output is returned.
    fn render(&self, registry: &Registry, rng: &mut dyn RngCore) -> Result<String, GeneratorError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Template text split into literal runs and placeholders.
///
/// Placeholder positions and names are fixed at compile time; only the
/// generated values change between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    literal_len: usize,
}

impl Template {
    /// Scan `text` for placeholders. Never fails: text that is not a
    /// well-formed placeholder is kept as a literal.
    pub fn compile(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal_len = 0;
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                let literal = &text[last..whole.start()];
                literal_len += literal.len();
                segments.push(Segment::Literal(literal.to_string()));
            }
            segments.push(Segment::Placeholder(Placeholder::from_captures(&caps)));
            last = whole.end();
        }

        if last < text.len() {
            let literal = &text[last..];
            literal_len += literal.len();
            segments.push(Segment::Literal(literal.to_string()));
        }

        Self {
            segments,
            literal_len,
        }
    }

    /// Placeholders in the order they appear.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the template renders to the same text every time.
    pub fn is_static(&self) -> bool {
        self.placeholders().next().is_none()
    }
}

impl Render for Template {
    fn render(&self, registry: &Registry, rng: &mut dyn RngCore) -> Result<String, GeneratorError> {
        let mut resolver = registry.resolver(rng);
        let mut out = String::with_capacity(self.literal_len);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let value = resolver.get_with_args(placeholder.name(), placeholder.args())?;
                    out.push_str(&value);
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phony_core::WordList;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> Registry {
        let words = WordList::from_yaml(
            r#"
name.first: [Ada]
name.last: [Lovelace]
"#,
        )
        .unwrap();
        Registry::builtin(&words)
    }

    #[test]
    fn test_no_placeholders_is_unchanged() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        for text in ["", "plain text\n", "{ name }", "{{ }}", "{{ first name }}", "{{ a.b.c }}"] {
            let template = Template::compile(text);
            assert!(template.is_static(), "{text}");
            for _ in 0..3 {
                assert_eq!(template.render(&registry, &mut rng).unwrap(), text);
            }
        }
    }

    #[test]
    fn test_render_name() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        let template = Template::compile("{{ name }}");
        assert_eq!(template.render(&registry, &mut rng).unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_two_placeholders_on_one_line() {
        let words = WordList::from_yaml(
            r#"
name.first: [Ada, Grace]
name.last: [Lovelace, Hopper]
"#,
        )
        .unwrap();
        let registry = Registry::builtin(&words);
        let mut rng = StdRng::seed_from_u64(42);
        let template = Template::compile("{{ name.first }} {{ name.last }}");

        let outputs: std::collections::HashSet<String> = (0..200)
            .map(|_| template.render(&registry, &mut rng).unwrap())
            .collect();

        // Independent lookups produce the mixed pairings too.
        assert!(outputs.contains("Ada Hopper"));
        assert!(outputs.contains("Grace Lovelace"));
        assert_eq!(outputs.len(), 4);
    }

    #[test]
    fn test_literals_around_placeholders() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        let template = Template::compile("<{{name.first}}|{{   name.last }}>\n");
        assert_eq!(
            template.render(&registry, &mut rng).unwrap(),
            "<Ada|Lovelace>\n"
        );
    }

    #[test]
    fn test_malformed_placeholder_kept_literally() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        let template = Template::compile("{{ name- }} {{name.first}}");
        assert_eq!(
            template.render(&registry, &mut rng).unwrap(),
            "{{ name- }} Ada"
        );
    }

    #[test]
    fn test_unknown_generator_fails_without_output() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        let template = Template::compile("{{ name }} {{ nope }}");
        let result = template.render(&registry, &mut rng);
        assert!(matches!(
            result,
            Err(GeneratorError::UnknownGenerator { ref name }) if name == "nope"
        ));
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = Template::compile("{{ id }}-{{ mac.address }}-{{ id:1,2 }}");
        let names: Vec<&str> = template.placeholders().map(Placeholder::name).collect();
        assert_eq!(names, vec!["id", "mac.address", "id"]);

        let args: Vec<Option<&[String]>> =
            template.placeholders().map(Placeholder::args).collect();
        assert_eq!(args[0], None);
        assert_eq!(args[2], Some(&["1".to_string(), "2".to_string()][..]));
    }

    #[test]
    fn test_compile_is_pure() {
        let text = "id={{ id }} ip={{ ipv4 }}\n";
        assert_eq!(Template::compile(text), Template::compile(text));

        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);
        let first = Template::compile(text).render(&registry, &mut rng).unwrap();
        let second = Template::compile(text).render(&registry, &mut rng).unwrap();

        for output in [&first, &second] {
            assert!(output.starts_with("id="), "{output}");
            assert!(output[3..13].chars().all(|c| c.is_ascii_alphanumeric()), "{output}");
            assert_eq!(&output[13..17], " ip=", "{output}");
            assert_eq!(output[17..].trim_end().split('.').count(), 4, "{output}");
            assert!(output.ends_with('\n'), "{output}");
        }
    }

    #[test]
    fn test_multibyte_literals() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(42);

        let template = Template::compile("héllo {{name.first}} ✓");
        assert_eq!(template.render(&registry, &mut rng).unwrap(), "héllo Ada ✓");
    }
}
