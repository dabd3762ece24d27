//! A narrated walk through three everyday uses of a [`Deck`]: browser history pushed and popped
//! at the back, a stack of plates worked from the front, and a pancake stack that is drawn while
//! it is eaten.
//!
//! Everything the narration reports comes from deck operations, and empty access is shown as
//! `empty` rather than treated as a failure.

use std::io::Write;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

use crate::{Deck, Error, OnlyChangeCrowdedSide, Result};

/// Largest pancake stack the tour will draw.
pub const MAX_PANCAKES: usize = 32;

const TOP_PANCAKE: &str = " =====*====";
const PANCAKE: &str = " ==========";
const PLATE: &str = "\\__________/";
const RULE: &str = "------------------------------------------------------------";
const SHORT_RULE: &str = "--------------";

/// A part of the tour, named in kebab-case (`browsing`, `stack`, `pancakes`).
#[derive(Display, EnumString, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Browsing,
    Stack,
    Pancakes,
}

/// What the tour pushes into its decks, and which parts of it to show.
///
/// # Examples
/// ```
/// use deck::tour::{Section, Tour};
/// let tour = Tour::new()
///     .pages(["rust-lang.org", "docs.rs"])
///     .detour("crates.io")
///     .sections([Section::Browsing]);
/// let mut out = vec![];
/// tour.render(&mut out).unwrap();
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("Went back to: rust-lang.org"));
/// assert!(out.contains("Current page: crates.io"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pages: Vec<String>,
    detour: String,
    plates: Vec<String>,
    pancakes: usize,
    sections: Vec<Section>,
}

impl Default for Tour {
    fn default() -> Self {
        Self {
            pages: ["google.com", "youtube.com", "ithsdistans.se"]
                .map(String::from)
                .to_vec(),
            detour: "twitter.com".to_string(),
            plates: ["Blue plate", "Red plate", "Green plate"]
                .map(String::from)
                .to_vec(),
            pancakes: 5,
            sections: Section::iter().collect(),
        }
    }
}

fn or_empty<'a>(value: Option<&&'a str>) -> &'a str {
    value.copied().unwrap_or("empty")
}

impl Tour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages visited, oldest first.
    pub fn pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages = pages.into_iter().map(Into::into).collect();
        self
    }

    /// Page visited after going back once.
    pub fn detour<S: Into<String>>(mut self, page: S) -> Self {
        self.detour = page.into();
        self
    }

    /// Plates pushed onto the stack, bottom first.
    pub fn plates<I, S>(mut self, plates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plates = plates.into_iter().map(Into::into).collect();
        self
    }

    pub fn pancakes(mut self, count: usize) -> Self {
        self.pancakes = count;
        self
    }

    /// Sections to render, in order. An empty list keeps every section.
    pub fn sections<I: IntoIterator<Item = Section>>(mut self, sections: I) -> Self {
        let sections: Vec<_> = sections.into_iter().collect();
        self.sections = if sections.is_empty() {
            Section::iter().collect()
        } else {
            sections
        };
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PANCAKES).contains(&self.pancakes) {
            return Err(Error::InvalidValue(format!(
                "invalid pancake count: {} (expected 1..={MAX_PANCAKES})",
                self.pancakes
            )));
        }
        Ok(())
    }

    /// Writes the selected sections to `out`. Nothing is written if the tour is invalid.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        self.validate()?;
        for (i, section) in self.sections.iter().enumerate() {
            debug!(%section, "rendering tour section");
            if i > 0 {
                writeln!(out)?;
            }
            match section {
                Section::Browsing => self.browsing(out)?,
                Section::Stack => self.stack(out)?,
                Section::Pancakes => self.pancake_stack(out)?,
            }
        }
        Ok(())
    }

    /// History only ever grows and shrinks at the back.
    fn browsing<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut history = Deck::new();
        writeln!(out, "=== Browsing the web ===")?;
        writeln!(out, "Visiting, in order: {}", self.pages.join(", "))?;
        for page in &self.pages {
            history.push_back(page.as_str());
        }
        writeln!(out, "Current page: {}", or_empty(history.peek_back()))?;

        history.pop_back();
        writeln!(out, "Going back one page")?;
        writeln!(out, "Went back to: {}", or_empty(history.peek_back()))?;

        writeln!(out, "Oops, we \"accidentally\" ended up on {}", self.detour)?;
        history.push_back(self.detour.as_str());
        writeln!(out, "Current page: {}", or_empty(history.peek_back()))?;
        debug!(depth = history.len(), "browsing history");
        Ok(())
    }

    /// Plates only ever go on and come off at the front.
    fn stack<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut stack = Deck::new().with_rebalance_behavior::<OnlyChangeCrowdedSide>();
        writeln!(out, "=== Using it as a stack ===")?;
        for plate in &self.plates {
            stack.push_front(plate.as_str());
        }

        writeln!(out, "{SHORT_RULE}")?;
        writeln!(out, "Stack at start:")?;
        for plate in stack.iter() {
            writeln!(out, "{plate}")?;
        }
        writeln!(out, "{SHORT_RULE}")?;

        // peeking shows the top plate, popping takes it
        writeln!(out, "Top plate is: {}", or_empty(stack.peek_front()))?;
        while let Some(plate) = stack.pop_front() {
            writeln!(out, "Taking plate: {plate}")?;
        }

        writeln!(out, "Stack is now: {stack:?}")?;
        writeln!(out, "Empty deck peek: {}", or_empty(stack.peek_front()))?;
        writeln!(
            out,
            "Empty deck pop: {}",
            stack.pop_front().unwrap_or("empty")
        )?;
        Ok(())
    }

    /// Draws the stack after every pop until a single pancake is left on the plate.
    fn pancake_stack<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut stack = Deck::new().with_rebalance_behavior::<OnlyChangeCrowdedSide>();
        for i in 1..=self.pancakes {
            stack.push_front(if i == self.pancakes { TOP_PANCAKE } else { PANCAKE });
        }

        writeln!(out, "\n  ~~~ Welcome to the Pancake Stack ~~~\n")?;
        writeln!(out, "A stack of pancakes, eaten from the top with pop_front().\n")?;
        writeln!(out, "{RULE}\n")?;

        loop {
            for pancake in stack.iter() {
                writeln!(out, "{pancake}")?;
            }
            writeln!(out, "{PLATE}\n")?;
            if stack.len() <= 1 {
                break;
            }
            writeln!(out, "Now we pop_front() the top pancake\n")?;
            writeln!(out, "{RULE}\n")?;
            stack.pop_front();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn render(tour: &Tour) -> String {
        let mut out = vec![];
        tour.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_browsing() {
        let out = render(&Tour::new().sections([Section::Browsing]));
        assert_eq!(
            out,
            indoc! {r#"
                === Browsing the web ===
                Visiting, in order: google.com, youtube.com, ithsdistans.se
                Current page: ithsdistans.se
                Going back one page
                Went back to: youtube.com
                Oops, we "accidentally" ended up on twitter.com
                Current page: twitter.com
            "#}
        );
    }

    #[test]
    fn browsing_without_history() {
        let out = render(&Tour::new().pages(Vec::<String>::new()).sections([Section::Browsing]));
        assert!(out.contains("Current page: empty\n"));
        assert!(out.contains("Went back to: empty\n"));
        assert!(out.ends_with("Current page: twitter.com\n"));
    }

    #[test]
    fn default_stack() {
        let out = render(&Tour::new().sections([Section::Stack]));
        assert_eq!(
            out,
            indoc! {"
                === Using it as a stack ===
                --------------
                Stack at start:
                Green plate
                Red plate
                Blue plate
                --------------
                Top plate is: Green plate
                Taking plate: Green plate
                Taking plate: Red plate
                Taking plate: Blue plate
                Stack is now: []
                Empty deck peek: empty
                Empty deck pop: empty
            "}
        );
    }

    #[test]
    fn pancakes_are_eaten_from_the_top() {
        let out = render(&Tour::new().pancakes(2).sections([Section::Pancakes]));
        let drawing = indoc! {r"
             =====*====
             ==========
            \__________/

            Now we pop_front() the top pancake

            ------------------------------------------------------------

             ==========
            \__________/
        "};
        assert!(out.contains("~~~ Welcome to the Pancake Stack ~~~"));
        assert!(out.ends_with(&format!("{drawing}\n")));
        // the starred pancake is only ever drawn once
        assert_eq!(out.matches(TOP_PANCAKE).count(), 1);
    }

    #[test]
    fn pancake_rounds() {
        let out = render(&Tour::new().sections([Section::Pancakes]));
        assert_eq!(out.matches(PLATE).count(), 5);
        assert_eq!(out.matches("pop_front() the top pancake").count(), 4);
        assert_eq!(out.matches(PANCAKE).count(), 4 + 4 + 3 + 2 + 1);
    }

    #[test]
    fn sections_render_in_order() {
        let out = render(&Tour::new().sections([Section::Pancakes, Section::Browsing]));
        let pancakes = out.find("Pancake Stack").unwrap();
        let browsing = out.find("Browsing the web").unwrap();
        assert!(pancakes < browsing);
        assert!(!out.contains("Using it as a stack"));

        let all = render(&Tour::new().sections(Vec::new()));
        assert_eq!(all, render(&Tour::default()));
    }

    #[test]
    fn section_names() {
        assert_eq!(Section::Browsing.to_string(), "browsing");
        assert_eq!("pancakes".parse::<Section>().unwrap(), Section::Pancakes);
        assert!("plates".parse::<Section>().is_err());
    }

    #[test]
    fn invalid_pancake_counts() {
        for count in [0, MAX_PANCAKES + 1] {
            let tour = Tour::new().pancakes(count);
            let mut out = vec![];
            let err = tour.render(&mut out).unwrap_err();
            assert!(matches!(err, Error::InvalidValue(_)));
            assert!(err.to_string().starts_with(&format!("invalid pancake count: {count}")));
            assert!(out.is_empty());
        }
        assert!(Tour::new().pancakes(MAX_PANCAKES).validate().is_ok());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_propagate() {
        let err = Tour::new().render(&mut Broken).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "closed");
    }
}
