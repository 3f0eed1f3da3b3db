//! Keyword rules that map transaction descriptions to spending categories.
//!
//! Rule files look like:
//!
//! ```text
//! # groceries and eating out
//! class: Food
//! include: auto mercado, walmart, starbucks
//! exclude: gasolinera
//! ```
//!
//! Categories are tried in file order and the first one that matches wins.
//! An exclude keyword only removes its own category from consideration;
//! later categories can still claim the description.

/// One category with its keyword lists. Keywords are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, E, S, T>(name: impl Into<String>, include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            name: name.into(),
            include: keywords(include),
            exclude: keywords(exclude),
        }
    }

    fn excludes(&self, normalized: &str) -> bool {
        self.exclude.iter().any(|k| contains_word(normalized, k))
    }

    fn includes(&self, normalized: &str) -> bool {
        self.include.iter().any(|k| contains_word(normalized, k))
    }
}

/// Ordered, immutable set of category rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    categories: Vec<CategoryRule>,
}

impl RuleSet {
    pub fn new(categories: Vec<CategoryRule>) -> Self {
        Self { categories }
    }

    /// Parse the line-oriented rule file format.
    ///
    /// Never fails: unknown lines are skipped. A repeated `class:` name
    /// reopens the existing category in place and appends to its keywords.
    pub fn parse(text: &str) -> Self {
        let mut categories: Vec<CategoryRule> = Vec::new();
        let mut current: Option<usize> = None;

        for line in text.lines() {
            let line = line.trim().to_lowercase();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix("class:") {
                let name = rest.trim();
                let existing = if name.is_empty() {
                    None
                } else {
                    let titled = title_case(name);
                    categories.iter().position(|c| c.name == titled)
                };
                current = Some(match existing {
                    Some(idx) => idx,
                    None => open_category(&mut categories, name),
                });
            } else if let Some(rest) = line.strip_prefix("include:") {
                let idx = *current.get_or_insert_with(|| open_category(&mut categories, ""));
                categories[idx].include.extend(split_keywords(rest));
            } else if let Some(rest) = line.strip_prefix("exclude:") {
                let idx = *current.get_or_insert_with(|| open_category(&mut categories, ""));
                categories[idx].exclude.extend(split_keywords(rest));
            }
        }

        Self { categories }
    }

    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn classify(&self, description: &str) -> &str {
        classify(description, self)
    }
}

/// Category for `description`, or `""` when nothing matches.
pub fn classify<'r>(description: &str, rules: &'r RuleSet) -> &'r str {
    let normalized = normalize_description(description);
    for category in &rules.categories {
        if category.excludes(&normalized) {
            continue;
        }
        if category.includes(&normalized) {
            return &category.name;
        }
    }
    ""
}

/// Lower-case, turn `.`, `*` and `-` into spaces, collapse whitespace and pad
/// with one space on each side so keywords match on word boundaries.
pub fn normalize_description(description: &str) -> String {
    let lowered = description
        .to_lowercase()
        .replace(['.', '*', '-'], " ");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    format!(" {collapsed} ")
}

fn contains_word(normalized: &str, keyword: &str) -> bool {
    normalized.contains(&format!(" {keyword} "))
}

fn open_category(categories: &mut Vec<CategoryRule>, name: &str) -> usize {
    let name = if name.is_empty() {
        format!("temp{}", categories.len() + 1)
    } else {
        title_case(name)
    };
    categories.push(CategoryRule {
        name,
        include: Vec::new(),
        exclude: Vec::new(),
    });
    categories.len() - 1
}

fn split_keywords(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

fn keywords<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Upper-case the first letter of every alphabetic run.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_words() -> [&'static str; 0] {
        []
    }

    #[test]
    fn test_first_match_wins() {
        let rules = RuleSet::new(vec![
            CategoryRule::new("A", ["food"], no_words()),
            CategoryRule::new("B", ["uber eats food"], ["food"]),
        ]);
        assert_eq!(classify("food truck", &rules), "A");
    }

    #[test]
    fn test_exclusion_does_not_leak_into_other_categories() {
        let rules = RuleSet::new(vec![
            CategoryRule::new("B", ["uber eats food"], ["food"]),
            CategoryRule::new("A", ["food"], no_words()),
        ]);
        assert_eq!(classify("food truck", &rules), "A");
        assert_eq!(classify("Uber Eats Food", &rules), "A");
    }

    #[test]
    fn test_keywords_match_whole_words() {
        let rules = RuleSet::new(vec![CategoryRule::new("Travel", ["plat"], no_words())]);
        assert_eq!(classify("platform fee", &rules), "");
        assert_eq!(classify("PLAT fee", &rules), "Travel");
    }

    #[test]
    fn test_punctuation_becomes_word_breaks() {
        let rules = RuleSet::new(vec![CategoryRule::new(
            "Online",
            ["amazon com", "uber eats"],
            no_words(),
        )]);
        assert_eq!(classify("AMAZON.COM*2K4", &rules), "Online");
        assert_eq!(classify("UBER-EATS   San Jose", &rules), "Online");
    }

    #[test]
    fn test_no_match_is_empty() {
        let rules = RuleSet::new(vec![CategoryRule::new("Food", ["pizza"], no_words())]);
        assert_eq!(rules.classify("hardware store"), "");
        assert_eq!(RuleSet::default().classify("pizza"), "");
    }

    #[test]
    fn test_parse_rule_file() {
        let text = "\
# comment line
class: food and drinks
include: Starbucks,  Auto Mercado , ,pizza
exclude: gasolinera

CLASS: transport
include: uber
exclude: uber eats
notes: ignored entirely
";
        let rules = RuleSet::parse(text);
        assert_eq!(rules.len(), 2);
        let food = &rules.categories()[0];
        assert_eq!(food.name, "Food And Drinks");
        assert_eq!(food.include, vec!["starbucks", "auto mercado", "pizza"]);
        assert_eq!(food.exclude, vec!["gasolinera"]);

        let transport = &rules.categories()[1];
        assert_eq!(transport.name, "Transport");
        assert_eq!(rules.classify("UBER EATS pizza"), "Food And Drinks");
        assert_eq!(rules.classify("Uber trip"), "Transport");
        assert_eq!(rules.classify("Uber Eats order"), "");
    }

    #[test]
    fn test_unnamed_classes_get_placeholders() {
        let text = "include: orphan\nclass:\ninclude: a\nclass: named\nclass:\ninclude: b\n";
        let rules = RuleSet::parse(text);
        let names: Vec<_> = rules.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["temp1", "temp2", "Named", "temp4"]);
        assert_eq!(rules.classify("orphan"), "temp1");
    }

    #[test]
    fn test_repeated_class_reopens_in_place() {
        let text = "class: food\ninclude: pizza\nclass: fun\ninclude: cine\nclass: Food\ninclude: sushi\n";
        let rules = RuleSet::parse(text);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.categories()[0].include, vec!["pizza", "sushi"]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("gas & car"), "Gas & Car");
        assert_eq!(title_case("o'neil 2go"), "O'Neil 2Go");
    }
}
