/// Ordered set of bank names with toggle semantics.
///
/// Order is selection order, not catalog order. Duplicates are impossible:
/// toggling a present name removes it, toggling an absent one appends it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from names, keeping the first occurrence of each.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for name in names {
            let name = name.into();
            if !selection.contains(&name) {
                selection.items.push(name);
            }
        }
        selection
    }

    /// Flips membership of `name`. Returns `true` if it is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|item| item == name) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(name.to_string());
            true
        }
    }

    /// Replaces the whole selection with a single name, or clears it when
    /// `name` is empty.
    pub fn replace_with(&mut self, name: &str) {
        self.items.clear();
        if !name.is_empty() {
            self.items.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_duplicates(selection: &Selection) -> bool {
        let items = selection.as_slice();
        items
            .iter()
            .enumerate()
            .any(|(i, a)| items[i + 1..].iter().any(|b| a == b))
    }

    #[test]
    fn test_toggle_appends_absent_name() {
        let mut selection = Selection::from_names(["Сбербанк"]);

        assert!(selection.toggle("ВТБ"));
        assert_eq!(selection.as_slice(), ["Сбербанк", "ВТБ"]);
    }

    #[test]
    fn test_toggle_removes_exactly_the_present_name() {
        let mut selection = Selection::from_names(["A", "B", "C"]);

        assert!(!selection.toggle("B"));
        assert_eq!(selection.as_slice(), ["A", "C"]);
    }

    #[test]
    fn test_order_is_selection_order() {
        let mut selection = Selection::new();
        for name in ["C", "A", "B"] {
            selection.toggle(name);
        }

        assert_eq!(selection.as_slice(), ["C", "A", "B"]);
    }

    #[test]
    fn test_toggle_sequences_never_duplicate() {
        let mut selection = Selection::new();
        let sequence = ["A", "B", "A", "C", "B", "B", "A", "C", "D", "A"];

        for name in sequence {
            let was_present = selection.contains(name);
            let len_before = selection.len();
            let now_present = selection.toggle(name);

            assert_eq!(now_present, !was_present);
            if was_present {
                assert_eq!(selection.len(), len_before - 1);
            } else {
                assert_eq!(selection.len(), len_before + 1);
                assert_eq!(selection.as_slice().last().map(String::as_str), Some(name));
            }
            assert!(!has_duplicates(&selection));
        }

        // A toggled 4x, B 3x, C 2x, D 1x
        assert_eq!(selection.as_slice(), ["B", "D"]);
    }

    #[test]
    fn test_from_names_drops_duplicates() {
        let selection = Selection::from_names(["A", "B", "A"]);
        assert_eq!(selection.as_slice(), ["A", "B"]);
    }

    #[test]
    fn test_replace_with_empty_clears() {
        let mut selection = Selection::from_names(["A"]);

        selection.replace_with("B");
        assert_eq!(selection.first(), Some("B"));

        selection.replace_with("");
        assert!(selection.is_empty());
    }
}
