/// Packages the user keeps for reinstallation, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    packages: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, package: &str, selected: bool) {
        if selected {
            if !self.contains(package) {
                self.packages.push(package.to_string());
            }
        } else if let Some(pos) = self.packages.iter().position(|p| p == package) {
            self.packages.remove(pos);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.packages.clone()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
