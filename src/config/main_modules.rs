use serde::Deserialize;

/// A type-safe wrapper for the plugin's entry modules - the compilation roots.
///
/// Entry modules are the source files the external compiler starts from; every
/// other module reachable from them is compiled implicitly. The descriptor
/// carries them in declaration order and the compiler invocation preserves
/// that order.
///
/// # Examples
///
/// ## Creating entry modules from a vector
/// ```
/// use brunchbox::config::MainModules;
///
/// let modules = MainModules::from(vec![
///     "app/elm/Main.elm".to_string(),
///     "app/elm/Widget.elm".to_string(),
/// ]);
///
/// assert_eq!(modules.0.len(), 2);
/// ```
///
/// ## Building entry modules incrementally
/// ```
/// use brunchbox::config::MainModules;
///
/// let mut modules = MainModules::new();
/// modules.add("app/elm/Main.elm".to_string());
///
/// assert_eq!(modules.iter().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MainModules(pub Vec<String>);

impl MainModules {
    /// Create a new empty entry-module list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an entry module
    pub fn add(&mut self, module_path: String) {
        self.0.push(module_path);
    }

    /// Get iterator over entry modules
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MainModules {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<String>> for MainModules {
    fn from(modules: Vec<String>) -> Self {
        Self(modules)
    }
}

impl From<MainModules> for Vec<String> {
    fn from(value: MainModules) -> Self {
        value.0
    }
}
