//! Enemy templates keyed by name.
use std::collections::HashMap;

use game_content::EnemyTemplate;

/// Read-only lookup of the enemy templates a scenario may spawn.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, EnemyTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Add a template, replacing any template with the same name.
    pub fn add_template(&mut self, template: EnemyTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn template(&self, name: &str) -> Option<&EnemyTemplate> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<EnemyTemplate> for TemplateRegistry {
    fn from_iter<I: IntoIterator<Item = EnemyTemplate>>(iter: I) -> Self {
        let mut registry = Self::new();
        for template in iter {
            registry.add_template(template);
        }
        registry
    }
}
