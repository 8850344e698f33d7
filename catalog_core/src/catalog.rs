use crate::config::{CatalogFileConfig, QuestConfig};
use crate::item::Item;
use crate::monster::MonsterTemplate;
use crate::quest::{Quest, QuestStep};
use crate::types::{CharacterClass, ClassTemplate};
use crate::ConfigError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Seed used to instantiate quest templates for the built-in catalog
pub const DEFAULT_CATALOG_SEED: u64 = 0x5EED_0F_C0DE;

const DEFAULT_CATALOG: &str = include_str!("../data/default_catalog.toml");

/// All static game content, validated and indexed
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    item_index: HashMap<String, usize>,
    classes: Vec<ClassTemplate>,
    monsters: Vec<MonsterTemplate>,
    quests: Vec<Quest>,
}

impl Catalog {
    /// Load every `*.toml` file under `dir` (recursively) into one catalog
    ///
    /// Files are read in path order so quest generation is reproducible for a given seed.
    pub fn load(dir: &Path, seed: u64) -> Result<Self, ConfigError> {
        let mut config = CatalogFileConfig::default();
        load_dir(dir, &mut config)?;
        Self::from_config(config, seed)
    }

    /// Parse a single TOML document
    pub fn from_toml_str(content: &str, seed: u64) -> Result<Self, ConfigError> {
        let config: CatalogFileConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse { error: e, path: None })?;
        Self::from_config(config, seed)
    }

    /// The compiled-in content: three classes, the starter items and the four
    /// monster families with their quest templates
    pub fn builtin(seed: u64) -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CATALOG, seed)
    }

    /// Validate and index raw config
    pub fn from_config(config: CatalogFileConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut catalog = Catalog::default();

        for item in config.items {
            if let Some(message) = item.shape_error() {
                return Err(ConfigError::Validation(message));
            }
            if catalog.item_index.contains_key(&item.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            catalog.item_index.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }

        for class in config.classes {
            if catalog.class_template(class.class).is_some() {
                return Err(ConfigError::Validation(format!(
                    "class '{}' defined more than once",
                    class.class
                )));
            }
            catalog.classes.push(class);
        }

        for monster in config.monsters {
            let name = monster.name.clone();
            if catalog.monster(&name).is_some() {
                return Err(ConfigError::Validation(format!(
                    "monster '{}' defined more than once",
                    name
                )));
            }
            let template = MonsterTemplate::from_config(monster).map_err(|e| {
                ConfigError::Validation(format!("monster '{}': {}", name, e))
            })?;
            catalog.check_loot_items(&template)?;
            catalog.monsters.push(template);
        }

        for quest in config.quests {
            let quest = catalog.build_quest(quest)?;
            catalog.push_quest(quest)?;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for template in config.quest_templates {
            if template.steps == 0 {
                return Err(ConfigError::Validation(format!(
                    "quest template '{}' has no steps",
                    template.name
                )));
            }
            let quest = template
                .instantiate(&catalog.monsters, &mut rng)
                .ok_or_else(|| {
                    ConfigError::Validation(format!(
                        "quest template '{}' has no monsters of types {:?}",
                        template.name, template.monster_types
                    ))
                })?;
            catalog.push_quest(quest)?;
        }

        tracing::debug!(
            items = catalog.items.len(),
            classes = catalog.classes.len(),
            monsters = catalog.monsters.len(),
            quests = catalog.quests.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    fn check_loot_items(&self, template: &MonsterTemplate) -> Result<(), ConfigError> {
        for item_id in template.loot().item_ids() {
            if !self.item_index.contains_key(item_id) {
                return Err(ConfigError::Validation(format!(
                    "monster '{}' drops unknown item '{}'",
                    template.name, item_id
                )));
            }
        }
        Ok(())
    }

    fn build_quest(&self, config: QuestConfig) -> Result<Quest, ConfigError> {
        if config.steps.is_empty() {
            return Err(ConfigError::Validation(format!(
                "quest '{}' has no steps",
                config.id
            )));
        }

        let steps = config
            .steps
            .iter()
            .map(|step| {
                self.monster(&step.monster)
                    .map(|template| QuestStep {
                        monster: template.spawn(step.level),
                        completed: false,
                    })
                    .ok_or_else(|| {
                        ConfigError::Validation(format!(
                            "quest '{}' references unknown monster '{}'",
                            config.id, step.monster
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Quest {
            id: config.id,
            name: config.name,
            description: config.description,
            min_level: config.min_level,
            steps,
            experience_reward: config.experience_reward,
            completed: false,
        })
    }

    fn push_quest(&mut self, quest: Quest) -> Result<(), ConfigError> {
        if self.quest(&quest.id).is_some() {
            return Err(ConfigError::Validation(format!(
                "duplicate quest id '{}'",
                quest.id
            )));
        }
        self.quests.push(quest);
        Ok(())
    }

    /// Get an item by ID
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn class_template(&self, class: CharacterClass) -> Option<&ClassTemplate> {
        self.classes.iter().find(|c| c.class == class)
    }

    pub fn classes(&self) -> &[ClassTemplate] {
        &self.classes
    }

    /// Get a monster template by name
    pub fn monster(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|m| m.name == name)
    }

    pub fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    /// Get a quest by ID
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// All quests in catalog order (hand-authored first, then generated)
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }
}

/// Collect catalog files from a directory recursively
fn load_dir(dir: &Path, config: &mut CatalogFileConfig) -> Result<(), ConfigError> {
    if !dir.exists() {
        return Ok(());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(dir.to_path_buf()),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;
        paths.push(entry.path());
    }
    paths.sort();

    for path in paths {
        if path.is_dir() {
            load_dir(&path, config)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            config.merge(load_file(&path)?);
        }
    }

    Ok(())
}

/// Load a single catalog file
fn load_file(path: &Path) -> Result<CatalogFileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(path.to_path_buf()),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        error: e,
        path: Some(path.to_path_buf()),
    })
}
