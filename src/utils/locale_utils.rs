use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Th,
}

impl Lang {
    pub fn from_code(code: &str) -> Self {
        match code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "th" => Self::Th,
            "en" => Self::En,
            _ => Self::En,
        }
    }

    pub fn folder(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Th => "th",
        }
    }
}

fn load_message_file(dir: &Path, lang: Lang, namespace: &Namespace) -> Value {
    let file_path = dir
        .join(lang.folder())
        .join(format!("{}.json", namespace.as_str()));

    match fs::read_to_string(&file_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(json) => {
                log::debug!("Loaded messages from {:?}", file_path);
                json
            }
            Err(err) => {
                log::warn!("Failed to parse JSON from {:?}: {}", file_path, err);
                Value::Null
            }
        },
        Err(err) => {
            log::warn!("Failed to read file {:?}: {}", file_path, err);
            Value::Null
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Namespace {
    Validation,
    Form,
}

impl Namespace {
    fn as_str(&self) -> &'static str {
        match self {
            Namespace::Validation => "validation",
            Namespace::Form => "form",
        }
    }
}

/// Localized message catalogue. Lookups that miss fall back to the
/// caller-supplied English text, so `Messages::default()` is fully usable.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    pub lang: Lang,
    pub form: Value,
    pub validation: Value,
}

impl Messages {
    pub fn load(dir: impl AsRef<Path>, lang: Lang) -> Self {
        let dir = dir.as_ref();
        Self {
            lang,
            form: load_message_file(dir, lang, &Namespace::Form),
            validation: load_message_file(dir, lang, &Namespace::Validation),
        }
    }

    pub fn get(&self, namespace: &Namespace, path: &str) -> Option<&Value> {
        let root = match namespace {
            Namespace::Form => &self.form,
            Namespace::Validation => &self.validation,
        };

        let mut current = root;
        for key in path.split('.') {
            match current.get(key) {
                Some(next) => {
                    current = next;
                }
                None => {
                    log::debug!(
                        "Key '{}' not found in path '{}.{}'",
                        key,
                        namespace.as_str(),
                        path
                    );
                    return None;
                }
            }
        }

        Some(current)
    }

    pub fn get_str(&self, namespace: Namespace, path: &str, fallback: &str) -> String {
        self.get(&namespace, path)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn get_validation_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Validation, path, fallback)
    }

    pub fn get_form_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Form, path, fallback)
    }
}
