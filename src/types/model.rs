use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Represents a Gemini model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future models or tuned models)
    Custom(String),
}

/// Known Gemini model versions
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownModel {
    /// Gemini 3 Pro (preview)
    Gemini3ProPreview,

    /// Gemini 2.5 Pro
    Gemini25Pro,

    /// Gemini 2.5 Flash
    Gemini25Flash,

    /// Gemini 2.5 Flash-Lite
    Gemini25FlashLite,
}

impl KnownModel {
    const ALL: [KnownModel; 4] = [
        KnownModel::Gemini3ProPreview,
        KnownModel::Gemini25Pro,
        KnownModel::Gemini25Flash,
        KnownModel::Gemini25FlashLite,
    ];

    /// The identifier used in API paths.
    pub fn as_str(self) -> &'static str {
        match self {
            KnownModel::Gemini3ProPreview => "gemini-3-pro-preview",
            KnownModel::Gemini25Pro => "gemini-2.5-pro",
            KnownModel::Gemini25Flash => "gemini-2.5-flash",
            KnownModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Known(KnownModel::Gemini3ProPreview)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("models/").unwrap_or(s);
        Ok(KnownModel::ALL
            .into_iter()
            .find(|known| known.as_str() == s)
            .map(Model::Known)
            .unwrap_or_else(|| Model::Custom(s.to_string())))
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Model::Custom(model)
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::Custom(model.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model() {
        assert_eq!(Model::default(), Model::Known(KnownModel::Gemini3ProPreview));
        assert_eq!(Model::default().to_string(), "gemini-3-pro-preview");
    }

    #[test]
    fn parse_known_and_custom() {
        let model: Model = "gemini-2.5-flash".parse().unwrap();
        assert_eq!(model, Model::Known(KnownModel::Gemini25Flash));

        let model: Model = "models/gemini-2.5-pro".parse().unwrap();
        assert_eq!(model, Model::Known(KnownModel::Gemini25Pro));

        let model: Model = "tunedModels/my-model".parse().unwrap();
        assert_eq!(model, Model::Custom("tunedModels/my-model".to_string()));
    }

    #[test]
    fn display() {
        let model = Model::Known(KnownModel::Gemini25FlashLite);
        assert_eq!(model.to_string(), "gemini-2.5-flash-lite");

        let model = Model::Custom("gemini-exp".to_string());
        assert_eq!(model.to_string(), "gemini-exp");
    }
}
