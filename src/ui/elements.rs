use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Reference to an image the host engine knows how to load
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAsset(String);

impl ImageAsset {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// What kind of element a name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Visual,
    Label,
}

/// A named panel element whose image or text the customizer may replace
#[derive(Debug, Clone, PartialEq)]
pub struct UiElement {
    pub kind: ElementKind,
    pub background_image: Option<ImageAsset>,
    pub text: Option<String>,
}

impl UiElement {
    pub fn visual() -> Self {
        Self {
            kind: ElementKind::Visual,
            background_image: None,
            text: None,
        }
    }

    pub fn label() -> Self {
        Self {
            kind: ElementKind::Label,
            background_image: None,
            text: None,
        }
    }

    pub fn set_background_image(&mut self, image: &ImageAsset) {
        self.background_image = Some(image.clone());
    }
}

/// Root of an act panel: element name to element
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    elements: FxHashMap<String, UiElement>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, element: UiElement) -> Self {
        self.insert(name, element);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, element: UiElement) {
        self.elements.insert(name.into(), element);
    }

    /// Any element with this name
    pub fn query(&mut self, name: &str) -> Option<&mut UiElement> {
        self.elements.get_mut(name)
    }

    /// Only a label element with this name
    pub fn query_label(&mut self, name: &str) -> Option<&mut UiElement> {
        self.elements
            .get_mut(name)
            .filter(|element| element.kind == ElementKind::Label)
    }

    pub fn get(&self, name: &str) -> Option<&UiElement> {
        self.elements.get(name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
