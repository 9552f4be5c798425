/// Decides whether the current device is tablet-class.
pub trait DeviceClassifier: Send + Sync {
    fn is_large_form_factor(&self) -> bool;
}

/// Interface idiom reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceIdiom {
    Phone,
    Pad,
    Other,
}

/// Model name plus interface idiom, as reported by the host.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub model: String,
    pub idiom: InterfaceIdiom,
}

impl DeviceProfile {
    pub fn new(model: impl Into<String>, idiom: InterfaceIdiom) -> Self {
        Self {
            model: model.into(),
            idiom,
        }
    }
}

impl DeviceClassifier for DeviceProfile {
    /// Either signal is enough: a pad model running a phone idiom still counts.
    fn is_large_form_factor(&self) -> bool {
        self.model.contains("iPad") || self.idiom == InterfaceIdiom::Pad
    }
}
