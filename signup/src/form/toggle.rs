//! Show/hide password icons.

use log::debug;

use super::port::VisibilityPort;
use crate::error::DomError;

/// Class identifying a visibility icon.
pub const ICON_CLASS: &str = "password-icon";

/// Class of the input an icon controls, looked up in the icon's parent.
pub const INPUT_CLASS: &str = "form-control";

/// Marker present on an icon while its input shows plain text.
pub const OPEN_EYE_CLASS: &str = "fa-eye";

/// Whether an input hides its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Masking {
    Masked,
    Plain,
}

impl Masking {
    pub fn flipped(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }
}

/// One icon and the input it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBinding {
    pub icon_id: String,
    pub input_id: String,
}

impl ToggleBinding {
    /// Flip the input's masking and the icon's open-eye marker.
    pub fn click<P: VisibilityPort + ?Sized>(&self, port: &mut P) -> Result<Masking, DomError> {
        let next = port.masking(&self.input_id)?.flipped();
        port.set_masking(&self.input_id, next)?;
        let open = port.toggle_class(&self.icon_id, OPEN_EYE_CLASS)?;
        debug!(
            "icon '{}' toggled '{}' to {:?} (open eye: {})",
            self.icon_id, self.input_id, next, open
        );
        Ok(next)
    }
}

/// Click handlers for every visibility icon on a page.
#[derive(Debug, Clone, Default)]
pub struct PasswordToggle {
    bindings: Vec<ToggleBinding>,
}

impl PasswordToggle {
    /// Bind every icon present on the page to the input next to it.
    pub fn attach<P: VisibilityPort + ?Sized>(port: &P) -> Result<Self, DomError> {
        let bindings = port
            .elements_with_class(ICON_CLASS)
            .into_iter()
            .map(|icon_id| {
                let input_id = port.query_in_parent(&icon_id, INPUT_CLASS)?;
                Ok(ToggleBinding { icon_id, input_id })
            })
            .collect::<Result<Vec<_>, DomError>>()?;

        debug!("attached {} visibility toggle(s)", bindings.len());
        Ok(Self { bindings })
    }

    pub fn bindings(&self) -> &[ToggleBinding] {
        &self.bindings
    }

    /// Dispatch a click on `target`. Returns false if no icon has that id.
    pub fn handle_click<P: VisibilityPort + ?Sized>(
        &self,
        port: &mut P,
        target: &str,
    ) -> Result<bool, DomError> {
        match self.bindings.iter().find(|b| b.icon_id == target) {
            Some(binding) => {
                binding.click(port)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
