pub mod create_wizard;

pub use create_wizard::{toggle_selection, CreateWizard, WizardStep};
