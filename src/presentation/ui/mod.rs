//! UI screens.

mod app;
mod backend;
mod campaigns_screen;
mod home_screen;
mod personas_screen;
mod route;
mod scope;
mod studio_screen;
mod utils;
mod wizard_screen;

pub use app::App;
pub use backend::{Action, Backend, BackendCommand, BackendPorts, ScopedAction, ScopedCommand};
pub use campaigns_screen::{CampaignsAction, CampaignsScreen};
pub use home_screen::{HealthState, HomeAction, HomeScreen};
pub use personas_screen::{PersonasAction, PersonasScreen};
pub use route::Route;
pub use scope::{ScopeTracker, ViewId, ViewScope};
pub use studio_screen::{StudioAction, StudioFocus, StudioScreen};
pub use wizard_screen::{WizardAction, WizardField, WizardScreen, WizardStep};
