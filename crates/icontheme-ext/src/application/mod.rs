//! Application layer for the icon theme extension.
//!
//! - **`ports`** – the traits through which the workflow reaches the outside
//!   world: the configuration store, the host's choice picker and reload
//!   prompt, the reload action, and the localization service.  Concrete
//!   adapters live in the infrastructure layer and are injected at
//!   construction time.
//!
//! - **`toggle_icons`** – the toggle workflow use case itself: query status,
//!   present the On/Off picker, apply the chosen rule change, and offer a
//!   reload.
//!
//! **Dependency rule**: this layer may depend on `icontheme_core`, but MUST
//! NOT import anything from `infrastructure`.

pub mod ports;
pub mod toggle_icons;

pub use ports::{ChoicePicker, HostReloader, IconStore, PickItem, ReloadPrompt, StoreError, Translator};
pub use toggle_icons::IconGroupCommands;
