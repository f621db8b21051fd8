//! Browser session storage of the currently selected design
//!
//! The blob is written when a design is picked and read back when the
//! application starts, so a reload keeps the order form on the same design.

use contracts::domain::a001_design_delivery::DesignDelivery;
use web_sys::window;

pub const SELECTED_DESIGN_KEY: &str = "selected-design";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn save_selected_design(delivery: &DesignDelivery) {
    let Some(storage) = storage() else {
        return;
    };
    match delivery.to_session_blob() {
        Ok(blob) => {
            let _ = storage.set_item(SELECTED_DESIGN_KEY, &blob);
        }
        Err(e) => log::warn!("Failed to store selected design: {}", e),
    }
}

pub fn load_selected_design() -> Option<DesignDelivery> {
    let blob = storage()?.get_item(SELECTED_DESIGN_KEY).ok().flatten()?;
    match DesignDelivery::from_session_blob(&blob) {
        Ok(delivery) => Some(delivery),
        Err(e) => {
            log::warn!("Ignoring stored design: {:#}", e);
            clear_selected_design();
            None
        }
    }
}

pub fn clear_selected_design() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SELECTED_DESIGN_KEY);
    }
}
