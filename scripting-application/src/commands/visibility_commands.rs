use tracing::debug;

use scripting_domain::ports::EquipTarget;

// Thin conveniences over the host's visibility callbacks. Hiding a
// character also hides its name plate so no floating label is left behind.

pub fn set_hidden(target: &mut dyn EquipTarget, hidden: bool) {
    debug!("set_hidden: {}", hidden);
    target.set_visible(!hidden);
    target.set_name_plate_visible(!hidden);
}

pub fn set_name_plate_hidden(target: &mut dyn EquipTarget, hidden: bool) {
    target.set_name_plate_visible(!hidden);
}

pub fn set_pet_hidden(target: &mut dyn EquipTarget, hidden: bool) {
    target.set_pet_visible(!hidden);
}
