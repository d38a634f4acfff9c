pub(crate) mod cursor;
pub(crate) mod device;
pub(crate) mod frame;
pub(crate) mod heartbeat;
pub(crate) mod menu;
pub(crate) mod menu_overlay;
pub(crate) mod overlay;
