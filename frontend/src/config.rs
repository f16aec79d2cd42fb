use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Watcher transitions show up in the console during development
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
