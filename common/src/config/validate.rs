/// Checked by [`super::ConfigManager`] on every load and store.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
