use chrono::Local;

pub const TIME_PLACEHOLDER: &str = "{time}";

/// Current local date-time, e.g. `2024-05-01T13:37:00.123456789`.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Replaces every `{time}` in `template` with `time`. Nothing else changes.
pub fn render(template: &str, time: &str) -> String {
    template.replace(TIME_PLACEHOLDER, time)
}
