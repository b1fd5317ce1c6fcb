/// Destination for the serialized geometry, typically a hidden form field.
pub trait OutputSink {
    /// Replaces the whole value.
    fn write(&mut self, value: &str);

    fn read(&self) -> &str;

    fn clear(&mut self) {
        self.write("");
    }
}

/// A named text field as it would be submitted with a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    name: String,
    value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl OutputSink for FormField {
    fn write(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    fn read(&self) -> &str {
        &self.value
    }
}
