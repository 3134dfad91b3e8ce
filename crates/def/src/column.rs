use {crate::DataType, common::pub_fields_struct};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq)]
    struct ColumnMeta {
        /// Name as stored in the source file, case preserved.
        name: String,
        label: String,
        declared_type: DataType,
        /// SAS display format, e.g. `DATE9.` or `$20.`
        format: Option<String>,
        length: Option<usize>,
    }
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, declared_type: DataType) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            declared_type,
            format: None,
            length: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}
