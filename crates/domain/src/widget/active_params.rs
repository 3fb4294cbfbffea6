use range_filter_shared_kernel::ParamName;

/// Parameters that rendered a widget during the current request.
///
/// Owned by the request pipeline: create one per request and pass it to every
/// filter that describes a widget. Entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilterParams {
    names: Vec<ParamName>,
}

impl ActiveFilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: ParamName) {
        self.names.push(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_vec(self) -> Vec<ParamName> {
        self.names
    }
}
