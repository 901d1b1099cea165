//! Query parameter store
//!
//! Holds the parameters the manager sends with every request, in insertion
//! order. Most parameters carry a single value; the handful Solr accepts
//! repeatedly (`fq`, `facet.field`, ...) accumulate values instead.

/// Parameters that may appear more than once in a request
const MULTI_VALUED: &[&str] = &[
    "bf",
    "bq",
    "facet.date",
    "facet.date.other",
    "facet.date.include",
    "facet.field",
    "facet.pivot",
    "facet.range",
    "facet.range.other",
    "facet.range.include",
    "facet.query",
    "fq",
    "group.field",
    "group.func",
    "group.query",
    "pf",
    "qf",
    "stats.field",
];

/// Whether `name` may carry several values
pub fn is_multi_valued(name: &str) -> bool {
    MULTI_VALUED.contains(&name)
}

/// A named request parameter and its values
#[derive(Debug, Clone, PartialEq, Eq)]
struct Parameter {
    name: String,
    values: Vec<String>,
}

/// Ordered mapping from parameter name to value(s)
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: Vec<Parameter>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter by value
    ///
    /// Single-valued parameters are replaced in place, keeping their original
    /// position. Multi-valued parameters gain the value unless it is already
    /// present. Returns `true` if the store changed.
    pub fn add_by_value(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        let value = value.into();

        let Some(index) = self.params.iter().position(|p| p.name == name) else {
            self.params.push(Parameter {
                name,
                values: vec![value],
            });
            return true;
        };

        let param = &mut self.params[index];
        if is_multi_valued(&name) {
            if param.values.contains(&value) {
                return false;
            }
            param.values.push(value);
        } else {
            if param.values.len() == 1 && param.values[0] == value {
                return false;
            }
            param.values = vec![value];
        }
        true
    }

    /// First value of a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.find(name)
            .and_then(|p| p.values.first())
            .map(String::as_str)
    }

    /// Every value of a parameter, empty if it is not set
    pub fn values(&self, name: &str) -> &[String] {
        self.find(name).map(|p| p.values.as_slice()).unwrap_or(&[])
    }

    /// Remove one value of a multi-valued parameter
    ///
    /// The parameter disappears once its last value is removed.
    pub fn remove_value(&mut self, name: &str, value: &str) -> bool {
        let Some(index) = self.params.iter().position(|p| p.name == name) else {
            return false;
        };

        let param = &mut self.params[index];
        let before = param.values.len();
        param.values.retain(|v| v != value);
        let changed = param.values.len() != before;

        if param.values.is_empty() {
            self.params.remove(index);
        }
        changed
    }

    /// Remove a parameter entirely
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.params.len();
        self.params.retain(|p| p.name != name);
        self.params.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of distinct parameter names
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Flatten into `(name, value)` pairs in insertion order
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .flat_map(|p| p.values.iter().map(|v| (p.name.clone(), v.clone())))
            .collect()
    }

    /// URL-encoded query string, without a leading `?`
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    fn find(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}
