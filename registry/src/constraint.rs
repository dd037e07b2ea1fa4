//! Constraint descriptors.
//!
//! A [`Constraint`] is an immutable rule: a kind tag, a bag of named options,
//! message templates and the groups it belongs to. Constraints are built once
//! through [`ConstraintBuilder`] and never mutated by validation.

use assay_core::{ConstraintId, GroupName, ValidationError, ValidationResult, Value};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Next constraint ID to allocate.
static NEXT_CONSTRAINT_ID: AtomicU32 = AtomicU32::new(1);

fn next_constraint_id() -> ConstraintId {
    ConstraintId::new(NEXT_CONSTRAINT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Static description of a constraint variant.
///
/// The `name` is the tag checkers are registered under.
#[derive(Debug)]
pub struct ConstraintKind {
    /// Tag name (e.g. "Length").
    pub name: &'static str,
    /// Accepted option names, excluding message options.
    pub options: &'static [&'static str],
    /// Options that must be given.
    pub required: &'static [&'static str],
    /// Option a sole positional value is assigned to.
    pub default_option: Option<&'static str>,
    /// Message option names with their default templates.
    pub messages: &'static [(&'static str, &'static str)],
}

impl ConstraintKind {
    fn accepts(&self, option: &str) -> bool {
        self.options.contains(&option)
    }

    fn default_message(&self, key: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }
}

impl PartialEq for ConstraintKind {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ConstraintKind {}

/// Value of a constraint option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Plain data (bounds, patterns, flags).
    Value(Value),
    /// Nested constraints applied to a sub-value.
    Rules(Vec<Constraint>),
    /// Per-field rules of a structured map.
    Fields(Vec<Field>),
}

impl OptionValue {
    fn nested_mut(&mut self) -> Vec<&mut Constraint> {
        match self {
            OptionValue::Value(_) => Vec::new(),
            OptionValue::Rules(rules) => rules.iter_mut().collect(),
            OptionValue::Fields(fields) => fields
                .iter_mut()
                .flat_map(|f| f.rule.constraints_mut().iter_mut())
                .collect(),
        }
    }

    fn nested(&self) -> Vec<&Constraint> {
        match self {
            OptionValue::Value(_) => Vec::new(),
            OptionValue::Rules(rules) => rules.iter().collect(),
            OptionValue::Fields(fields) => fields
                .iter()
                .flat_map(|f| f.rule.constraints().iter())
                .collect(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            OptionValue::Value(v) => v.type_name(),
            OptionValue::Rules(_) => "constraints",
            OptionValue::Fields(_) => "fields",
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        OptionValue::Value(value)
    }
}

macro_rules! option_value_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    OptionValue::Value(Value::from(value))
                }
            }
        )+
    };
}

option_value_from!(bool, i32, i64, f64, &str, String);

impl From<Vec<Constraint>> for OptionValue {
    fn from(rules: Vec<Constraint>) -> Self {
        OptionValue::Rules(rules)
    }
}

impl From<Constraint> for OptionValue {
    fn from(rule: Constraint) -> Self {
        OptionValue::Rules(vec![rule])
    }
}

impl From<Vec<Field>> for OptionValue {
    fn from(fields: Vec<Field>) -> Self {
        OptionValue::Fields(fields)
    }
}

/// How a declared structured-map field treats absence.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Always mandatory.
    Required(Vec<Constraint>),
    /// Never mandatory.
    Optional(Vec<Constraint>),
    /// Mandatory unless missing fields are allowed globally.
    Implicit(Vec<Constraint>),
}

impl FieldRule {
    /// Rules applied to the field value when present.
    pub fn constraints(&self) -> &[Constraint] {
        match self {
            FieldRule::Required(rules) | FieldRule::Optional(rules) | FieldRule::Implicit(rules) => {
                rules
            }
        }
    }

    fn constraints_mut(&mut self) -> &mut Vec<Constraint> {
        match self {
            FieldRule::Required(rules) | FieldRule::Optional(rules) | FieldRule::Implicit(rules) => {
                rules
            }
        }
    }
}

/// A declared field of a structured map.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub rule: FieldRule,
}

impl Field {
    /// Field whose requiredness follows the map rule's global flags.
    pub fn new(name: impl Into<String>, rules: Vec<Constraint>) -> Self {
        Self {
            name: name.into(),
            rule: FieldRule::Implicit(rules),
        }
    }

    pub fn required(name: impl Into<String>, rules: Vec<Constraint>) -> Self {
        Self {
            name: name.into(),
            rule: FieldRule::Required(rules),
        }
    }

    pub fn optional(name: impl Into<String>, rules: Vec<Constraint>) -> Self {
        Self {
            name: name.into(),
            rule: FieldRule::Optional(rules),
        }
    }
}

/// An immutable validation rule.
#[derive(Debug, Clone)]
pub struct Constraint {
    id: ConstraintId,
    kind: &'static ConstraintKind,
    options: Vec<(String, OptionValue)>,
    messages: Vec<(String, String)>,
    groups: Vec<GroupName>,
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Constraint {
    /// Start building a constraint of the given kind.
    pub fn builder(kind: &'static ConstraintKind) -> ConstraintBuilder {
        ConstraintBuilder {
            kind,
            options: Vec::new(),
            positional: None,
            messages: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn id(&self) -> ConstraintId {
        self.id
    }

    pub fn kind(&self) -> &'static ConstraintKind {
        self.kind
    }

    /// Tag name of this constraint's kind.
    pub fn name(&self) -> &'static str {
        self.kind.name
    }

    pub fn groups(&self) -> &[GroupName] {
        &self.groups
    }

    /// Check membership in a group.
    pub fn in_group(&self, group: &GroupName) -> bool {
        self.groups.contains(group)
    }

    /// First group of `batch` this constraint belongs to.
    pub fn matching_group<'b>(&self, batch: &'b [GroupName]) -> Option<&'b GroupName> {
        batch.iter().find(|g| self.in_group(g))
    }

    /// Get a raw option.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Get a plain option value. Absent and `null` both read as `None`.
    pub fn value_option(&self, name: &str) -> ValidationResult<Option<&Value>> {
        match self.option(name) {
            None | Some(OptionValue::Value(Value::Null)) => Ok(None),
            Some(OptionValue::Value(v)) => Ok(Some(v)),
            Some(other) => Err(self.bad_option(name, "a value", other.describe())),
        }
    }

    /// Get an integer option.
    pub fn int_option(&self, name: &str) -> ValidationResult<Option<i64>> {
        match self.value_option(name)? {
            None => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            Some(other) => Err(self.bad_option(name, "an integer", other.type_name())),
        }
    }

    /// Get a numeric option, widening integers.
    pub fn number_option(&self, name: &str) -> ValidationResult<Option<f64>> {
        match self.value_option(name)? {
            None => Ok(None),
            Some(v) => v
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.bad_option(name, "a number", v.type_name())),
        }
    }

    /// Get a string option.
    pub fn str_option(&self, name: &str) -> ValidationResult<Option<&str>> {
        match self.value_option(name)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.bad_option(name, "a string", other.type_name())),
        }
    }

    /// Get a boolean option, falling back to `default` when absent.
    pub fn bool_option(&self, name: &str, default: bool) -> ValidationResult<bool> {
        match self.value_option(name)? {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.bad_option(name, "a boolean", other.type_name())),
        }
    }

    /// Get a nested-constraints option.
    pub fn rules_option(&self, name: &str) -> ValidationResult<&[Constraint]> {
        match self.option(name) {
            None => Ok(&[]),
            Some(OptionValue::Rules(rules)) => Ok(rules),
            Some(other) => Err(self.bad_option(name, "constraints", other.describe())),
        }
    }

    /// Get a structured-map fields option.
    pub fn fields_option(&self, name: &str) -> ValidationResult<&[Field]> {
        match self.option(name) {
            None => Ok(&[]),
            Some(OptionValue::Fields(fields)) => Ok(fields),
            Some(other) => Err(self.bad_option(name, "fields", other.describe())),
        }
    }

    /// Message template for `key`, overridden or the kind's default.
    pub fn message(&self, key: &str) -> &str {
        self.messages
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, template)| template.as_str())
            .or_else(|| self.kind.default_message(key))
            .unwrap_or("")
    }

    /// Every constraint nested in this one's options, recursively.
    pub fn nested(&self) -> Vec<&Constraint> {
        let mut out = Vec::new();
        for (_, value) in &self.options {
            for rule in value.nested() {
                out.push(rule);
                out.extend(rule.nested());
            }
        }
        out
    }

    /// Make a `Default` member also answer to `group` (the declaring class name).
    pub(crate) fn add_implicit_group(&mut self, group: &GroupName) {
        if self.groups.iter().any(GroupName::is_default) && !self.in_group(group) {
            self.groups.push(group.clone());
        }
        for (_, value) in &mut self.options {
            for rule in value.nested_mut() {
                rule.add_implicit_group(group);
            }
        }
    }

    fn bad_option(&self, name: &str, expected: &str, actual: &str) -> ValidationError {
        ValidationError::invalid_rule_configuration(
            self.kind.name,
            format!("option \"{}\" must be {}, got {}", name, expected, actual),
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind.name, self.id)
    }
}

/// Builder for a [`Constraint`].
#[derive(Debug)]
pub struct ConstraintBuilder {
    kind: &'static ConstraintKind,
    options: Vec<(String, OptionValue)>,
    positional: Option<OptionValue>,
    messages: Vec<(String, String)>,
    groups: Vec<GroupName>,
}

impl ConstraintBuilder {
    /// Set a named option.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.push((name.into(), value.into()));
        self
    }

    /// Set the kind's default option without naming it.
    pub fn default_option(mut self, value: impl Into<OptionValue>) -> Self {
        self.positional = Some(value.into());
        self
    }

    /// Override a message template.
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.push((key.into(), template.into()));
        self
    }

    /// Set the groups this constraint belongs to.
    pub fn groups<I, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GroupName>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Check the options against the kind and build the constraint.
    pub fn build(mut self) -> ValidationResult<Constraint> {
        let kind = self.kind;
        let invalid = |message: String| ValidationError::invalid_rule_configuration(kind.name, message);

        if let Some(value) = self.positional.take() {
            let Some(default) = kind.default_option else {
                return Err(invalid(
                    "no default option is configured, options must be named".to_string(),
                ));
            };
            if self.options.iter().any(|(k, _)| k == default) {
                return Err(invalid(format!(
                    "option \"{}\" is given both by name and as the default option",
                    default
                )));
            }
            self.options.insert(0, (default.to_string(), value));
        }

        // Message options may arrive in the option bag as plain strings
        let mut options = Vec::with_capacity(self.options.len());
        for (name, value) in std::mem::take(&mut self.options) {
            if kind.default_message(&name).is_none() {
                options.push((name, value));
                continue;
            }
            match value {
                OptionValue::Value(Value::String(template)) => self.messages.push((name, template)),
                other => {
                    return Err(invalid(format!(
                        "option \"{}\" must be a string, {} given",
                        name,
                        other.describe()
                    )))
                }
            }
        }
        self.options = options;

        for (name, _) in &self.options {
            if !kind.accepts(name) {
                return Err(invalid(format!("option \"{}\" does not exist", name)));
            }
        }
        for (key, _) in &self.messages {
            if kind.default_message(key).is_none() {
                return Err(invalid(format!("message \"{}\" does not exist", key)));
            }
        }
        for required in kind.required {
            if !self.options.iter().any(|(k, _)| k == required) {
                return Err(invalid(format!("option \"{}\" must be given", required)));
            }
        }

        let constraint = self.finish();
        let groups = constraint.groups.clone();
        for nested in constraint.nested() {
            if let Some(stray) = nested.groups.iter().find(|g| !groups.contains(g)) {
                return Err(invalid(format!(
                    "nested {} belongs to group \"{}\" which the composite does not",
                    nested.name(),
                    stray
                )));
            }
        }
        Ok(constraint)
    }

    /// Build without option checks. Used by the infallible constructors in
    /// [`rules`](crate::rules), whose options are valid by construction.
    pub(crate) fn finish(mut self) -> Constraint {
        if let Some(value) = self.positional.take() {
            if let Some(default) = self.kind.default_option {
                self.options.insert(0, (default.to_string(), value));
            }
        }
        if self.groups.is_empty() {
            self.groups.push(GroupName::default_group());
        }

        let parent_groups = self.groups.clone();
        let inherits = !(parent_groups.len() == 1 && parent_groups[0].is_default());
        if inherits {
            for (_, value) in &mut self.options {
                for rule in value.nested_mut() {
                    rule.inherit_groups(&parent_groups);
                }
            }
        }

        Constraint {
            id: next_constraint_id(),
            kind: self.kind,
            options: self.options,
            messages: self.messages,
            groups: self.groups,
        }
    }
}

impl Constraint {
    /// Nested constraints left in `Default` take the composite's groups.
    fn inherit_groups(&mut self, groups: &[GroupName]) {
        if self.groups.len() == 1 && self.groups[0].is_default() {
            self.groups = groups.to_vec();
            for (_, value) in &mut self.options {
                for rule in value.nested_mut() {
                    rule.inherit_groups(groups);
                }
            }
        }
    }
}
