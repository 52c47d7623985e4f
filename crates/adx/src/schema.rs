//! Declarative description of a resource's attributes.
//!
//! The host framework uses the schema for planning; this crate uses the
//! validators declared here to check configuration before any command is
//! sent.

use adx_core::Violation;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    /// Bumped when the stored state layout changes
    pub version: u64,

    pub block: Block,
}

/// A set of named attributes, either the resource's top level or the element
/// of a list attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub attributes: IndexMap<&'static str, Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub ty: AttributeType,
    pub presence: Presence,

    /// When true, changing the attribute replaces the resource
    pub force_new: bool,

    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    List(Block),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,

    /// May be set by configuration, filled in by the provider otherwise
    OptionalComputed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    NotEmpty,

    /// Value must not contain the character, e.g. the resource ID delimiter
    Excludes(char),

    /// Value must equal one of `values`, ignoring ASCII case
    OneOf(&'static [&'static str]),
}

impl ResourceSchema {
    pub fn v0() -> ResourceSchema {
        ResourceSchema {
            version: 0,
            block: Block::default(),
        }
    }

    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.block.attributes.insert(name, attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.block.attributes.get(name)
    }
}

impl Block {
    pub fn new() -> Block {
        Block::default()
    }

    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    /// Block describing the elements of the named list attribute.
    pub fn nested(&self, name: &str) -> Option<&Block> {
        match &self.attributes.get(name)?.ty {
            AttributeType::List(block) => Some(block),
            AttributeType::String => None,
        }
    }

    /// Runs the validators of attribute `name` against `value`.
    ///
    /// `path` names the attribute in violations, e.g. `mapping.0.column`.
    pub fn check(&self, path: &str, name: &str, value: &str) -> Vec<Violation> {
        let Some(attribute) = self.attributes.get(name) else {
            return vec![];
        };

        attribute
            .validators
            .iter()
            .filter_map(|validator| validator.check(path, value))
            .collect()
    }
}

impl Attribute {
    fn string(presence: Presence) -> Attribute {
        Attribute {
            ty: AttributeType::String,
            presence,
            force_new: false,
            validators: vec![],
        }
    }

    pub fn required_string() -> Attribute {
        Attribute::string(Presence::Required)
    }

    pub fn optional_string() -> Attribute {
        Attribute::string(Presence::Optional)
    }

    pub fn optional_computed_string() -> Attribute {
        Attribute::string(Presence::OptionalComputed)
    }

    pub fn required_list(block: Block) -> Attribute {
        Attribute {
            ty: AttributeType::List(block),
            presence: Presence::Required,
            force_new: false,
            validators: vec![],
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    pub fn is_computed(&self) -> bool {
        self.presence == Presence::OptionalComputed
    }
}

impl Validator {
    pub fn check(&self, path: &str, value: &str) -> Option<Violation> {
        match self {
            Validator::NotEmpty if value.is_empty() => Some(Violation::empty(path)),
            Validator::NotEmpty => None,
            Validator::Excludes(c) if value.contains(*c) => {
                Some(Violation::contains(path, value, *c))
            }
            Validator::Excludes(_) => None,
            Validator::OneOf(values) => {
                let found = values.iter().any(|allowed| allowed.eq_ignore_ascii_case(value));
                (!found).then(|| Violation::not_one_of(path, value, values))
            }
        }
    }
}
